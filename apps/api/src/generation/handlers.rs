//! Axum route handlers for the cover letter API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::pipeline::run_pipeline;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/v1/cover-letters
///
/// Multipart form: a `resume` part (PDF file) and a `job_url` text part.
/// Runs the full pipeline and returns the generated letter. Pipeline
/// failures surface as a generic error body — raw model output stays in
/// the logs.
pub async fn handle_create_cover_letter(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut job_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read resume: {e}")))?;
                resume_bytes = Some(bytes);
            }
            Some("job_url") => {
                let url = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read job_url: {e}")))?;
                job_url = Some(url);
            }
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("missing 'resume' file part".to_string()))?;
    let job_url =
        job_url.ok_or_else(|| AppError::Validation("missing 'job_url' field".to_string()))?;

    if resume_bytes.is_empty() {
        return Err(AppError::Validation("resume upload is empty".to_string()));
    }
    if job_url.trim().is_empty() {
        return Err(AppError::Validation("job_url cannot be empty".to_string()));
    }

    info!(
        resume_bytes = resume_bytes.len(),
        job_url = %job_url,
        "cover letter request received"
    );

    let letter = run_pipeline(
        &resume_bytes,
        &job_url,
        state.llm.as_ref(),
        state.fetcher.as_ref(),
    )
    .await?;

    Ok(Json(CoverLetterResponse {
        cover_letter: letter,
    }))
}

//! Cover Letter Generator — the final completion call over both structured
//! records. The model's text is returned verbatim: no post-processing, no
//! length trimming, no markdown stripping.

use thiserror::Error;
use tracing::debug;

use crate::generation::job::JobRecord;
use crate::generation::prompts::LETTER_SYSTEM;
use crate::generation::resume::ResumeRecord;
use crate::llm_client::{CompletionClient, LlmError};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("failed to serialize records for the prompt: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("model returned an empty letter")]
    Empty,
}

/// Generates a cover letter from one fully populated resume record and one
/// fully populated job record. Incomplete records never reach this stage —
/// the structurers fail closed before the orchestrator gets here.
pub async fn generate_letter(
    resume: &ResumeRecord,
    job: &JobRecord,
    llm: &dyn CompletionClient,
) -> Result<String, GenerationError> {
    let prompt = letter_prompt(resume, job)?;
    let letter = llm.complete(LETTER_SYSTEM, &prompt).await?;

    if letter.trim().is_empty() {
        return Err(GenerationError::Empty);
    }

    debug!(chars = letter.len(), "cover letter generated");
    Ok(letter)
}

/// User turn for the generation call: a serialized view of both records.
fn letter_prompt(resume: &ResumeRecord, job: &JobRecord) -> Result<String, serde_json::Error> {
    Ok(format!(
        "Resume: {}\nJob: {}",
        serde_json::to_string(resume)?,
        serde_json::to_string(job)?
    ))
}

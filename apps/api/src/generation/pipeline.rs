//! Pipeline Orchestrator — sequences the full cover letter run.
//!
//! Flow: extract resume text → fetch job posting → structure resume and job
//! concurrently → generate the letter.
//!
//! Extraction and fetching stay sequential even though they are
//! independent; only the two structuring calls overlap. One orchestrator
//! run serves one request — there is no resumption after failure.

use thiserror::Error;
use tracing::{error, info};

use crate::extract::{extract_resume_text, ExtractionError};
use crate::generation::job::structure_job;
use crate::generation::letter::{generate_letter, GenerationError};
use crate::generation::resume::structure_resume;
use crate::llm_client::{CompletionClient, LlmError};
use crate::scrape::{ContentFetcher, FetchError};

#[derive(Debug, Error)]
pub enum StructuringError {
    #[error("resume structuring failed: {0}")]
    Resume(#[source] LlmError),

    #[error("job posting structuring failed: {0}")]
    Job(#[source] LlmError),
}

/// Overall pipeline failure, tagged with the stage that produced it. Every
/// variant is recoverable at the request level — a new request with the
/// same inputs may succeed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("resume text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("job posting fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("document structuring failed: {0}")]
    Structuring(#[from] StructuringError),

    #[error("cover letter generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl PipelineError {
    /// Stage name for logs and error bodies.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Extraction(_) => "extraction",
            PipelineError::Fetch(_) => "fetch",
            PipelineError::Structuring(_) => "structuring",
            PipelineError::Generation(_) => "generation",
        }
    }
}

/// Runs the full pipeline for one request and returns the generated letter.
///
/// The first stage failure aborts the run; later stages are never reached
/// with partial inputs. The two structuring calls are awaited jointly —
/// neither is cancelled when the other fails, but either failure fails the
/// run regardless of the other's success.
pub async fn run_pipeline(
    pdf_bytes: &[u8],
    job_url: &str,
    llm: &dyn CompletionClient,
    fetcher: &dyn ContentFetcher,
) -> Result<String, PipelineError> {
    // Step 1: extract the resume's text layer (spools to a scoped temp file)
    let resume_text = extract_resume_text(pdf_bytes)?;
    info!(chars = resume_text.len(), "resume text extracted");

    // Step 2: fetch the job posting. A failure here (e.g. HTTP 404) stops
    // the run before any completion call is issued.
    let job_content = fetcher.fetch(job_url).await?;
    info!(chars = job_content.len(), "job posting fetched");

    // Step 3: structure both documents concurrently. Each call owns its own
    // request/response cycle; nothing is shared between them.
    let (resume, job) = tokio::join!(
        structure_resume(&resume_text, llm),
        structure_job(&job_content, llm),
    );

    if let Err(e) = &resume {
        error!("resume structuring failed: {e}");
    }
    if let Err(e) = &job {
        error!("job structuring failed: {e}");
    }
    let resume = resume.map_err(StructuringError::Resume)?;
    let job = job.map_err(StructuringError::Job)?;
    info!(title = %job.title, company = %job.company, "both documents structured");

    // Step 4: generate the letter from both records
    let letter = generate_letter(&resume, &job, llm).await?;
    info!(chars = letter.len(), "cover letter generated");

    Ok(letter)
}

//! Job Structurer — one completion call that turns scraped job posting
//! content into a typed record. Same contract as the resume structurer,
//! distinct prompt and schema.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::JOB_PARSE_SYSTEM;
use crate::llm_client::{complete_json, CompletionClient, LlmError};

/// Structured job posting extracted by the model. All fields required;
/// fails closed on any schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub requirements: Vec<String>,
    pub description: String,
}

/// Structures job posting content via the completion endpoint. Single
/// attempt, no repair-prompt loop.
pub async fn structure_job(
    job_content: &str,
    llm: &dyn CompletionClient,
) -> Result<JobRecord, LlmError> {
    complete_json::<JobRecord>(llm, JOB_PARSE_SYSTEM, job_content).await
}

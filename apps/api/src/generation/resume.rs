//! Resume Structurer — one completion call that turns raw resume text into a
//! typed record.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::RESUME_PARSE_SYSTEM;
use crate::llm_client::{complete_json, CompletionClient, LlmError};

/// Structured resume contents extracted by the model.
///
/// Either every field deserializes or the structuring attempt failed as a
/// whole — a missing, mistyped, or unexpected field rejects the record.
/// Empty lists are valid. Immutable once constructed; lives for one
/// pipeline run only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeRecord {
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub contact_info: String,
}

/// Structures resume text via the completion endpoint. Single attempt — any
/// failure abandons the run, there is no repair-prompt loop.
pub async fn structure_resume(
    resume_text: &str,
    llm: &dyn CompletionClient,
) -> Result<ResumeRecord, LlmError> {
    complete_json::<ResumeRecord>(llm, RESUME_PARSE_SYSTEM, resume_text).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubCompletion;

    const RESUME_TEXT: &str = "Jane Doe — jane@example.com\n\
        Senior backend engineer, 6 years building payment systems in Rust and Go.\n\
        BSc Computer Science, ETH Zurich.";

    #[tokio::test]
    async fn test_structures_well_formed_response() {
        let stub = StubCompletion::new().respond(
            RESUME_PARSE_SYSTEM,
            r#"{
                "experience": ["Senior backend engineer, payment systems"],
                "skills": ["Rust", "Go"],
                "education": ["BSc Computer Science, ETH Zurich"],
                "contact_info": "jane@example.com"
            }"#,
        );

        let record = structure_resume(RESUME_TEXT, &stub).await.unwrap();
        assert_eq!(record.skills, vec!["Rust", "Go"]);
        assert_eq!(record.contact_info, "jane@example.com");
        assert_eq!(stub.calls_for(RESUME_PARSE_SYSTEM), 1);
    }

    #[tokio::test]
    async fn test_document_text_is_the_user_turn() {
        let stub = StubCompletion::new().respond(
            RESUME_PARSE_SYSTEM,
            r#"{"experience": [], "skills": [], "education": [], "contact_info": "x"}"#,
        );

        structure_resume(RESUME_TEXT, &stub).await.unwrap();
        assert_eq!(stub.user_turns_for(RESUME_PARSE_SYSTEM), vec![RESUME_TEXT]);
    }

    #[tokio::test]
    async fn test_empty_lists_are_valid() {
        let stub = StubCompletion::new().respond(
            RESUME_PARSE_SYSTEM,
            r#"{"experience": [], "skills": [], "education": [], "contact_info": "jane@example.com"}"#,
        );

        let record = structure_resume(RESUME_TEXT, &stub).await.unwrap();
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        // contact_info absent — must fail, never a partial record
        let stub = StubCompletion::new().respond(
            RESUME_PARSE_SYSTEM,
            r#"{"experience": ["A"], "skills": ["B"], "education": ["C"]}"#,
        );

        let result = structure_resume(RESUME_TEXT, &stub).await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_rejects_unexpected_field() {
        let stub = StubCompletion::new().respond(
            RESUME_PARSE_SYSTEM,
            r#"{
                "experience": ["A"], "skills": ["B"], "education": ["C"],
                "contact_info": "x@y.com", "summary": "extra"
            }"#,
        );

        let result = structure_resume(RESUME_TEXT, &stub).await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_rejects_mistyped_field() {
        let stub = StubCompletion::new().respond(
            RESUME_PARSE_SYSTEM,
            r#"{"experience": "not a list", "skills": [], "education": [], "contact_info": "x"}"#,
        );

        let result = structure_resume(RESUME_TEXT, &stub).await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_rejects_prose_response() {
        let stub = StubCompletion::new()
            .respond(RESUME_PARSE_SYSTEM, "Sure! Here is the resume breakdown:");

        let result = structure_resume(RESUME_TEXT, &stub).await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }
}

//! Question Generator: pluggable seam between the HTTP handler and the LLM.
//!
//! `AppState` holds an `Arc<dyn QuestionGenerator>`; `LlmQuestionGenerator` is
//! the production backend.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::prompts::{
    build_interview_prompt, BEHAVIORAL_HEADER, INTERVIEW_SYSTEM, TECHNICAL_HEADER,
};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Produces newline-separated interview questions for a resume and a job description.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, resume_text: &str, job_desc_text: &str) -> Result<String, AppError>;
}

pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, resume_text: &str, job_desc_text: &str) -> Result<String, AppError> {
        let prompt = build_interview_prompt(resume_text, job_desc_text);
        let questions = self
            .llm
            .call_text(&prompt, Some(INTERVIEW_SYSTEM))
            .await
            .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

        let missing = missing_headers(&questions);
        if !missing.is_empty() {
            warn!(?missing, "generated questions lack expected section headers");
        }
        info!(lines = questions.lines().count(), "questions generated");

        Ok(questions)
    }
}

/// Section headers that do not appear on a line of their own.
fn missing_headers(questions: &str) -> Vec<&'static str> {
    [BEHAVIORAL_HEADER, TECHNICAL_HEADER]
        .into_iter()
        .filter(|header| !questions.lines().any(|line| line.trim() == *header))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_headers_none() {
        let text = "Behavioral Questions:\n1. Conflict?\nTechnical Questions:\n1. Lifetimes?";
        assert!(missing_headers(text).is_empty());
    }

    #[test]
    fn test_missing_headers_detects_markdown_variant() {
        let text = "**Behavioral Questions:**\n1. Conflict?\nTechnical Questions:\n1. Lifetimes?";
        assert_eq!(missing_headers(text), vec![BEHAVIORAL_HEADER]);
    }

    #[test]
    fn test_missing_headers_both() {
        assert_eq!(
            missing_headers("1. Tell me about yourself"),
            vec![BEHAVIORAL_HEADER, TECHNICAL_HEADER]
        );
    }
}

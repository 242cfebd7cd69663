//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::resume_text::extract_resume_text;
use crate::errors::AppError;
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_desc_text";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Uploaded resume as received from the multipart form.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub resume: Option<ResumeUpload>,
    pub job_desc_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Newline-separated entries: section headers and questions.
    pub generated_questions: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart form: `resume` (PDF or text file) and `job_desc_text`.
/// Returns interview questions generated from both.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let form = read_analyze_form(multipart).await?;

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation(format!("'{RESUME_FIELD}' file is required")))?;
    let job_desc_text = form.job_desc_text.ok_or_else(|| {
        AppError::Validation(format!("'{JOB_DESCRIPTION_FIELD}' field is required"))
    })?;

    info!(
        %request_id,
        resume = %resume.file_name,
        resume_bytes = resume.bytes.len(),
        "analysis requested"
    );

    let resume_text = extract_resume_text(&resume.file_name, resume.bytes).await?;
    let generated_questions = state
        .generator
        .generate(&resume_text, &job_desc_text)
        .await?;

    info!(%request_id, "analysis complete");
    Ok(Json(AnalyzeResponse {
        generated_questions,
    }))
}

/// Collects the known fields of the analysis form. Unknown fields are skipped.
async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read '{RESUME_FIELD}': {e}"))
                })?;
                form.resume = Some(ResumeUpload { file_name, bytes });
            }
            JOB_DESCRIPTION_FIELD => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read '{JOB_DESCRIPTION_FIELD}': {e}"))
                })?;
                form.job_desc_text = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

//! Analysis client: the only code that talks to the remote analysis service.
//!
//! One multipart POST per submission: `resume` (file part) and `job_desc_text`
//! (text part). No timeout and no retry; a request either settles or the
//! transport eventually reports an error.

use async_trait::async_trait;
use reqwest::{multipart, Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::errors::ServiceError;
use crate::resume::ResumeFile;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_desc_text";

/// A validated submission, ready to be sent.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume: ResumeFile,
    pub job_desc_text: String,
}

/// Body of a successful analysis response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    /// Newline-delimited questions and section headers.
    pub generated_questions: String,
}

/// Transport seam between the session and the analysis service.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ServiceError>;
}

/// `AnalysisService` backed by a real HTTP endpoint.
#[derive(Clone)]
pub struct HttpAnalysisService {
    client: Client,
    endpoint: Url,
}

impl HttpAnalysisService {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ServiceError> {
        let resume_part = multipart::Part::bytes(request.resume.bytes.to_vec())
            .file_name(request.resume.file_name.clone())
            .mime_str(request.resume.content_type)?;

        let form = multipart::Form::new()
            .part(RESUME_FIELD, resume_part)
            .text(JOB_DESCRIPTION_FIELD, request.job_desc_text.clone());

        debug!(
            endpoint = %self.endpoint,
            resume = %request.resume.file_name,
            "posting analysis request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

use thiserror::Error;

/// The one notice shown to the user for any failed submission, whatever the cause.
pub const GENERIC_ALERT: &str = "An error occurred while generating questions.";

/// Failure talking to the analysis service.
///
/// Variants exist for diagnostics only. Every variant surfaces to the user as
/// [`GENERIC_ALERT`]; the detail goes to the log.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed analysis response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while the user is picking a resume file.
#[derive(Debug, Error)]
pub enum ResumeSelectError {
    #[error("unsupported resume file '{0}': expected a .pdf or .txt file")]
    UnsupportedExtension(String),

    #[error("could not read resume file: {0}")]
    Io(#[from] std::io::Error),
}

//! Resume text extraction. PDFs go through `pdf-extract`; anything else must be UTF-8 text.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

fn is_pdf(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}

/// Returns the plain text of an uploaded resume.
pub async fn extract_resume_text(file_name: &str, bytes: Bytes) -> Result<String, AppError> {
    let text = if is_pdf(file_name) {
        // pdf-extract is CPU-bound and synchronous
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
            .map_err(|e| {
                AppError::UnprocessableEntity(format!("Could not read PDF resume: {e}"))
            })?
    } else {
        String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Resume must be a PDF or UTF-8 text file".to_string())
        })?
    };

    debug!(file = %file_name, chars = text.chars().count(), "extracted resume text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_detection() {
        assert!(is_pdf("resume.pdf"));
        assert!(is_pdf("RESUME.PDF"));
        assert!(!is_pdf("resume.txt"));
        assert!(!is_pdf("pdf"));
    }

    #[tokio::test]
    async fn test_text_resume_decoded() {
        let text = extract_resume_text("resume.txt", Bytes::from_static("Zoë Ortiz, Rust".as_bytes()))
            .await
            .unwrap();
        assert_eq!(text, "Zoë Ortiz, Rust");
    }

    #[tokio::test]
    async fn test_invalid_utf8_rejected() {
        let err = extract_resume_text("resume.txt", Bytes::from_static(&[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_rejected() {
        let err = extract_resume_text("resume.pdf", Bytes::from_static(b"not really a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}

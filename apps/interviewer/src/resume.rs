use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use crate::errors::ResumeSelectError;

/// A resume the user has selected, held in memory until it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl ResumeFile {
    /// Wraps an in-memory selection. Only `.pdf` and `.txt` files are accepted.
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Result<Self, ResumeSelectError> {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name)
            .ok_or_else(|| ResumeSelectError::UnsupportedExtension(file_name.clone()))?;

        Ok(ResumeFile {
            file_name,
            content_type,
            bytes: bytes.into(),
        })
    }

    /// Reads a resume from disk. The extension is checked before any I/O.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ResumeSelectError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if content_type_for(&file_name).is_none() {
            return Err(ResumeSelectError::UnsupportedExtension(file_name));
        }

        let bytes = tokio::fs::read(path).await?;
        debug!(file = %file_name, size = bytes.len(), "loaded resume");
        Self::from_bytes(file_name, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn content_type_for(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

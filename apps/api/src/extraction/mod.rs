//! Text extraction — turns an uploaded document into plain text.
//!
//! Pluggable via `TextExtractor` so handlers can be tested without real PDFs.
//! `AppState` holds an `Arc<dyn TextExtractor>`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document '{0}' is empty")]
    EmptyDocument(String),

    #[error("unsupported document format for '{0}' (expected PDF or plain text)")]
    UnsupportedFormat(String),

    #[error("failed to read PDF '{file_name}': {message}")]
    Pdf { file_name: String, message: String },

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Converts an uploaded document into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Pdf,
    PlainText,
}

/// Default extractor: PDF through `pdf-extract`, UTF-8 text passed through.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyDocument(file_name.to_string()));
        }

        match detect_kind(file_name, bytes) {
            Some(DocumentKind::Pdf) => {
                let owned = bytes.to_vec();
                let name = file_name.to_string();
                // pdf-extract is CPU-bound and synchronous.
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&owned).map_err(|e| ExtractionError::Pdf {
                        file_name: name,
                        message: e.to_string(),
                    })
                })
                .await??;
                debug!("Extracted {} chars from PDF '{}'", text.len(), file_name);
                Ok(text)
            }
            Some(DocumentKind::PlainText) => String::from_utf8(bytes.to_vec())
                .map_err(|_| ExtractionError::UnsupportedFormat(file_name.to_string())),
            None => Err(ExtractionError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

/// Magic bytes win over the file extension; unknown extensions are accepted
/// as text only when the payload is valid UTF-8.
fn detect_kind(file_name: &str, bytes: &[u8]) -> Option<DocumentKind> {
    if bytes.starts_with(PDF_MAGIC) {
        return Some(DocumentKind::Pdf);
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => Some(DocumentKind::Pdf),
        Some("txt") | Some("md") | Some("text") => Some(DocumentKind::PlainText),
        _ if std::str::from_utf8(bytes).is_ok() => Some(DocumentKind::PlainText),
        _ => None,
    }
}

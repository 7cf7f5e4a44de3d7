//! Document-to-text adapters feeding the resume parser.
//!
//! Extraction is CPU-bound and runs inside `tokio::task::spawn_blocking`.
//! `AppState` holds an `Arc<dyn TextExtractor>`, swapped in tests.

pub mod docx;
pub mod handlers;
pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_WORD: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Upload formats the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    /// `application/msword`: often a mislabelled .docx, read as one.
    LegacyWord,
}

impl DocumentKind {
    /// Maps a MIME type (parameters ignored) to a document kind.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            MIME_PDF => Some(DocumentKind::Pdf),
            MIME_DOCX => Some(DocumentKind::Docx),
            MIME_WORD => Some(DocumentKind::LegacyWord),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::LegacyWord => "doc",
        }
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, AppError>;
}

/// Default extractor: `pdf-extract` for PDF, the OOXML reader for Word.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, AppError> {
        let joined = tokio::task::spawn_blocking(move || match kind {
            DocumentKind::Pdf => pdf::extract_pdf_text(&bytes),
            DocumentKind::Docx => docx::extract_docx_text(&bytes),
            DocumentKind::LegacyWord => docx::extract_docx_text(&bytes).map_err(|_| {
                AppError::Extraction(
                    "Legacy .doc files are not supported; save the document as .docx".to_string(),
                )
            }),
        })
        .await;

        match joined {
            Ok(result) => result,
            // pdf-extract panics on some malformed inputs
            Err(e) if e.is_panic() => Err(AppError::Extraction(format!(
                "the {} document could not be read",
                kind.label()
            ))),
            Err(e) => Err(AppError::Internal(anyhow::Error::new(e))),
        }
    }
}

//! Axum route handler for resume uploads.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::ats::report::ScoreReport;
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::models::resume::StructuredResume;
use crate::parsing::parse_resume_text;
use crate::state::AppState;

/// Multipart field carrying the document.
pub const UPLOAD_FIELD: &str = "resume";

const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Only PDF and Word documents are allowed.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub data: StructuredResume,
    pub ats_score: ScoreReport,
}

/// POST /api/upload
///
/// Extracts text from an uploaded PDF/Word document, parses it and scores it.
/// The document is held in memory only for the duration of the request.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload_id = Uuid::new_v4();
    let (kind, bytes) = read_document_field(&mut multipart).await?;
    info!(%upload_id, kind = kind.label(), bytes = bytes.len(), "resume upload received");

    let text = state.extractor.extract(kind, bytes).await?;
    let data = parse_resume_text(&text);
    let ats_score = state.scorer.score(&data);

    info!(
        %upload_id,
        chars = text.chars().count(),
        overall_score = ats_score.overall_score,
        "resume upload scored"
    );

    Ok(Json(UploadResponse {
        success: true,
        data,
        ats_score,
    }))
}

/// Finds the `resume` field, checks its declared type and buffers it.
async fn read_document_field(
    multipart: &mut Multipart,
) -> Result<(DocumentKind, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let kind = field
            .content_type()
            .and_then(DocumentKind::from_mime)
            .ok_or_else(|| AppError::UnsupportedMediaType(INVALID_TYPE_MESSAGE.to_string()))?;
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok((kind, bytes));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}

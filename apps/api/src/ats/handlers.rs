//! Axum route handlers for resume analysis.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::ats::report::ScoreReport;
use crate::errors::AppError;
use crate::models::resume::{json_kind, StructuredResume};
use crate::parsing::parse_resume_text;
use crate::state::AppState;

/// The two accepted shapes of an analyze request.
#[derive(Debug, PartialEq)]
pub enum AnalyzeInput {
    /// `{"text": "..."}`: raw text, parsed before scoring.
    Text(String),
    /// Any other object: a pre-structured resume, scored directly.
    Structured(StructuredResume),
}

impl AnalyzeInput {
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        if let Value::Object(map) = &value {
            if map.len() == 1 {
                if let Some(text) = map.get("text") {
                    return match text {
                        Value::String(s) => Ok(AnalyzeInput::Text(s.clone())),
                        other => Err(AppError::InvalidInput(format!(
                            "text must be a string, got {}",
                            json_kind(other)
                        ))),
                    };
                }
            }
        }
        StructuredResume::from_json(value).map(AnalyzeInput::Structured)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    /// Present only when the request carried raw text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StructuredResume>,
    pub ats_score: ScoreReport,
}

/// POST /api/analyze
///
/// Scores a structured resume, or parses then scores `{"text": ...}`.
/// The body is read raw so malformed JSON reports as `INVALID_INPUT`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidInput(format!("body is not valid JSON: {e}")))?;

    let response = match AnalyzeInput::from_json(value)? {
        AnalyzeInput::Text(text) => {
            let resume = parse_resume_text(&text);
            let ats_score = state.scorer.score(&resume);
            AnalyzeResponse {
                success: true,
                data: Some(resume),
                ats_score,
            }
        }
        AnalyzeInput::Structured(resume) => AnalyzeResponse {
            success: true,
            data: None,
            ats_score: state.scorer.score(&resume),
        },
    };

    info!(
        overall_score = response.ats_score.overall_score,
        parsed = response.data.is_some(),
        "resume analyzed"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_only_object_is_raw_text() {
        let input = AnalyzeInput::from_json(json!({"text": "Jane Doe"})).unwrap();
        assert_eq!(input, AnalyzeInput::Text("Jane Doe".to_string()));
    }

    #[test]
    fn test_text_must_be_string() {
        let err = AnalyzeInput::from_json(json!({"text": 42})).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_text_with_other_fields_is_structured() {
        // unknown keys are ignored by the structured shape
        let input =
            AnalyzeInput::from_json(json!({"text": "x", "email": "a@b.io"})).unwrap();
        match input {
            AnalyzeInput::Structured(resume) => assert_eq!(resume.email, "a@b.io"),
            other => panic!("expected structured input, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_object_is_structured() {
        let input = AnalyzeInput::from_json(json!({})).unwrap();
        assert_eq!(input, AnalyzeInput::Structured(StructuredResume::default()));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = AnalyzeInput::from_json(json!(["a"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}

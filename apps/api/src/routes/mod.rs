pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_analyze;
use crate::catalog::handlers::{
    handle_get_skills, handle_list_templates, handle_render_cover_letter,
};
use crate::extraction::handlers::handle_upload;
use crate::matching::handlers::handle_job_match;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Parsing and scoring
        .route("/api/upload", post(handle_upload))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/job-match", post(handle_job_match))
        // Editor catalogs
        .route("/api/skills/:category", get(handle_get_skills))
        .route("/api/cover-letter-templates", get(handle_list_templates))
        .route("/api/cover-letter/render", post(handle_render_cover_letter))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::docx::tests::build_docx;
    use crate::extraction::{MIME_DOCX, MIME_PDF};

    const BOUNDARY: &str = "resume-test-boundary";

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn multipart_request(field: &str, mime: &str, payload: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"resume\"\r\nContent-Type: {mime}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_analyze_empty_object() {
        let (status, body) = send(app(), post_json("/api/analyze", "{}".into())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body.get("data").is_none());
        assert_eq!(body["atsScore"]["overallScore"], 5);
        assert_eq!(body["atsScore"]["grade"]["letter"], "F");
        assert_eq!(body["atsScore"]["sections"]["keywords"]["found"], json!([]));
    }

    #[tokio::test]
    async fn test_analyze_raw_text_is_parsed_first() {
        let payload = json!({"text": "Jane Doe\njane@example.com"}).to_string();
        let (status, body) = send(app(), post_json("/api/analyze", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert_eq!(body["data"]["email"], "jane@example.com");
        assert_eq!(body["data"]["rawText"], "Jane Doe\njane@example.com");
        assert_eq!(body["atsScore"]["sections"]["contact"]["score"], 3);
    }

    #[tokio::test]
    async fn test_analyze_non_object_is_invalid_input() {
        let (status, body) = send(app(), post_json("/api/analyze", "[1, 2]".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_analyze_malformed_json_is_invalid_input() {
        let (status, body) = send(app(), post_json("/api/analyze", "{nope".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_upload_docx() {
        let docx = build_docx(
            "<w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>jane@example.com</w:t></w:r></w:p></w:body>",
        );
        let (status, body) = send(app(), multipart_request("resume", MIME_DOCX, &docx)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert_eq!(body["data"]["email"], "jane@example.com");
        assert!(body["atsScore"]["overallScore"].is_u64());
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let (status, body) =
            send(app(), multipart_request("resume", "image/png", b"\x89PNG")).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_without_resume_field() {
        let (status, body) = send(app(), multipart_request("avatar", MIME_PDF, b"%PDF")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_over_limit() {
        let config = Config {
            max_upload_bytes: 1024,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));
        let payload = vec![b'a'; 64 * 1024];
        let (status, body) = send(app, multipart_request("resume", MIME_PDF, &payload)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_job_match() {
        let payload = json!({
            "resume": {"rawText": "Python developer"},
            "jobDescription": "Python python engineer"
        })
        .to_string();
        let (status, body) = send(app(), post_json("/api/job-match", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["matchScore"], 50);
        assert_eq!(body["matchedKeywords"], json!(["python"]));
        assert_eq!(body["missingKeywords"], json!([]));
        assert_eq!(body["totalKeywords"], 2);
    }

    #[tokio::test]
    async fn test_job_match_requires_description() {
        let payload = json!({"resume": {}, "jobDescription": ""}).to_string();
        let (status, body) = send(app(), post_json("/api/job-match", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_skills_by_category() {
        let request = Request::builder()
            .uri("/api/skills/Design")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Design");
        assert_eq!(body["skills"][0], "Figma");
    }

    #[tokio::test]
    async fn test_cover_letter_templates() {
        let request = Request::builder()
            .uri("/api/cover-letter-templates")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["templates"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["templates"][0]["id"], "professional");
    }

    #[tokio::test]
    async fn test_render_cover_letter() {
        let payload = json!({
            "templateId": "professional",
            "fields": {"name": "Jane Doe"}
        })
        .to_string();
        let (status, body) = send(app(), post_json("/api/cover-letter/render", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["templateId"], "professional");
        assert!(body["text"].as_str().unwrap().ends_with("Sincerely,\nJane Doe"));
        assert_eq!(
            body["unfilled"],
            json!(["position", "company", "field", "achievement", "customParagraph"])
        );
    }

    #[tokio::test]
    async fn test_render_unknown_template() {
        let payload = json!({"templateId": "haiku"}).to_string();
        let (status, body) = send(app(), post_json("/api/cover-letter/render", payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

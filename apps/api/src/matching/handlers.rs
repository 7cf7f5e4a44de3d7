use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::job_match::{match_job, JobMatchReport};
use crate::models::resume::StructuredResume;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    pub resume: Option<StructuredResume>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: JobMatchReport,
}

/// POST /api/job-match
///
/// Compares the resume's raw text against a job description.
pub async fn handle_job_match(
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let (resume, job_description) = match (request.resume, request.job_description) {
        (Some(resume), Some(jd)) if !jd.is_empty() => (resume, jd),
        _ => {
            return Err(AppError::Validation(
                "Resume and job description are required".to_string(),
            ))
        }
    };

    let report = match_job(&resume.raw_text, &job_description);
    Ok(Json(JobMatchResponse {
        success: true,
        report,
    }))
}

//! Axum route handlers for the skill and cover-letter catalogs.

use std::collections::HashMap;

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::cover_letter::{
    find_template, render_cover_letter, CoverLetterTemplate, RenderedLetter,
    COVER_LETTER_TEMPLATES,
};
use crate::catalog::skills::skills_for_category;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub success: bool,
    /// Echoes the requested category, even when it fell back to soft skills.
    pub category: String,
    pub skills: &'static [&'static str],
}

/// GET /api/skills/:category
pub async fn handle_get_skills(Path(category): Path<String>) -> Json<SkillsResponse> {
    let skills = skills_for_category(&category);
    Json(SkillsResponse {
        success: true,
        category,
        skills,
    })
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub success: bool,
    pub templates: &'static [CoverLetterTemplate],
}

/// GET /api/cover-letter-templates
pub async fn handle_list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        success: true,
        templates: COVER_LETTER_TEMPLATES,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template_id: String,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub success: bool,
    pub template_id: String,
    #[serde(flatten)]
    pub letter: RenderedLetter,
}

/// POST /api/cover-letter/render
pub async fn handle_render_cover_letter(
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let template = find_template(&req.template_id).ok_or_else(|| {
        AppError::NotFound(format!("Cover letter template '{}'", req.template_id))
    })?;

    Ok(Json(RenderResponse {
        success: true,
        letter: render_cover_letter(template.template, &req.fields),
        template_id: req.template_id,
    }))
}

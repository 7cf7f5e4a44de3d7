//! Cover-letter templates and `{placeholder}` filling.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").unwrap();
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetterTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

pub const COVER_LETTER_TEMPLATES: &[CoverLetterTemplate] = &[
    CoverLetterTemplate {
        id: "professional",
        name: "Professional",
        description: "Formal and traditional approach",
        template: "Dear Hiring Manager,

I am writing to express my strong interest in the {position} position at {company}. With my background in {field} and proven track record of {achievement}, I am confident in my ability to contribute effectively to your team.

{customParagraph}

I would welcome the opportunity to discuss how my skills and experience align with your needs. Thank you for considering my application.

Sincerely,
{name}",
    },
    CoverLetterTemplate {
        id: "enthusiastic",
        name: "Enthusiastic",
        description: "Energetic and passionate tone",
        template: "Dear {company} Team,

I was thrilled to discover the {position} opportunity at {company}! As someone who is deeply passionate about {field}, I knew immediately that this role would be a perfect match for my skills and aspirations.

{customParagraph}

I am excited about the possibility of bringing my energy and expertise to your team. I would love to discuss how I can contribute to {company}'s continued success.

Best regards,
{name}",
    },
    CoverLetterTemplate {
        id: "career-change",
        name: "Career Change",
        description: "For transitioning to a new field",
        template: "Dear Hiring Manager,

While my background is in {previousField}, I am eager to transition into {field} and believe my transferable skills make me a strong candidate for the {position} role at {company}.

{customParagraph}

I am committed to this career change and have been actively developing relevant skills. I would appreciate the opportunity to discuss how my unique perspective could benefit your team.

Sincerely,
{name}",
    },
    CoverLetterTemplate {
        id: "fresher",
        name: "Fresh Graduate",
        description: "For entry-level positions",
        template: "Dear Hiring Manager,

As a recent graduate with a degree in {degree}, I am excited to apply for the {position} position at {company}. My academic training and internship experience have prepared me to contribute meaningfully to your team.

{customParagraph}

I am eager to begin my professional career with a company like {company} that values growth and innovation. Thank you for considering my application.

Sincerely,
{name}",
    },
];

pub fn find_template(id: &str) -> Option<&'static CoverLetterTemplate> {
    COVER_LETTER_TEMPLATES.iter().find(|t| t.id == id)
}

/// Result of filling a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLetter {
    pub text: String,
    /// Placeholders with no value, in order of first appearance.
    pub unfilled: Vec<String>,
}

/// Replaces every `{key}` present in `fields`; others stay verbatim.
pub fn render_cover_letter(template: &str, fields: &HashMap<String, String>) -> RenderedLetter {
    let mut unfilled: Vec<String> = Vec::new();
    let text = PLACEHOLDER
        .replace_all(template, |caps: &Captures| match fields.get(&caps[1]) {
            Some(value) => value.clone(),
            None => {
                if !unfilled.iter().any(|u| u == &caps[1]) {
                    unfilled.push(caps[1].to_string());
                }
                caps[0].to_string()
            }
        })
        .into_owned();

    RenderedLetter { text, unfilled }
}

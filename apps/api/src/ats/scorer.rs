//! ATS scoring: seven independently capped section scores, a letter grade,
//! and an ordered list of feedback messages.
//!
//! Default: `RuleBasedScorer` (regex and keyword membership, deterministic).
//! `AppState` holds an `Arc<dyn ResumeScorer>` so the handler never depends
//! on a concrete backend.

use tracing::debug;

use crate::ats::grade::grade_for;
use crate::ats::report::{
    FeedbackItem, FeedbackKind, KeywordSectionScore, ScoreReport, SectionScore, SectionScores,
};
use crate::models::resume::StructuredResume;
use crate::patterns::{ActionVerbPattern, QuantifiablePattern, SummaryKeywordPattern, TextPattern};
use crate::vocabulary::{INDUSTRY_KEYWORDS, SOFT_SKILLS};

pub const CONTACT_MAX: u32 = 10;
pub const SUMMARY_MAX: u32 = 15;
pub const EXPERIENCE_MAX: u32 = 25;
pub const EDUCATION_MAX: u32 = 10;
pub const SKILLS_MAX: u32 = 20;
pub const FORMATTING_MAX: u32 = 10;
pub const KEYWORDS_MAX: u32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a structured resume. Implementations must be pure: same input,
/// same report.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume: &StructuredResume) -> ScoreReport;
}

pub struct RuleBasedScorer;

impl ResumeScorer for RuleBasedScorer {
    fn score(&self, resume: &StructuredResume) -> ScoreReport {
        score_resume(resume)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback collection
// ────────────────────────────────────────────────────────────────────────────

/// Feedback in the order the rules emit it.
#[derive(Debug, Default)]
struct FeedbackLog(Vec<FeedbackItem>);

impl FeedbackLog {
    fn push(&mut self, kind: FeedbackKind, message: impl Into<String>) {
        self.0.push(FeedbackItem {
            kind,
            message: message.into(),
        });
    }

    fn error(&mut self, message: impl Into<String>) {
        self.push(FeedbackKind::Error, message);
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.push(FeedbackKind::Warning, message);
    }

    fn tip(&mut self, message: impl Into<String>) {
        self.push(FeedbackKind::Tip, message);
    }

    fn count(&self, pred: impl Fn(FeedbackKind) -> bool) -> usize {
        self.0.iter().filter(|item| pred(item.kind)).count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume. Total: partially filled records simply lose points.
///
/// Sections are evaluated, and append feedback, in the order contact,
/// summary, experience, education, skills, formatting, keywords.
pub fn score_resume(resume: &StructuredResume) -> ScoreReport {
    let mut feedback = FeedbackLog::default();

    let sections = SectionScores {
        contact: SectionScore::new(score_contact(resume, &mut feedback), CONTACT_MAX),
        summary: SectionScore::new(score_summary(&resume.summary, &mut feedback), SUMMARY_MAX),
        experience: SectionScore::new(score_experience(resume, &mut feedback), EXPERIENCE_MAX),
        education: SectionScore::new(score_education(resume, &mut feedback), EDUCATION_MAX),
        skills: SectionScore::new(score_skills(&resume.skills, &mut feedback), SKILLS_MAX),
        formatting: SectionScore::new(score_formatting(resume, &mut feedback), FORMATTING_MAX),
        keywords: score_keywords(&resume.raw_text),
    };

    let total = sections.total();
    let improvements = feedback.count(|k| matches!(k, FeedbackKind::Error | FeedbackKind::Warning));
    let tips = feedback.count(|k| k == FeedbackKind::Tip);

    debug!(total, improvements, tips, "scored resume");

    ScoreReport {
        overall_score: total.min(100),
        grade: grade_for(total),
        sections,
        feedback: feedback.0,
        improvements,
        tips,
    }
}

fn score_contact(resume: &StructuredResume, feedback: &mut FeedbackLog) -> u32 {
    let mut score = 0;

    if !resume.email.is_empty() {
        score += 3;
    } else {
        feedback.error("Email address is missing");
    }

    if !resume.phone.is_empty() {
        score += 3;
    } else {
        feedback.warning("Phone number is missing");
    }

    if !resume.linkedin.is_empty() {
        score += 2;
    } else {
        feedback.tip("Add LinkedIn profile URL");
    }

    if !resume.location.is_empty() {
        score += 2;
    } else {
        feedback.tip("Add your location/city");
    }

    score.min(CONTACT_MAX)
}

/// Length rules plus a professional-keyword density check.
fn score_summary(summary: &str, feedback: &mut FeedbackLog) -> u32 {
    let len = summary.chars().count();
    if len < 50 {
        feedback.warning("Add a professional summary section.");
        return 0;
    }

    let mut score = 5;
    if (150..=300).contains(&len) {
        score += 5;
    } else if len > 300 {
        score += 3;
        feedback.tip(
            "Professional summary is too long. Keep it between 150-300 characters.",
        );
    } else {
        score += 2;
        feedback.tip("Professional summary could be more detailed.");
    }

    if SummaryKeywordPattern.count(summary) >= 3 {
        score += 5;
    } else {
        score += 2;
        feedback.tip("Add more professional keywords to your summary.");
    }

    score.min(SUMMARY_MAX)
}

/// Per entry: +3 for two or more action verbs, +4 for a quantified result.
/// Action-verb feedback precedes quantification feedback for each entry.
fn score_experience(resume: &StructuredResume, feedback: &mut FeedbackLog) -> u32 {
    if resume.experience.is_empty() {
        feedback.error("Work experience section is empty");
        return 0;
    }

    let mut score = 5;
    for (idx, entry) in resume.experience.iter().enumerate() {
        let position = idx + 1;

        if ActionVerbPattern.count(&entry.description) >= 2 {
            score += 3;
        } else {
            feedback.tip(format!("Use more action verbs in experience #{position}"));
        }

        if QuantifiablePattern.is_match(&entry.description) {
            score += 4;
        } else {
            feedback.warning(format!(
                "Add quantifiable achievements to experience #{position}"
            ));
        }
    }

    score.min(EXPERIENCE_MAX)
}

fn score_education(resume: &StructuredResume, feedback: &mut FeedbackLog) -> u32 {
    if resume.education.is_empty() {
        feedback.warning("Education section is missing");
        return 0;
    }

    let mut score = 5;
    for entry in &resume.education {
        if !entry.degree.is_empty() {
            score += 2;
        }
        if !entry.institution.is_empty() {
            score += 2;
        }
        if !entry.year.is_empty() {
            score += 1;
        }
    }

    score.min(EDUCATION_MAX)
}

fn score_skills(skills: &[String], feedback: &mut FeedbackLog) -> u32 {
    if skills.is_empty() {
        feedback.error("Skills section is missing");
        return 0;
    }

    let mut score = 5;
    let count = skills.len();

    if count >= 5 {
        score += 5;
    } else if count >= 3 {
        score += 3;
    }

    if count >= 10 {
        score += 5;
    } else if count >= 7 {
        score += 3;
    }

    if has_soft_skill(skills) {
        score += 5;
    } else {
        feedback.tip("Include soft skills like communication, leadership, teamwork.");
    }

    score.min(SKILLS_MAX)
}

fn has_soft_skill(skills: &[String]) -> bool {
    skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        SOFT_SKILLS.iter().any(|soft| skill.contains(soft))
    })
}

/// Starts full and loses points for a missing email marker and for length.
fn score_formatting(resume: &StructuredResume, feedback: &mut FeedbackLog) -> u32 {
    let text = &resume.raw_text;
    let mut score = FORMATTING_MAX as i32;

    if !text.contains('@') && resume.email.is_empty() {
        score -= 2;
    }

    let len = text.chars().count();
    if len < 300 {
        score -= 3;
        feedback.warning("Resume content is too short");
    } else if len > 5000 {
        score -= 2;
        feedback.tip("Resume might be too long. Keep it concise.");
    }

    score.max(0) as u32
}

/// 0.8 points per industry keyword present in the raw text, floored.
fn score_keywords(raw_text: &str) -> KeywordSectionScore {
    let haystack = raw_text.to_lowercase();
    let found: Vec<String> = INDUSTRY_KEYWORDS
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    // floor(n * 0.8) without floating point
    let score = ((found.len() as u32 * 4) / 5).min(KEYWORDS_MAX);

    KeywordSectionScore {
        section: SectionScore::new(score, KEYWORDS_MAX),
        found,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

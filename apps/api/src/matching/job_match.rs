//! Job match: how much of a job description's vocabulary a resume covers.
//!
//! Pure and deterministic. Keywords are the distinct lower-case words of the
//! job description longer than three characters.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_KEYWORD_LEN: usize = 4;
pub const MAX_MATCHED_REPORTED: usize = 20;
pub const MAX_MISSING_REPORTED: usize = 10;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"(?-u:\b)[a-z]+(?-u:\b)").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchReport {
    /// 0 – 100
    pub match_score: u32,
    pub matched_keywords: Vec<String>,
    /// Keywords repeated in the job description but absent from the resume.
    pub missing_keywords: Vec<String>,
    pub total_keywords: usize,
}

/// Distinct job keywords in first-seen order.
pub fn extract_job_keywords(job_text_lower: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    WORD.find_iter(job_text_lower)
        .map(|m| m.as_str())
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .filter(|word| seen.insert(*word))
        .map(String::from)
        .collect()
}

pub fn match_job(resume_text: &str, job_description: &str) -> JobMatchReport {
    let resume_text = resume_text.to_lowercase();
    let job_text = job_description.to_lowercase();

    let keywords = extract_job_keywords(&job_text);
    let matched: Vec<&String> = keywords
        .iter()
        .filter(|keyword| resume_text.contains(keyword.as_str()))
        .collect();

    let match_score = if keywords.is_empty() {
        0
    } else {
        ((matched.len() as f64 / keywords.len() as f64) * 100.0).round() as u32
    };

    // "important" = appears at least twice in the job text
    let missing_keywords = keywords
        .iter()
        .filter(|keyword| job_text.matches(keyword.as_str()).count() >= 2)
        .filter(|keyword| !resume_text.contains(keyword.as_str()))
        .take(MAX_MISSING_REPORTED)
        .cloned()
        .collect();

    JobMatchReport {
        match_score: match_score.min(100),
        matched_keywords: matched
            .into_iter()
            .take(MAX_MATCHED_REPORTED)
            .cloned()
            .collect(),
        missing_keywords,
        total_keywords: keywords.len(),
    }
}

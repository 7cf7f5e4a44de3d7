//! Section bodies -> experience / education entries.

use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::patterns::{EDUCATION_BOUNDARY, EXPERIENCE_BOUNDARY};

pub const SUMMARY_MAX_CHARS: usize = 500;
pub const EXPERIENCE_DESCRIPTION_MAX_CHARS: usize = 500;
pub const EDUCATION_DESCRIPTION_MAX_CHARS: usize = 300;
pub const MAX_EXPERIENCE_ENTRIES: usize = 5;
pub const MAX_EDUCATION_ENTRIES: usize = 3;

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Splits an experience body into at most five entries.
///
/// Date-like tokens only decide where entries start; `duration` stays empty
/// and title/company are placeholders.
pub fn experience_entries(body: &str) -> Vec<ExperienceEntry> {
    EXPERIENCE_BOUNDARY
        .split(body)
        .into_iter()
        .take(MAX_EXPERIENCE_ENTRIES)
        .enumerate()
        .map(|(idx, chunk)| {
            let id = idx as u64 + 1;
            ExperienceEntry {
                id,
                title: format!("Position {id}"),
                company: "Company".to_string(),
                duration: String::new(),
                description: truncate_chars(chunk.trim(), EXPERIENCE_DESCRIPTION_MAX_CHARS)
                    .to_string(),
            }
        })
        .collect()
}

/// Splits an education body into at most three entries, using each chunk's
/// first line as the degree.
pub fn education_entries(body: &str) -> Vec<EducationEntry> {
    EDUCATION_BOUNDARY
        .split(body)
        .into_iter()
        .take(MAX_EDUCATION_ENTRIES)
        .enumerate()
        .map(|(idx, chunk)| {
            let id = idx as u64 + 1;
            let first_line = chunk.split('\n').next().unwrap_or_default().trim();
            let degree = if first_line.is_empty() {
                format!("Degree {id}")
            } else {
                first_line.to_string()
            };
            EducationEntry {
                id,
                degree,
                institution: "Institution".to_string(),
                year: String::new(),
                description: truncate_chars(chunk.trim(), EDUCATION_DESCRIPTION_MAX_CHARS)
                    .to_string(),
            }
        })
        .collect()
}

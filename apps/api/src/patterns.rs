//! Named text patterns used by the parser and the scoring rules.
//!
//! Every heuristic is a unit struct implementing [`TextPattern`], so each one
//! can be exercised against literal fixtures on its own.

use lazy_static::lazy_static;
use regex::Regex;

use crate::vocabulary::{
    ACTION_VERBS, DEGREE_MARKERS, EDUCATION_HEADERS, EXPERIENCE_HEADERS, MONTH_ABBREVIATIONS,
    QUANTITY_UNITS, SUMMARY_HEADERS, SUMMARY_KEYWORDS,
};

/// Builds `(?:a|b|c)` from a word table, escaping each entry.
fn alternation(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!("(?:{})", escaped.join("|"))
}

// Built from the vocabulary tables at first use.
lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();

    // Optional +country code, optional (area), then 3-3-4 digits.
    static ref PHONE_REGEX: Regex =
        Regex::new(r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap();

    static ref LINKEDIN_REGEX: Regex =
        Regex::new(r"(?i)linkedin\.com/in/[a-zA-Z0-9-]+").unwrap();

    static ref SUMMARY_KEYWORD_REGEX: Regex =
        Regex::new(&format!("(?i){}", alternation(SUMMARY_KEYWORDS))).unwrap();

    static ref ACTION_VERB_REGEX: Regex =
        Regex::new(&format!("(?i){}", alternation(ACTION_VERBS))).unwrap();

    static ref QUANTIFIABLE_REGEX: Regex = Regex::new(&format!(
        r"(?i)(?:[0-9]+%|[0-9]+\+|\$[0-9]+|[0-9]+ {})",
        alternation(QUANTITY_UNITS)
    ))
    .unwrap();

    pub static ref SUMMARY_SECTION: SectionPattern = SectionPattern::new(
        SUMMARY_HEADERS,
        &["experience", "education", "skills", "projects", "work", "employment", "certifications"],
    );

    pub static ref EXPERIENCE_SECTION: SectionPattern = SectionPattern::new(
        EXPERIENCE_HEADERS,
        &["education", "skills", "projects", "certifications"],
    );

    pub static ref EDUCATION_SECTION: SectionPattern =
        SectionPattern::new(EDUCATION_HEADERS, &["skills", "projects", "certifications"]);

    /// A year, a `Word 2021` token, or a month abbreviation.
    pub static ref EXPERIENCE_BOUNDARY: EntryBoundary = EntryBoundary::new(&format!(
        r"[0-9]{{4}}|[A-Z][a-z]+\s+[0-9]{{4}}|{}",
        alternation(MONTH_ABBREVIATIONS)
    ));

    /// A year or a degree keyword.
    pub static ref EDUCATION_BOUNDARY: EntryBoundary = EntryBoundary::new(&format!(
        r"[0-9]{{4}}|{}",
        alternation(DEGREE_MARKERS)
    ));
}

/// A compiled heuristic with first-match, count and test operations.
pub trait TextPattern {
    fn regex(&self) -> &'static Regex;

    /// First match, scanning left to right.
    fn first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex().find(text).map(|m| m.as_str())
    }

    /// Number of non-overlapping matches.
    fn count(&self, text: &str) -> usize {
        self.regex().find_iter(text).count()
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

pub struct EmailPattern;

impl TextPattern for EmailPattern {
    fn regex(&self) -> &'static Regex {
        &EMAIL_REGEX
    }
}

pub struct PhonePattern;

impl TextPattern for PhonePattern {
    fn regex(&self) -> &'static Regex {
        &PHONE_REGEX
    }
}

/// Matches `linkedin.com/in/<handle>` in any casing.
pub struct LinkedInPattern;

impl TextPattern for LinkedInPattern {
    fn regex(&self) -> &'static Regex {
        &LINKEDIN_REGEX
    }
}

pub struct SummaryKeywordPattern;

impl TextPattern for SummaryKeywordPattern {
    fn regex(&self) -> &'static Regex {
        &SUMMARY_KEYWORD_REGEX
    }
}

pub struct ActionVerbPattern;

impl TextPattern for ActionVerbPattern {
    fn regex(&self) -> &'static Regex {
        &ACTION_VERB_REGEX
    }
}

/// `N%`, `N+`, `$N`, or `N years|months|people|team|projects`.
pub struct QuantifiablePattern;

impl TextPattern for QuantifiablePattern {
    fn regex(&self) -> &'static Regex {
        &QUANTIFIABLE_REGEX
    }
}

/// A titled section: header keyword, separator run, then content up to the
/// next newline-led terminator keyword or the end of the text.
pub struct SectionPattern {
    header: Regex,
    terminator: Regex,
}

impl SectionPattern {
    fn new(headers: &[&str], terminators: &[&str]) -> Self {
        Self {
            header: Regex::new(&format!(r"(?i){}[\s:]+", alternation(headers))).unwrap(),
            terminator: Regex::new(&format!(r"(?i)\n{}", alternation(terminators))).unwrap(),
        }
    }

    /// Untrimmed section body, or `None` when no header occurs.
    ///
    /// Header keywords match anywhere, including inside longer words.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let header = self.header.find(text)?;
        let start = header.end();
        let end = self
            .terminator
            .find_at(text, start)
            .map(|m| m.start())
            .unwrap_or(text.len());
        Some(&text[start..end])
    }
}

/// Splits a section body at newlines followed by an entry-start token.
/// The newline itself is dropped; empty chunks are kept.
pub struct EntryBoundary {
    lookahead: Regex,
}

impl EntryBoundary {
    fn new(alternatives: &str) -> Self {
        Self {
            lookahead: Regex::new(&format!(r"(?i)\A(?:{alternatives})")).unwrap(),
        }
    }

    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut chunks = Vec::new();
        let mut chunk_start = 0;
        for (idx, _) in text.match_indices('\n') {
            if self.lookahead.is_match(&text[idx + 1..]) {
                chunks.push(&text[chunk_start..idx]);
                chunk_start = idx + 1;
            }
        }
        chunks.push(&text[chunk_start..]);
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match_wins() {
        let text = "a@b.io then jane.doe@example.com";
        assert_eq!(EmailPattern.first(text), Some("a@b.io"));
    }

    #[test]
    fn test_email_requires_two_letter_tld() {
        assert_eq!(EmailPattern.first("me@host.c"), None);
        assert_eq!(EmailPattern.first("reach me: me@host.co"), Some("me@host.co"));
    }

    #[test]
    fn test_phone_plain_dashes() {
        assert_eq!(PhonePattern.first("call 555-123-4567 now"), Some("555-123-4567"));
    }

    #[test]
    fn test_phone_country_code_and_parens() {
        assert_eq!(
            PhonePattern.first("Phone: +1 (555) 123-4567"),
            Some("+1 (555) 123-4567")
        );
        assert_eq!(PhonePattern.first("555.123.4567"), Some("555.123.4567"));
    }

    #[test]
    fn test_phone_rejects_short_groups() {
        assert_eq!(PhonePattern.first("55-12-345"), None);
    }

    #[test]
    fn test_linkedin_case_insensitive() {
        assert_eq!(
            LinkedInPattern.first("See LinkedIn.com/in/Jane-Doe99 for more"),
            Some("LinkedIn.com/in/Jane-Doe99")
        );
    }

    #[test]
    fn test_summary_keyword_count() {
        let summary = "Professional with 5 years of experience; skilled and LED teams";
        // "skilled" consumes its own "led" suffix
        assert_eq!(SummaryKeywordPattern.count(summary), 5);
    }

    #[test]
    fn test_action_verbs_counted_globally() {
        let text = "Developed APIs, developed tooling and Led migrations";
        assert_eq!(ActionVerbPattern.count(text), 3);
        assert_eq!(ActionVerbPattern.count("wrote some code"), 0);
    }

    #[test]
    fn test_quantifiable_forms() {
        assert!(QuantifiablePattern.is_match("increased sales by 20%"));
        assert!(QuantifiablePattern.is_match("served 100+ clients"));
        assert!(QuantifiablePattern.is_match("saved $5000"));
        assert!(QuantifiablePattern.is_match("managed 12 people"));
        assert!(QuantifiablePattern.is_match("over 3 Years"));
        assert!(!QuantifiablePattern.is_match("managed a large team"));
        assert!(!QuantifiablePattern.is_match("3 weeks"));
    }

    #[test]
    fn test_section_capture_until_terminator() {
        let text = "Jane\nSummary: Builder of things.\nExperience\n2020 Acme";
        assert_eq!(SUMMARY_SECTION.capture(text), Some("Builder of things."));
    }

    #[test]
    fn test_section_capture_runs_to_end() {
        let text = "Education\nBachelor of Science";
        assert_eq!(EDUCATION_SECTION.capture(text), Some("Bachelor of Science"));
    }

    #[test]
    fn test_section_capture_missing_header() {
        assert_eq!(EXPERIENCE_SECTION.capture("no headers here"), None);
    }

    #[test]
    fn test_section_header_matches_inside_words() {
        // "network" ends with "work"
        let text = "network: events\nEducation";
        assert_eq!(EXPERIENCE_SECTION.capture(text), Some("events"));
    }

    #[test]
    fn test_experience_boundary_split() {
        let text = "2021 Acme\nbuilt things\nJan 2019 Initech\nMarch 2017 Globex";
        let chunks = EXPERIENCE_BOUNDARY.split(text);
        assert_eq!(
            chunks,
            vec!["2021 Acme\nbuilt things", "Jan 2019 Initech", "March 2017 Globex"]
        );
    }

    #[test]
    fn test_boundary_keeps_empty_leading_chunk() {
        assert_eq!(EXPERIENCE_BOUNDARY.split("\n2020 Acme"), vec!["", "2020 Acme"]);
    }

    #[test]
    fn test_education_boundary_split() {
        let text = "Bachelor of Arts\nState University\nMaster of Science\nTech";
        let chunks = EDUCATION_BOUNDARY.split(text);
        assert_eq!(
            chunks,
            vec!["Bachelor of Arts\nState University", "Master of Science\nTech"]
        );
    }
}

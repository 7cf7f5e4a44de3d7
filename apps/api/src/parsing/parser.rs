use tracing::debug;

use crate::models::resume::StructuredResume;
use crate::parsing::sections::{
    education_entries, experience_entries, truncate_chars, SUMMARY_MAX_CHARS,
};
use crate::patterns::{
    EmailPattern, LinkedInPattern, PhonePattern, TextPattern, EDUCATION_SECTION,
    EXPERIENCE_SECTION, SUMMARY_SECTION,
};
use crate::vocabulary::SKILL_VOCABULARY;

/// Converts raw extracted text into a structured resume.
///
/// Total and deterministic: never fails, and every extracted value is a
/// literal slice of `text` (apart from the `https://` LinkedIn prefix and the
/// entry placeholders).
pub fn parse_resume_text(text: &str) -> StructuredResume {
    let lines = non_empty_lines(text);

    let mut resume = StructuredResume {
        raw_text: text.to_string(),
        name: guess_name(&lines).unwrap_or_default().to_string(),
        email: EmailPattern.first(text).unwrap_or_default().to_string(),
        phone: PhonePattern.first(text).unwrap_or_default().to_string(),
        linkedin: LinkedInPattern
            .first(text)
            .map(|handle| format!("https://{handle}"))
            .unwrap_or_default(),
        skills: find_skills(text),
        ..StructuredResume::default()
    };

    if let Some(body) = SUMMARY_SECTION.capture(text) {
        resume.summary = truncate_chars(body.trim(), SUMMARY_MAX_CHARS).to_string();
    }
    if let Some(body) = EXPERIENCE_SECTION.capture(text) {
        resume.experience = experience_entries(body);
    }
    if let Some(body) = EDUCATION_SECTION.capture(text) {
        resume.education = education_entries(body);
    }

    debug!(
        lines = lines.len(),
        skills = resume.skills.len(),
        experience = resume.experience.len(),
        education = resume.education.len(),
        "parsed resume text"
    );

    resume
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// First line, unless it looks like contact details.
fn guess_name<'t>(lines: &[&'t str]) -> Option<&'t str> {
    lines
        .first()
        .copied()
        .filter(|line| !line.contains('@') && !line.contains("http"))
}

/// Vocabulary terms occurring anywhere in `text`, ignoring case, in
/// vocabulary order and canonical casing.
fn find_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut skills: Vec<String> = Vec::new();
    for &skill in SKILL_VOCABULARY {
        if haystack.contains(&skill.to_lowercase()) && !skills.iter().any(|s| s == skill) {
            skills.push(skill.to_string());
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe
jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe
Summary: Software engineer with 8 years building data platforms.
Experience
2020 - Present Senior Engineer, Acme
Developed streaming pipelines in Python and SQL
Jan 2017 Engineer, Initech
Managed Docker deployments
Education
Bachelor of Science in Computer Science
State University 2016
Skills
Python, SQL, Docker, Leadership";

    #[test]
    fn test_contact_fields_literal_slices() {
        let text =
            "Contact me at jane.doe@example.com or 555-123-4567, linkedin.com/in/janedoe";
        let resume = parse_resume_text(text);
        assert_eq!(resume.email, "jane.doe@example.com");
        assert_eq!(resume.phone, "555-123-4567");
        assert_eq!(resume.linkedin, "https://linkedin.com/in/janedoe");
    }

    #[test]
    fn test_empty_input_is_all_defaults() {
        let resume = parse_resume_text("");
        assert_eq!(resume, StructuredResume::default());
    }

    #[test]
    fn test_name_is_first_non_empty_line() {
        let resume = parse_resume_text("\n\n   Jane Doe  \nEngineer");
        assert_eq!(resume.name, "Jane Doe");
    }

    #[test]
    fn test_name_skipped_when_first_line_is_contact() {
        assert!(parse_resume_text("jane@example.com\nJane Doe").name.is_empty());
        assert!(parse_resume_text("https://janedoe.dev\nJane Doe").name.is_empty());
    }

    #[test]
    fn test_skills_deduplicated_with_canonical_casing() {
        let resume = parse_resume_text("I love Python. python is great. PYTHON!");
        assert_eq!(
            resume.skills.iter().filter(|s| s.as_str() == "Python").count(),
            1
        );
        assert!(!resume.skills.iter().any(|s| s == "python"));
    }

    #[test]
    fn test_skills_substring_semantics() {
        // "javascript" also contains "java"
        let resume = parse_resume_text("Expert in JavaScript");
        assert!(resume.skills.contains(&"JavaScript".to_string()));
        assert!(resume.skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_raw_text_retained_verbatim() {
        let resume = parse_resume_text(SAMPLE);
        assert_eq!(resume.raw_text, SAMPLE);
    }

    #[test]
    fn test_full_sample() {
        let resume = parse_resume_text(SAMPLE);
        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.email, "jane.doe@example.com");
        assert_eq!(resume.phone, "(555) 123-4567");
        assert_eq!(resume.linkedin, "https://linkedin.com/in/janedoe");
        assert_eq!(
            resume.summary,
            "Software engineer with 8 years building data platforms."
        );

        assert_eq!(resume.experience.len(), 2);
        assert!(resume.experience[0]
            .description
            .starts_with("2020 - Present Senior Engineer"));
        assert!(resume.experience[1].description.starts_with("Jan 2017"));

        assert_eq!(resume.education.len(), 1);
        assert_eq!(
            resume.education[0].degree,
            "Bachelor of Science in Computer Science"
        );

        for skill in ["Python", "SQL", "Docker", "Leadership"] {
            assert!(resume.skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert!(resume.projects.is_empty());
        assert!(resume.certifications.is_empty());
    }

    #[test]
    fn test_section_header_is_first_occurrence_anywhere() {
        // "experience" inside the summary opens the experience section early
        let text = "Summary: lots of experience here\nExperience\n2020 Acme";
        let resume = parse_resume_text(text);
        assert_eq!(resume.experience[0].description, "here");
        assert_eq!(resume.experience[1].description, "Experience");
        assert_eq!(resume.experience[2].description, "2020 Acme");
    }

    #[test]
    fn test_summary_truncated_to_500_chars() {
        let text = format!("Profile: {}", "a".repeat(900));
        assert_eq!(parse_resume_text(&text).summary.chars().count(), 500);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_resume_text(SAMPLE), parse_resume_text(SAMPLE));
    }
}

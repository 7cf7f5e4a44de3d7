use serde::{Deserialize, Serialize};

/// Severity of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Error,
    Warning,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub score: u32,
    pub max: u32,
    pub percentage: f64,
}

impl SectionScore {
    pub fn new(score: u32, max: u32) -> Self {
        Self {
            score,
            max,
            percentage: f64::from(score) / f64::from(max) * 100.0,
        }
    }
}

/// The keywords section additionally reports which industry terms were found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSectionScore {
    #[serde(flatten)]
    pub section: SectionScore,
    pub found: Vec<String>,
}

/// One field per scored section, serialized in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact: SectionScore,
    pub summary: SectionScore,
    pub experience: SectionScore,
    pub education: SectionScore,
    pub skills: SectionScore,
    pub formatting: SectionScore,
    pub keywords: KeywordSectionScore,
}

impl SectionScores {
    /// Sum of all section scores before the overall cap.
    pub fn total(&self) -> u32 {
        self.contact.score
            + self.summary.score
            + self.experience.score
            + self.education.score
            + self.skills.score
            + self.formatting.score
            + self.keywords.section.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub letter: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// 0 – 100
    pub overall_score: u32,
    pub grade: Grade,
    pub sections: SectionScores,
    pub feedback: Vec<FeedbackItem>,
    /// Number of `error` and `warning` items.
    pub improvements: usize,
    /// Number of `tip` items.
    pub tips: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(SectionScore::new(0, 10).percentage, 0.0);
        assert_eq!(SectionScore::new(15, 15).percentage, 100.0);
        assert!((SectionScore::new(12, 25).percentage - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_serializes_type_tag() {
        let item = FeedbackItem {
            kind: FeedbackKind::Warning,
            message: "Phone number is missing".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["message"], "Phone number is missing");
    }

    #[test]
    fn test_keyword_section_flattens() {
        let section = KeywordSectionScore {
            section: SectionScore::new(4, 10),
            found: vec!["data".to_string()],
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["score"], 4);
        assert_eq!(json["max"], 10);
        assert_eq!(json["found"][0], "data");
    }
}

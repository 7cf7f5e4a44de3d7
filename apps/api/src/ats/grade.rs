use crate::ats::report::Grade;

/// (minimum score, letter, label, color), highest band first.
pub const GRADE_BANDS: &[(u32, &str, &str, &str)] = &[
    (90, "A+", "Excellent", "#10b981"),
    (80, "A", "Very Good", "#22c55e"),
    (70, "B", "Good", "#84cc16"),
    (60, "C", "Fair", "#eab308"),
    (50, "D", "Needs Work", "#f97316"),
];

const FAILING_GRADE: (&str, &str, &str) = ("F", "Poor", "#ef4444");

/// Maps a summed score onto the letter-grade table.
///
/// Callers pass the sum before it is saturated at 100.
pub fn grade_for(score: u32) -> Grade {
    let (letter, label, color) = GRADE_BANDS
        .iter()
        .find(|(min, ..)| score >= *min)
        .map(|&(_, letter, label, color)| (letter, label, color))
        .unwrap_or(FAILING_GRADE);

    Grade {
        letter: letter.to_string(),
        label: label.to_string(),
        color: color.to_string(),
    }
}

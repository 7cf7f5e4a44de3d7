// ATS scoring engine.
// Consumes a StructuredResume (parser output or editor-submitted) and
// produces section scores, a letter grade, and categorized feedback.

pub mod grade;
pub mod handlers;
pub mod report;
pub mod scorer;

pub use scorer::{ResumeScorer, RuleBasedScorer};

// Resume text parser: raw extracted text -> StructuredResume.
// Best-effort and total: a missing pattern leaves its field at the default.

pub mod parser;
pub mod sections;

pub use parser::parse_resume_text;

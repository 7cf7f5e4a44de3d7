// Job-description keyword matching against a resume's raw text.

pub mod handlers;
pub mod job_match;

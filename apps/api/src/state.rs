use std::sync::Arc;

use crate::ats::{ResumeScorer, RuleBasedScorer};
use crate::config::Config;
use crate::extraction::{DocumentTextExtractor, TextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable values; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: RuleBasedScorer.
    pub scorer: Arc<dyn ResumeScorer>,
    /// Document-to-text adapter. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            scorer: Arc::new(RuleBasedScorer),
            extractor: Arc::new(DocumentTextExtractor),
        }
    }
}

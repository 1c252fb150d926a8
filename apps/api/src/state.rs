use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::matching::vocabulary::SkillVocabulary;
use crate::recognition::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup, read-only afterwards.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable entity recognizer. LLM-backed when an API key is configured.
    pub recognizer: Arc<dyn EntityRecognizer>,
    pub extractor: Arc<dyn TextExtractor>,
}

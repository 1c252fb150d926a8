//! Analysis pipeline: entity recognition on the job description, then the
//! matching engine. Either the whole response is produced or an error is
//! returned; there are no partial results.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::skill_gap::clamp_top_n;
use crate::matching::{analyze, MatchResult};
use crate::recognition::technology_terms;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: MatchResult,
    /// Recognizer terms that joined the curated vocabulary, sorted.
    pub discovered_terms: Vec<String>,
    pub recognizer_backend: String,
}

/// Runs one analysis over already-extracted texts.
///
/// `top_n` of `None` uses the configured default; non-positive values clamp
/// to the built-in default.
pub async fn run_analysis(
    state: &AppState,
    resume_text: &str,
    jobdesc_text: &str,
    top_n: Option<i64>,
) -> Result<AnalyzeResponse, AppError> {
    let analysis_id = Uuid::new_v4();
    let top_n = top_n.map(clamp_top_n).unwrap_or(state.config.default_top_n);

    let entities = state.recognizer.recognize(jobdesc_text).await?;
    let discovered = technology_terms(&entities);

    let result = analyze(
        resume_text,
        jobdesc_text,
        &discovered,
        &state.vocabulary,
        top_n,
    );

    info!(
        %analysis_id,
        score = result.score,
        tier = ?result.tier,
        missing = result.missing_skills.len(),
        discovered = discovered.len(),
        "Analysis complete"
    );

    let mut discovered_terms: Vec<String> = discovered.into_iter().collect();
    discovered_terms.sort();

    Ok(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        result,
        discovered_terms,
        recognizer_backend: state.recognizer.backend().to_string(),
    })
}

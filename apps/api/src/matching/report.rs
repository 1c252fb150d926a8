use serde::{Deserialize, Serialize};

/// Qualitative match band derived from the similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

const HIGH_THRESHOLD: f64 = 75.0;
const MEDIUM_THRESHOLD: f64 = 50.0;

const HIGH_MESSAGE: &str =
    "Excellent match! Your resume aligns strongly with the job description.";
const MEDIUM_MESSAGE: &str =
    "Moderate match. You can improve your resume to better fit the job.";
const LOW_MESSAGE: &str = "Low match. Try tailoring your resume with relevant skills.";

/// Maps a score onto a tier and its message. Lower bounds are inclusive.
/// Total over every `f64`: out-of-range values band normally, NaN is Low.
pub fn classify(score: f64) -> (MatchTier, &'static str) {
    if score >= HIGH_THRESHOLD {
        (MatchTier::High, HIGH_MESSAGE)
    } else if score >= MEDIUM_THRESHOLD {
        (MatchTier::Medium, MEDIUM_MESSAGE)
    } else {
        (MatchTier::Low, LOW_MESSAGE)
    }
}

//! Matching engine — similarity score, qualitative tier and skill gaps for one
//! resume / job description pair.
//!
//! Everything here is synchronous and pure. Text extraction and entity
//! recognition happen upstream; `analyze` only sees their output.

pub mod normalize;
pub mod report;
pub mod similarity;
pub mod skill_gap;
pub mod vocabulary;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::normalize::Document;
use crate::matching::report::{classify, MatchTier};
use crate::matching::skill_gap::missing_skills;
use crate::matching::vocabulary::SkillVocabulary;

/// Complete outcome of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Similarity percentage in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    pub tier: MatchTier,
    pub message: String,
    pub missing_skills: Vec<String>,
}

/// Scores a resume against a job description and lists missing skills.
///
/// `discovered_terms` is the recognizer's output for `jobdesc_text`, already
/// restricted to technology-like categories. A `top_n` of zero means the
/// default cap.
pub fn analyze(
    resume_text: &str,
    jobdesc_text: &str,
    discovered_terms: &HashSet<String>,
    vocabulary: &SkillVocabulary,
    top_n: usize,
) -> MatchResult {
    let resume = Document::new(resume_text);
    let jobdesc = Document::new(jobdesc_text);

    let score = similarity::score(&resume.normalized, &jobdesc.normalized);
    let missing_skills = missing_skills(&resume.raw, discovered_terms, vocabulary, top_n);
    let (tier, message) = classify(score);

    MatchResult {
        score,
        tier,
        message: message.to_string(),
        missing_skills,
    }
}

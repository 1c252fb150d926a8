//! Skill-Gap Extractor — which candidate skills never appear in the resume.
//!
//! Candidates are the curated vocabulary plus whatever the entity recognizer
//! discovered in the job description. Presence is a plain substring test on
//! the normalized resume, so `java` is found inside `javascript`, and terms
//! that keep punctuation (`c++`, `node.js`) are never found.
//!
//! Ordering before truncation: discovered terms first, sorted
//! lexicographically, then vocabulary terms in curated order. Duplicates keep
//! their first position. There is no relevance ranking.

use std::collections::HashSet;

use crate::matching::normalize::normalize;
use crate::matching::vocabulary::SkillVocabulary;

pub const DEFAULT_TOP_N: usize = 10;

/// Maps a requested cap onto a usable one. Non-positive values fall back to
/// [`DEFAULT_TOP_N`] instead of failing.
pub fn clamp_top_n(requested: i64) -> usize {
    if requested <= 0 {
        DEFAULT_TOP_N
    } else {
        usize::try_from(requested).unwrap_or(usize::MAX)
    }
}

/// Union of lowercased discovered terms and the vocabulary, deduplicated by
/// exact lowercase value, in the order described in the module docs.
pub fn candidate_skills(
    discovered_terms: &HashSet<String>,
    vocabulary: &SkillVocabulary,
) -> Vec<String> {
    let mut discovered: Vec<String> = discovered_terms
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    discovered.sort();

    let mut seen = HashSet::new();
    discovered
        .into_iter()
        .chain(vocabulary.terms().iter().map(|t| t.to_string()))
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Returns up to `top_n` candidate skills absent from the normalized resume.
///
/// A `top_n` of zero is treated as [`DEFAULT_TOP_N`].
pub fn missing_skills(
    resume_text: &str,
    discovered_terms: &HashSet<String>,
    vocabulary: &SkillVocabulary,
    top_n: usize,
) -> Vec<String> {
    let top_n = if top_n == 0 { DEFAULT_TOP_N } else { top_n };
    let resume = normalize(resume_text);

    candidate_skills(discovered_terms, vocabulary)
        .into_iter()
        .filter(|skill| !resume.contains(skill.as_str()))
        .take(top_n)
        .collect()
}

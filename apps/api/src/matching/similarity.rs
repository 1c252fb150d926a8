//! Similarity Scorer — TF-IDF cosine similarity between two documents.
//!
//! The corpus is exactly the two documents being compared, so the vocabulary
//! and IDF weights are rebuilt on every call. Nothing is cached.
//!
//! Weighting:
//! - tf  = raw count of the term in the document
//! - idf = ln((1 + n) / (1 + df)) + 1   (smoothed, n = 2)
//! - each document vector is L2-normalized before the dot product

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

/// Tokens are runs of two or more word characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Returns the similarity of two texts as a percentage in `[0, 100]`,
/// rounded to two decimals.
///
/// An empty document (or one with no extractable tokens) has a zero vector,
/// and any comparison against a zero vector scores `0.0`.
pub fn score(text_a: &str, text_b: &str) -> f64 {
    let counts_a = term_counts(text_a);
    let counts_b = term_counts(text_b);

    // Sorted vocabulary keeps the dot product summation order independent
    // of argument order, so score(a, b) == score(b, a) bit for bit.
    let vocabulary: BTreeSet<&str> = counts_a
        .keys()
        .chain(counts_b.keys())
        .map(String::as_str)
        .collect();

    let idf: BTreeMap<&str, f64> = vocabulary
        .iter()
        .map(|term| {
            let df = [&counts_a, &counts_b]
                .iter()
                .filter(|counts| counts.contains_key(*term))
                .count();
            (*term, smoothed_idf(2, df))
        })
        .collect();

    let vec_a = weighted_vector(&counts_a, &idf);
    let vec_b = weighted_vector(&counts_b, &idf);

    let cosine = cosine_similarity(&vec_a, &vec_b);
    round_percent(cosine)
}

/// Lowercased token counts for one document.
fn term_counts(text: &str) -> HashMap<String, u32> {
    let lowered = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN_PATTERN.find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

fn smoothed_idf(n_docs: usize, doc_freq: usize) -> f64 {
    ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Dense TF-IDF vector over the shared vocabulary, L2-normalized.
/// A document without tokens stays all-zero.
fn weighted_vector(counts: &HashMap<String, u32>, idf: &BTreeMap<&str, f64>) -> Vec<f64> {
    let mut vector: Vec<f64> = idf
        .iter()
        .map(|(term, weight)| counts.get(*term).copied().unwrap_or(0) as f64 * weight)
        .collect();

    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
    vector
}

/// Cosine of the angle between two vectors of equal length; 0.0 when either
/// vector has zero magnitude.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn round_percent(cosine: f64) -> f64 {
    let percent = ((cosine * 100.0) * 100.0).round() / 100.0;
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalize;

    const RESUME: &str = "I have 5 years of Python and Java experience";
    const JOB: &str = "Looking for a Python, AWS, and Docker engineer";

    #[test]
    fn test_identical_texts_score_100() {
        assert_eq!(score(JOB, JOB), 100.0);
        assert_eq!(score(RESUME, RESUME), 100.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(score("", "anything at all"), 0.0);
        assert_eq!(score("anything at all", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
    }

    #[test]
    fn test_text_without_tokens_scores_zero() {
        // Single characters are not tokens.
        assert_eq!(score("a b c ! ?", "a b c"), 0.0);
    }

    #[test]
    fn test_disjoint_vocabulary_scores_zero() {
        assert_eq!(score("rust tokio axum", "python django flask"), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let s = score(RESUME, JOB);
        assert!(s.is_finite());
        assert!(s > 0.0 && s < 100.0, "score was {s}");
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (RESUME, JOB),
            ("kubernetes kubernetes helm", "helm charts on kubernetes"),
            ("", "python"),
            ("data analysis with sql", "SQL, SQL and more SQL"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_self_similarity_is_maximal() {
        let disjoint = "gardening pottery watercolor";
        assert!(score(RESUME, RESUME) >= score(RESUME, disjoint));
        assert!(score(RESUME, RESUME) >= score(RESUME, JOB));
    }

    #[test]
    fn test_case_insensitive_tokenization() {
        assert_eq!(score("PYTHON Docker", "python docker"), 100.0);
    }

    #[test]
    fn test_normalized_input_is_valid() {
        let raw = score(RESUME, JOB);
        let normalized = score(&normalize(RESUME), &normalize(JOB));
        assert!((0.0..=100.0).contains(&normalized));
        // Same token stream here, so the scores agree.
        assert_eq!(raw, normalized);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let s = score(RESUME, JOB);
        assert!(((s * 100.0).round() - s * 100.0).abs() < 1e-6, "score was {s}");
    }

    #[test]
    fn test_smoothed_idf_values() {
        // Term present in both documents carries the minimum weight of 1.0.
        assert!((smoothed_idf(2, 2) - 1.0).abs() < f64::EPSILON);
        assert!((smoothed_idf(2, 1) - (1.5_f64.ln() + 1.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cosine_of_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}

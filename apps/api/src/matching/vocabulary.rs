//! Curated skill vocabulary. Built once at startup and shared read-only.

/// Built-in skill terms, lowercase. Order is the curated order.
const BUILTIN_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "c#",
    "javascript",
    "react",
    "angular",
    "node.js",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "html",
    "css",
    "flask",
    "django",
    "tensorflow",
    "pytorch",
    "excel",
    "tableau",
    "powerbi",
    "linux",
    "bash",
    "rest api",
    "graphql",
    "machine learning",
    "ai",
    "data analysis",
    "software testing",
    "selenium",
];

/// An ordered, immutable set of known technical terms.
///
/// There is deliberately no mutation API. `main` builds one instance and
/// hands it to the request handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<&'static str>,
}

impl SkillVocabulary {
    pub fn builtin() -> Self {
        Self {
            terms: BUILTIN_SKILLS.to_vec(),
        }
    }

    /// Terms in curated order.
    pub fn terms(&self) -> &[&'static str] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_35_terms() {
        assert_eq!(SkillVocabulary::builtin().len(), 35);
    }

    #[test]
    fn test_terms_are_lowercase_and_unique() {
        let vocab = SkillVocabulary::builtin();
        for (i, term) in vocab.terms().iter().enumerate() {
            assert_eq!(*term, term.to_lowercase());
            assert!(!vocab.terms()[i + 1..].contains(term), "duplicate {term}");
        }
    }

    #[test]
    fn test_builtin_matches_curated_table() {
        assert_eq!(SkillVocabulary::builtin().terms(), BUILTIN_SKILLS);
    }

    #[test]
    fn test_curated_order_preserved() {
        let vocab = SkillVocabulary::builtin();
        assert_eq!(vocab.terms()[0], "python");
        assert_eq!(vocab.terms()[vocab.len() - 1], "selenium");
    }

    #[test]
    fn test_includes_multi_word_and_punctuated_terms() {
        let vocab = SkillVocabulary::builtin();
        for term in ["rest api", "machine learning", "c++", "node.js"] {
            assert!(vocab.terms().contains(&term), "missing {term}");
        }
    }
}

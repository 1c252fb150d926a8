//! Text normalization shared by the scorer and the skill-gap extractor.

/// A resume or job description in raw and comparable form.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub raw: String,
    pub normalized: String,
}

impl Document {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: normalize(raw),
        }
    }
}

/// Canonicalizes text for lexical comparison.
///
/// Lowercases, replaces anything outside `[a-z0-9]` and whitespace with a space,
/// then collapses whitespace runs and trims. Output is plain ASCII, so
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Entity recognition — discovers candidate skill terms in a job description.
//!
//! Pluggable, trait-based, like the other collaborators:
//! - `LlmEntityRecognizer`: NER through the LLM client.
//! - `DisabledRecognizer`: discovers nothing; only the curated vocabulary applies.
//!
//! `AppState` holds an `Arc<dyn EntityRecognizer>`, chosen at startup from config.
//! The recognizer returns every labeled span; `technology_terms` applies the
//! category filter before the terms reach the matching engine.

pub mod prompts;

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{parse_json_reply, LlmClient, LlmError};
use crate::recognition::prompts::{ENTITY_PROMPT_TEMPLATE, ENTITY_SYSTEM};

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("entity recognizer call failed: {0}")]
    Backend(#[from] LlmError),
}

/// OntoNotes-style entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
    #[serde(other)]
    Other,
}

impl EntityLabel {
    /// Categories whose spans tend to name technologies, vendors or products.
    pub fn is_technology_like(self) -> bool {
        matches!(self, Self::Org | Self::Product | Self::WorkOfArt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    pub text: String,
    pub label: EntityLabel,
}

#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError>;

    /// Short backend name, reported in responses for transparency.
    fn backend(&self) -> &'static str;
}

/// Keeps entities in technology-like categories, lowercased and deduplicated.
pub fn technology_terms(entities: &[RecognizedEntity]) -> HashSet<String> {
    entities
        .iter()
        .filter(|e| e.label.is_technology_like())
        .map(|e| e.text.to_lowercase())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEntityRecognizer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEntityRecognizer(pub LlmClient);

#[async_trait]
impl EntityRecognizer for LlmEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
        if text.trim().is_empty() {
            return Ok(vec![]);
        }

        let (prompt, system) = build_entity_prompt(text);
        let reply = self.0.complete(&prompt, &system).await?;
        let entities = parse_entities(&reply)?;

        debug!(
            "Recognized {} entities with model {}",
            entities.len(),
            self.0.model()
        );
        Ok(entities)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// User prompt and system prompt for one recognition call.
fn build_entity_prompt(text: &str) -> (String, String) {
    (
        ENTITY_PROMPT_TEMPLATE.replace("{text}", text),
        format!("{ENTITY_SYSTEM} {JSON_ONLY_SYSTEM}"),
    )
}

fn parse_entities(reply: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
    Ok(parse_json_reply(reply)?)
}

// ────────────────────────────────────────────────────────────────────────────
// DisabledRecognizer
// ────────────────────────────────────────────────────────────────────────────

pub struct DisabledRecognizer;

#[async_trait]
impl EntityRecognizer for DisabledRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<RecognizedEntity>, RecognitionError> {
        Ok(vec![])
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(text: &str, label: EntityLabel) -> RecognizedEntity {
        RecognizedEntity {
            text: text.to_string(),
            label,
        }
    }

    #[test]
    fn test_technology_terms_keeps_org_product_work_of_art() {
        let entities = vec![
            entity("AWS", EntityLabel::Org),
            entity("Docker", EntityLabel::Product),
            entity("The Phoenix Project", EntityLabel::WorkOfArt),
            entity("Berlin", EntityLabel::Gpe),
            entity("five years", EntityLabel::Date),
            entity("Jane Doe", EntityLabel::Person),
        ];
        let terms = technology_terms(&entities);

        assert_eq!(terms.len(), 3);
        assert!(terms.contains("aws"));
        assert!(terms.contains("docker"));
        assert!(terms.contains("the phoenix project"));
        assert!(!terms.contains("berlin"));
    }

    #[test]
    fn test_technology_terms_dedupes_by_lowercase() {
        let entities = vec![
            entity("Kafka", EntityLabel::Product),
            entity("KAFKA", EntityLabel::Product),
        ];
        assert_eq!(technology_terms(&entities).len(), 1);
    }

    #[test]
    fn test_label_deserializes_onto_notes_names() {
        let parsed: Vec<RecognizedEntity> = serde_json::from_str(
            r#"[
                {"text": "Snowflake", "label": "ORG"},
                {"text": "Terraform", "label": "PRODUCT"},
                {"text": "Clean Code", "label": "WORK_OF_ART"},
                {"text": "Q3", "label": "SOMETHING_NEW"}
            ]"#,
        )
        .unwrap();

        assert_eq!(parsed[0].label, EntityLabel::Org);
        assert_eq!(parsed[1].label, EntityLabel::Product);
        assert_eq!(parsed[2].label, EntityLabel::WorkOfArt);
        assert_eq!(parsed[3].label, EntityLabel::Other);
    }

    #[test]
    fn test_prompt_embeds_job_description() {
        let jd = "Senior engineer, AWS and Docker, based in Seattle";
        let (prompt, system) = build_entity_prompt(jd);

        assert!(prompt.contains(jd));
        assert!(!prompt.contains("{text}"));
        assert!(prompt.contains("distinct"));
        assert!(system.starts_with(ENTITY_SYSTEM));
        assert!(system.ends_with(JSON_ONLY_SYSTEM));
    }

    #[test]
    fn test_parse_fenced_reply_with_unknown_label() {
        let reply = "```json\n[\n  {\"text\": \"Kubernetes\", \"label\": \"PRODUCT\"},\n  {\"text\": \"Q4\", \"label\": \"FISCAL_PERIOD\"}\n]\n```";
        let entities = parse_entities(reply).unwrap();

        assert_eq!(
            entities,
            vec![
                entity("Kubernetes", EntityLabel::Product),
                entity("Q4", EntityLabel::Other),
            ]
        );
        assert_eq!(
            technology_terms(&entities),
            HashSet::from(["kubernetes".to_string()])
        );
    }

    #[test]
    fn test_parse_empty_reply_array() {
        assert!(parse_entities("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_reply_is_recognition_error() {
        let err = parse_entities(r#"[{"text": "AWS", "label": "ORG"}, {"text": "Doc"#).unwrap_err();
        assert!(matches!(err, RecognitionError::Backend(LlmError::Parse(_))));
    }

    #[test]
    fn test_parse_reply_missing_label_is_recognition_error() {
        let err = parse_entities(r#"[{"text": "AWS"}]"#).unwrap_err();
        assert!(matches!(err, RecognitionError::Backend(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_llm_recognizer_skips_blank_text() {
        let client = LlmClient::new("test-key".into(), "test-model".into()).unwrap();
        let entities = LlmEntityRecognizer(client).recognize(" \n\t ").await.unwrap();
        assert!(entities.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_recognizer_finds_nothing() {
        let entities = DisabledRecognizer
            .recognize("Looking for AWS and Docker")
            .await
            .unwrap();
        assert!(entities.is_empty());
        assert_eq!(DisabledRecognizer.backend(), "disabled");
    }
}

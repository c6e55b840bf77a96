use std::fmt;

use async_trait::async_trait;
use ns_core::{EntityExtractor, EntityLabel, Error, NamedEntity, Result, Summarizer};
use regex::Regex;

/// Offline summarizer: the headline is its own summary.
pub struct DummySummarizer;

impl fmt::Debug for DummySummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummySummarizer").finish()
    }
}

impl DummySummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummySummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for DummySummarizer {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, headline: &str) -> Result<String> {
        Ok(headline.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

// Capitalised words that start sentences or headlines without naming anything.
const COMMON_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "it", "its", "in", "on", "at", "of",
    "for", "to", "as", "by", "with", "from", "after", "before", "how", "why", "what", "when",
    "where", "who", "will", "is", "are", "was", "were", "new", "i", "we", "he", "she", "they",
];

/// Offline entity extractor. Currency amounts are money; runs of capitalised
/// words are treated as organisations.
pub struct RuleBasedExtractor {
    money: Regex,
    proper: Regex,
}

impl fmt::Debug for RuleBasedExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBasedExtractor").finish()
    }
}

impl RuleBasedExtractor {
    pub fn new() -> Result<Self> {
        let money = Regex::new(
            r"(?i)[$€£₹¥]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:trillion|billion|million|thousand|bn|mn|tn|[kmb])\b)?",
        )
        .map_err(|e| Error::Inference(format!("Invalid money pattern: {}", e)))?;
        let proper = Regex::new(r"\b[A-Z][\w&'.-]*(?:\s+[A-Z][\w&'.-]*)*")
            .map_err(|e| Error::Inference(format!("Invalid name pattern: {}", e)))?;
        Ok(Self { money, proper })
    }
}

#[async_trait]
impl EntityExtractor for RuleBasedExtractor {
    fn name(&self) -> &str {
        "RuleBased"
    }

    async fn extract_entities(&self, text: &str) -> Result<Vec<NamedEntity>> {
        let mut entities: Vec<NamedEntity> = self
            .money
            .find_iter(text)
            .map(|m| NamedEntity::new(m.as_str().trim(), EntityLabel::Money))
            .collect();

        for m in self.proper.find_iter(text) {
            let words: Vec<&str> = m
                .as_str()
                .split_whitespace()
                .map(|w| w.trim_end_matches(|c: char| matches!(c, '.' | '\'' | '-')))
                .skip_while(|w| COMMON_WORDS.contains(&w.to_lowercase().as_str()))
                .collect();
            if words.is_empty() {
                continue;
            }
            entities.push(NamedEntity::new(words.join(" "), EntityLabel::Organization));
        }
        Ok(entities)
    }
}

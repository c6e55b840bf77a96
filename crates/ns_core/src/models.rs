use async_trait::async_trait;
use crate::types::{NamedEntity, Sentiment};
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Paraphrase a headline into a single sentence
    async fn summarize(&self, headline: &str) -> Result<String>;
}

#[async_trait]
pub trait EntityExtractor: Send + Sync {
    fn name(&self) -> &str;

    /// Find every named entity in a piece of text, in any category
    async fn extract_entities(&self, text: &str) -> Result<Vec<NamedEntity>>;
}

pub trait SentimentScorer: Send + Sync {
    /// Compound polarity of a piece of text, in [-1, 1]
    fn compound(&self, text: &str) -> f64;

    fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_compound(self.compound(text))
    }
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into `target` (an ISO 639-1 code), detecting the source language
    async fn translate(&self, text: &str, target: &str) -> Result<String>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render text as MP3 audio spoken in `language`
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>>;
}

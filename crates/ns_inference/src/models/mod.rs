use std::sync::Arc;

use ns_core::{EntityExtractor, Error, Result, Summarizer};

use crate::sentiment::VaderScorer;
use crate::speech::GoogleTts;
use crate::translate::GoogleTranslator;
use crate::{Config, Models};

pub mod dummy;
pub mod huggingface;

pub use dummy::{DummySummarizer, RuleBasedExtractor};
pub use huggingface::{HuggingFaceExtractor, HuggingFaceSummarizer};

/// Build every model the fetch pipeline needs.
///
/// `model_name` picks the summarizer and entity extractor: `hosted` (the
/// default) talks to the Hugging Face inference API, `dummy` runs offline.
/// Sentiment scoring is always local; translation and speech always use the
/// Google endpoints.
pub async fn create_models(config: Option<Config>) -> Result<Models> {
    let config = config.unwrap_or_default();
    let client = crate::http_client()?;
    let endpoints = &config.inference_config;

    let model_name = config.model_name.as_deref().unwrap_or("hosted");
    let (summarizer, entities) = match model_name.to_lowercase().as_str() {
        "hosted" | "huggingface" | "hf" => {
            let summarizer = HuggingFaceSummarizer::new(
                client.clone(),
                endpoints.summarizer_url.clone(),
                config.api_key.clone(),
            );
            let entities = HuggingFaceExtractor::new(
                client.clone(),
                endpoints.ner_url.clone(),
                config.api_key.clone(),
            );
            let summarizer: Arc<dyn Summarizer> = Arc::new(summarizer);
            let entities: Arc<dyn EntityExtractor> = Arc::new(entities);
            (summarizer, entities)
        }
        "dummy" | "offline" => {
            let summarizer: Arc<dyn Summarizer> = Arc::new(DummySummarizer::new());
            let entities: Arc<dyn EntityExtractor> = Arc::new(RuleBasedExtractor::new()?);
            (summarizer, entities)
        }
        other => {
            return Err(Error::Inference(format!(
                "Unknown model: {}. Available models: hosted (default), dummy",
                other
            )))
        }
    };

    tracing::debug!("Using {} summarizer and {} entity extractor", summarizer.name(), entities.name());

    Ok(Models {
        summarizer,
        entities,
        sentiment: Arc::new(VaderScorer::new()),
        translator: Arc::new(GoogleTranslator::new(client.clone(), endpoints.translate_url.clone())),
        speech: Arc::new(GoogleTts::new(client, endpoints.tts_url.clone())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_models() {
        let models = create_models(None).await.unwrap();
        assert_eq!(models.summarizer.name(), "HuggingFace");

        let config = Config {
            model_name: Some("dummy".to_string()),
            ..Config::default()
        };
        let models = create_models(Some(config)).await.unwrap();
        assert_eq!(models.summarizer.name(), "Dummy");
        assert_eq!(models.entities.name(), "RuleBased");

        let config = Config {
            model_name: Some("gpt".to_string()),
            ..Config::default()
        };
        assert!(create_models(Some(config)).await.is_err());
    }
}

use std::sync::Arc;

use ns_core::{EntityExtractor, Result, SentimentScorer, SpeechSynthesizer, Summarizer, Translator};

pub mod models;
pub mod sentiment;
pub mod speech;
pub mod topics;
pub mod translate;

pub use models::create_models;
pub use sentiment::VaderScorer;
pub use speech::GoogleTts;
pub use topics::extract_topics;
pub use translate::GoogleTranslator;

/// Endpoints of the hosted services. `None` means the built-in default.
#[derive(Debug, Clone, Default)]
pub struct InferenceConfig {
    pub summarizer_url: Option<String>,
    pub ner_url: Option<String>,
    pub translate_url: Option<String>,
    pub tts_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub inference_config: InferenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: Some("hosted".to_string()),
            inference_config: InferenceConfig::default(),
        }
    }
}

/// The model instances a fetch pipeline runs against. Built once at startup
/// and shared read-only between requests.
#[derive(Clone)]
pub struct Models {
    pub summarizer: Arc<dyn Summarizer>,
    pub entities: Arc<dyn EntityExtractor>,
    pub sentiment: Arc<dyn SentimentScorer>,
    pub translator: Arc<dyn Translator>,
    pub speech: Arc<dyn SpeechSynthesizer>,
}

/// Client for every hosted call. The Google endpoints reject requests that
/// lack a browser user agent.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0")
        .build()?;
    Ok(client)
}

pub mod prelude {
    pub use super::{Config, InferenceConfig, Models};
    pub use super::models::create_models;
    pub use ns_core::{Article, Error, Result, Sentiment};
}

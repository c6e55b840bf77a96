pub mod models;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::{EntityExtractor, SentimentScorer, SpeechSynthesizer, Summarizer, Translator};
pub use storage::{audio_file_name, AudioStore, StoredAudio};
pub use types::{
    Article, EntityLabel, NamedEntity, NewsReport, Sentiment, SentimentDistribution,
    GENERAL_NEWS_TOPIC,
};

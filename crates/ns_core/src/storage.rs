use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::Result;

/// File name under which a company's spoken summary is stored.
pub fn audio_file_name(company: &str) -> String {
    let safe: String = company
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_sentiment_summary.mp3")
}

#[derive(Debug, Clone)]
pub struct StoredAudio {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub modified: DateTime<Utc>,
}

#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Store a company's audio, replacing any previous file. Returns the file name.
    async fn save(&self, company: &str, audio: &[u8]) -> Result<String>;

    /// Load a company's audio, or `Error::NotFound` if none was ever saved
    async fn load(&self, company: &str) -> Result<StoredAudio>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_file_name() {
        assert_eq!(audio_file_name("Acme"), "Acme_sentiment_summary.mp3");
        assert_eq!(audio_file_name("Acme Corp"), "Acme Corp_sentiment_summary.mp3");
        assert_eq!(audio_file_name(""), "_sentiment_summary.mp3");
        assert_eq!(audio_file_name("../etc"), ".._etc_sentiment_summary.mp3");
    }
}

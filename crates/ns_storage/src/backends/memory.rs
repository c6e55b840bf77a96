use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use ns_core::{audio_file_name, AudioStore, Error, Result, StoredAudio};
use tokio::sync::RwLock;

/// Keeps audio in process memory, keyed by file name.
#[derive(Default, Clone)]
pub struct MemoryAudioStore {
    files: Arc<RwLock<HashMap<String, StoredAudio>>>,
}

impl MemoryAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }
}

#[async_trait]
impl AudioStore for MemoryAudioStore {
    async fn save(&self, company: &str, audio: &[u8]) -> Result<String> {
        let file_name = audio_file_name(company);
        let stored = StoredAudio {
            file_name: file_name.clone(),
            bytes: audio.to_vec(),
            modified: Utc::now(),
        };
        self.files.write().await.insert(file_name.clone(), stored);
        Ok(file_name)
    }

    async fn load(&self, company: &str) -> Result<StoredAudio> {
        let file_name = audio_file_name(company);
        self.files
            .read()
            .await
            .get(&file_name)
            .cloned()
            .ok_or_else(|| Error::NotFound(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_audio_store() {
        let store = MemoryAudioStore::new();
        assert!(store.load("Acme").await.unwrap_err().is_not_found());

        let name = store.save("Acme", b"first").await.unwrap();
        assert_eq!(name, "Acme_sentiment_summary.mp3");
        store.save("Acme", b"second").await.unwrap();

        let audio = store.load("Acme").await.unwrap();
        assert_eq!(audio.bytes, b"second");
        assert_eq!(store.len().await, 1);
    }
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ns_core::{audio_file_name, AudioStore, Error, Result, StoredAudio};
use tracing::debug;

/// Writes one MP3 per company into a directory, overwriting on every save.
/// Concurrent saves for the same company race; the last writer wins.
#[derive(Debug, Clone)]
pub struct FileAudioStore {
    dir: PathBuf,
}

impl FileAudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, company: &str) -> PathBuf {
        self.dir.join(audio_file_name(company))
    }
}

#[async_trait]
impl AudioStore for FileAudioStore {
    async fn save(&self, company: &str, audio: &[u8]) -> Result<String> {
        let path = self.path_for(company);
        tokio::fs::write(&path, audio).await?;
        debug!("💾 Wrote {} bytes to {}", audio.len(), path.display());
        Ok(audio_file_name(company))
    }

    async fn load(&self, company: &str) -> Result<StoredAudio> {
        let file_name = audio_file_name(company);
        let path = self.dir.join(&file_name);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::NotFound(file_name)),
            Err(e) => return Err(e.into()),
        };
        let modified = tokio::fs::metadata(&path)
            .await?
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok(StoredAudio { file_name, bytes, modified })
    }
}

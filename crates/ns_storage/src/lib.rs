use std::path::PathBuf;
use std::sync::Arc;

use ns_core::{AudioStore, Error, Result};

pub mod backends;

pub use backends::*;

/// Build an audio store by name. `dir` only applies to the filesystem backend
/// and defaults to the current working directory.
pub fn create_audio_store(kind: &str, dir: Option<PathBuf>) -> Result<Arc<dyn AudioStore>> {
    match kind {
        "file" | "filesystem" => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            Ok(Arc::new(FileAudioStore::new(dir)))
        }
        "memory" => Ok(Arc::new(MemoryAudioStore::new())),
        other => Err(Error::Storage(format!("Unknown audio store: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_audio_store;
}

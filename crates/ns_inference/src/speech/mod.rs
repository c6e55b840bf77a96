use std::fmt;

use async_trait::async_trait;
use ns_core::{Error, Result, SpeechSynthesizer};
use reqwest::Client;

pub const DEFAULT_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Longest text the TTS endpoint accepts in one request, in characters.
pub const MAX_CHUNK_CHARS: usize = 100;

fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';' | ':' | ',' | '\n' | '।' | '॥' | '¿' | '¡' | '…' | '、' | '。' | '，')
}

/// Split text into pieces the endpoint will accept: first at punctuation,
/// then at whitespace, then mid-word for anything still too long. Pieces made
/// only of punctuation are dropped.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    for piece in text.split_inclusive(is_delimiter) {
        let piece = piece.trim();
        if !piece.chars().any(char::is_alphanumeric) {
            continue;
        }
        if piece.chars().count() <= max_chars {
            chunks.push(piece.to_string());
            continue;
        }

        let mut current = String::new();
        for word in piece.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if !current.is_empty() && current_len + 1 + word_len > max_chars {
                chunks.push(std::mem::take(&mut current));
            }
            if word_len > max_chars {
                let chars: Vec<char> = word.chars().collect();
                for slice in chars.chunks(max_chars) {
                    chunks.push(slice.iter().collect());
                }
                continue;
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            chunks.push(current);
        }
    }
    chunks
}

/// Google Translate's speech endpoint. Returns one MP3 stream made of the
/// per-chunk responses concatenated in order.
pub struct GoogleTts {
    client: Client,
    url: String,
}

impl fmt::Debug for GoogleTts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTts")
            .field("client", &"<reqwest::Client>")
            .field("url", &self.url)
            .finish()
    }
}

impl GoogleTts {
    pub fn new(client: Client, url: Option<String>) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_TTS_URL.to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(Error::Speech("No text to speak".to_string()));
        }

        let total = chunks.len().to_string();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();
            let bytes = self
                .client
                .get(&self.url)
                .query(&[
                    ("ie", "UTF-8"),
                    ("q", chunk.as_str()),
                    ("tl", language),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                    ("client", "tw-ob"),
                ])
                .send()
                .await?
                .error_for_status()
                .map_err(|e| Error::Speech(format!("Failed to synthesize chunk {}: {}", idx, e)))?
                .bytes()
                .await?;
            audio.extend_from_slice(&bytes);
        }

        tracing::debug!("Synthesized {} bytes of audio in {} chunk(s)", audio.len(), chunks.len());
        Ok(audio)
    }
}

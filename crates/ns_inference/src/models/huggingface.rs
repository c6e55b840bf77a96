use std::fmt;

use async_trait::async_trait;
use ns_core::{EntityExtractor, EntityLabel, Error, NamedEntity, Result, Summarizer};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/google/pegasus-xsum";
pub const DEFAULT_NER_URL: &str =
    "https://api-inference.huggingface.co/models/djagatiya/ner-roberta-base-ontonotesv5-englishv4";

const SUMMARY_PROMPT: &str = "Summarize this news headline into a clear, natural one-sentence summary while keeping the meaning the same:";

/// Wraps a headline in the paraphrasing instruction sent to the model.
pub fn summary_prompt(headline: &str) -> String {
    format!("{} {}", SUMMARY_PROMPT, headline)
}

/// Bounds for a single summary: short, and decoded greedily.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 40,
            min_length: 10,
            do_sample: false,
        }
    }
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
    options: RequestOptions,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

#[derive(Serialize)]
struct TokenClassificationParameters {
    aggregation_strategy: &'static str,
}

#[derive(Serialize)]
struct TokenClassificationRequest<'a> {
    inputs: &'a str,
    parameters: TokenClassificationParameters,
    options: RequestOptions,
}

#[derive(Deserialize)]
struct TokenClassificationOutput {
    #[serde(default)]
    entity_group: Option<String>,
    #[serde(default)]
    entity: Option<String>,
    word: String,
}

fn authorize(request: reqwest::RequestBuilder, api_key: &Option<String>) -> reqwest::RequestBuilder {
    match api_key {
        Some(key) => request.bearer_auth(key),
        None => request,
    }
}

/// Abstractive summarizer served by the Hugging Face inference API.
pub struct HuggingFaceSummarizer {
    client: Client,
    url: String,
    api_key: Option<String>,
    parameters: GenerationParameters,
}

impl fmt::Debug for HuggingFaceSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceSummarizer")
            .field("client", &"<reqwest::Client>")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl HuggingFaceSummarizer {
    pub fn new(client: Client, url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_SUMMARIZER_URL.to_string()),
            api_key,
            parameters: GenerationParameters::default(),
        }
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, headline: &str) -> Result<String> {
        let prompt = summary_prompt(headline);
        let request = SummarizationRequest {
            inputs: &prompt,
            parameters: &self.parameters,
            options: RequestOptions { wait_for_model: true },
        };

        let response = authorize(self.client.post(&self.url), &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SummarizationOutput>>()
            .await?;

        let summary = response
            .into_iter()
            .next()
            .map(|output| output.summary_text.trim().to_string())
            .ok_or_else(|| Error::Inference("Summarizer returned no output".to_string()))?;
        tracing::debug!("Generated summary: {}", summary);
        Ok(summary)
    }
}

/// Named-entity recognizer served by the Hugging Face inference API. Expects
/// a token-classification model with OntoNotes labels.
pub struct HuggingFaceExtractor {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl fmt::Debug for HuggingFaceExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceExtractor")
            .field("client", &"<reqwest::Client>")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HuggingFaceExtractor {
    pub fn new(client: Client, url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_NER_URL.to_string()),
            api_key,
        }
    }
}

#[async_trait]
impl EntityExtractor for HuggingFaceExtractor {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn extract_entities(&self, text: &str) -> Result<Vec<NamedEntity>> {
        let request = TokenClassificationRequest {
            inputs: text,
            parameters: TokenClassificationParameters { aggregation_strategy: "simple" },
            options: RequestOptions { wait_for_model: true },
        };

        let response = authorize(self.client.post(&self.url), &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TokenClassificationOutput>>()
            .await?;

        let mut entities = Vec::with_capacity(response.len());
        for output in response {
            let Some(tag) = output.entity_group.or(output.entity) else {
                continue;
            };
            match tag.parse::<EntityLabel>() {
                Ok(label) => entities.push(NamedEntity::new(output.word.trim(), label)),
                Err(e) => tracing::debug!("Skipping entity '{}': {}", output.word, e),
            }
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_summary_prompt() {
        assert_eq!(
            summary_prompt("Acme beats estimates"),
            "Summarize this news headline into a clear, natural one-sentence summary while keeping the meaning the same: Acme beats estimates"
        );
    }

    #[tokio::test]
    async fn test_summarize() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/pegasus")
            .match_header("authorization", "Bearer hf-test")
            .match_body(Matcher::PartialJson(json!({
                "inputs": summary_prompt("Acme beats estimates"),
                "parameters": { "max_length": 40, "min_length": 10, "do_sample": false }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"summary_text": " Acme has beaten analyst estimates. "}]"#)
            .create_async()
            .await;

        let summarizer = HuggingFaceSummarizer::new(
            Client::new(),
            Some(format!("{}/models/pegasus", server.url())),
            Some("hf-test".to_string()),
        );
        let summary = summarizer.summarize("Acme beats estimates").await.unwrap();

        assert_eq!(summary, "Acme has beaten analyst estimates.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_summarize_propagates_model_errors() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/pegasus")
            .with_status(503)
            .with_body(r#"{"error": "Model is currently loading"}"#)
            .create_async()
            .await;

        let summarizer = HuggingFaceSummarizer::new(
            Client::new(),
            Some(format!("{}/models/pegasus", server.url())),
            None,
        );
        assert!(summarizer.summarize("Acme beats estimates").await.is_err());
    }

    #[tokio::test]
    async fn test_summarize_empty_output() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/pegasus")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let summarizer = HuggingFaceSummarizer::new(
            Client::new(),
            Some(format!("{}/models/pegasus", server.url())),
            None,
        );
        let err = summarizer.summarize("Acme").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[tokio::test]
    async fn test_extract_entities() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/ner")
            .match_body(Matcher::PartialJson(json!({
                "parameters": { "aggregation_strategy": "simple" }
            })))
            .with_status(200)
            .with_body(
                r#"[
                    {"entity_group": "ORG", "word": " Acme Corp", "score": 0.99, "start": 0, "end": 9},
                    {"entity_group": "PERSON", "word": "Jane Doe", "score": 0.98, "start": 14, "end": 22},
                    {"entity_group": "MONEY", "word": "$5 billion", "score": 0.97, "start": 30, "end": 40},
                    {"entity_group": "SOMETHING", "word": "??", "score": 0.5, "start": 41, "end": 43}
                ]"#,
            )
            .create_async()
            .await;

        let extractor = HuggingFaceExtractor::new(
            Client::new(),
            Some(format!("{}/models/ner", server.url())),
            None,
        );
        let entities = extractor
            .extract_entities("Acme Corp hires Jane Doe in a $5 billion deal")
            .await
            .unwrap();

        assert_eq!(
            entities,
            vec![
                NamedEntity::new("Acme Corp", EntityLabel::Organization),
                NamedEntity::new("Jane Doe", EntityLabel::Person),
                NamedEntity::new("$5 billion", EntityLabel::Money),
            ]
        );
    }

    #[tokio::test]
    async fn test_extract_entities_ungrouped_tags() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/ner")
            .with_status(200)
            .with_body(r#"[{"entity": "B-GPE", "word": "India", "score": 0.9, "index": 3}]"#)
            .create_async()
            .await;

        let extractor = HuggingFaceExtractor::new(
            Client::new(),
            Some(format!("{}/models/ner", server.url())),
            None,
        );
        let entities = extractor.extract_entities("Acme expands in India").await.unwrap();
        assert_eq!(entities, vec![NamedEntity::new("India", EntityLabel::GeoPolitical)]);
    }
}

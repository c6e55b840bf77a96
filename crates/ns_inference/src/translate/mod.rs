use std::fmt;

use async_trait::async_trait;
use ns_core::{Error, Result, Translator};
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate's public endpoint with automatic source detection.
pub struct GoogleTranslator {
    client: Client,
    url: String,
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("client", &"<reqwest::Client>")
            .field("url", &self.url)
            .finish()
    }
}

impl GoogleTranslator {
    pub fn new(client: Client, url: Option<String>) -> Self {
        Self {
            client,
            url: url.unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string()),
        }
    }
}

/// The response is a nested array whose first element lists translated
/// segments as `[translated, original, ...]`.
fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation("Unexpected translation response".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(Error::Translation("Translation response had no text".to_string()));
    }
    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let body = self
            .client
            .get(&self.url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let translated = parse_translation(&body)?;
        tracing::debug!("Translated to {}: {}", target, translated);
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_parse_translation_joins_segments() {
        let body = json!([
            [["पहला वाक्य। ", "First sentence. ", null, null, 10], ["दूसरा।", "Second.", null, null, 10]],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&body).unwrap(), "पहला वाक्य। दूसरा।");
        assert!(parse_translation(&json!({"error": "nope"})).is_err());
        assert!(parse_translation(&json!([[]])).is_err());
    }

    #[tokio::test]
    async fn test_translate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sl".into(), "auto".into()),
                Matcher::UrlEncoded("tl".into(), "hi".into()),
                Matcher::UrlEncoded("q".into(), "Acme’s latest news coverage is neutral.".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[[["एक्मे का नवीनतम समाचार कवरेज तटस्थ है।","Acme’s latest news coverage is neutral.",null,null,10]],null,"en"]"#)
            .create_async()
            .await;

        let translator = GoogleTranslator::new(
            Client::new(),
            Some(format!("{}/translate_a/single", server.url())),
        );
        let translated = translator
            .translate("Acme’s latest news coverage is neutral.", "hi")
            .await
            .unwrap();

        assert_eq!(translated, "एक्मे का नवीनतम समाचार कवरेज तटस्थ है।");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_translate_failure_propagates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let translator = GoogleTranslator::new(
            Client::new(),
            Some(format!("{}/translate_a/single", server.url())),
        );
        assert!(translator.translate("hello", "hi").await.is_err());
    }
}

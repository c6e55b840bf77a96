use async_trait::async_trait;
use ns_core::{Error, Result};
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::scrapers::{utils, Scraper, SourceMetadata};

/// Headlines from Bing News search results.
#[derive(Debug, Clone)]
pub struct BingNewsScraper {
    client: Client,
    base_url: String,
}

impl BingNewsScraper {
    const BASE_URL: &'static str = "https://www.bing.com/news/search";
    const HEADLINE_SELECTOR: &'static str = "a.title";
    const USER_AGENT: &'static str = "Mozilla/5.0";

    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(Self::USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The query goes through verbatim, empty or not.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(&self.base_url, &[("q", query), ("form", "QBNH")])
            .map_err(|e| Error::Scraping(format!("Failed to build search URL: {}", e)))
    }

    pub fn parse_headlines(html: &str, limit: usize) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        utils::extract_texts(&document, Self::HEADLINE_SELECTOR, limit)
    }
}

#[async_trait]
impl Scraper for BingNewsScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Bing News",
            emoji: "🔎",
        }
    }

    async fn fetch_headlines(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let url = self.search_url(query)?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            tracing::warn!("Search for '{}' returned {}", query, response.status());
        }
        let html = response.text().await?;
        Self::parse_headlines(&html, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn results_page(count: usize) -> String {
        let mut html = String::from("<html><body><a class=\"nav\" href=\"/\">Home</a>");
        for i in 1..=count {
            html.push_str(&format!(
                "<div class=\"news-card\"><a class=\"title\" href=\"https://example.com/{i}\">\n  Acme headline <b>{i}</b>\n</a></div>"
            ));
        }
        html.push_str("</body></html>");
        html
    }

    #[test]
    fn test_search_url() {
        let scraper = BingNewsScraper::new().unwrap();
        let url = scraper.search_url("Acme Corp").unwrap();
        assert_eq!(url.host_str(), Some("www.bing.com"));
        assert_eq!(url.path(), "/news/search");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "Acme Corp".to_string()),
                ("form".to_string(), "QBNH".to_string())
            ]
        );

        let empty = scraper.search_url("").unwrap();
        assert_eq!(empty.query_pairs().next().map(|(_, v)| v.into_owned()), Some(String::new()));
    }

    #[test]
    fn test_parse_headlines_keeps_first_ten_in_order() {
        let headlines = BingNewsScraper::parse_headlines(&results_page(12), 10).unwrap();
        assert_eq!(headlines.len(), 10);
        assert_eq!(headlines[0], "Acme headline 1");
        assert_eq!(headlines[9], "Acme headline 10");
    }

    #[test]
    fn test_parse_headlines_without_results() {
        let headlines = BingNewsScraper::parse_headlines("<html><p>No results</p></html>", 10).unwrap();
        assert!(headlines.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_headlines() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/news/search")
            .match_header("user-agent", "Mozilla/5.0")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Acme".into()),
                Matcher::UrlEncoded("form".into(), "QBNH".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(results_page(3))
            .create_async()
            .await;

        let scraper = BingNewsScraper::with_base_url(format!("{}/news/search", server.url())).unwrap();
        let headlines = scraper.fetch_headlines("Acme", 10).await.unwrap();

        assert_eq!(headlines, vec!["Acme headline 1", "Acme headline 2", "Acme headline 3"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_headlines_whitespace_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/news/search")
            .match_query(Matcher::UrlEncoded("q".into(), " ".into()))
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let scraper = BingNewsScraper::with_base_url(format!("{}/news/search", server.url())).unwrap();
        let headlines = scraper.fetch_headlines(" ", 10).await.unwrap();

        assert!(headlines.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_headlines_network_error() {
        let scraper = BingNewsScraper::with_base_url("http://127.0.0.1:9/news/search").unwrap();
        assert!(scraper.fetch_headlines("Acme", 10).await.is_err());
    }
}

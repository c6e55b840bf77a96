use async_trait::async_trait;
use ns_core::Result;

pub mod bing;

pub use bing::BingNewsScraper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
}

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the name and emoji of the news source
    fn source_metadata(&self) -> SourceMetadata;

    /// Returns up to `limit` headlines matching `query`, in page order
    async fn fetch_headlines(&self, query: &str, limit: usize) -> Result<Vec<String>>;
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use ns_core::{Error, Result};
    use scraper::{ElementRef, Html, Selector};

    pub fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector '{}': {}", selector, e)))
    }

    /// All text below an element, text nodes joined by single spaces with
    /// runs of whitespace collapsed: `Acme <b>1</b>` reads "Acme 1", not "Acme1".
    pub fn element_text(element: ElementRef<'_>) -> String {
        element
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn extract_texts(document: &Html, selector: &str, limit: usize) -> Result<Vec<String>> {
        let selector = parse_selector(selector)?;
        Ok(document
            .select(&selector)
            .take(limit)
            .map(element_text)
            .collect())
    }
}

pub mod scrapers;
pub mod manager;
pub mod cli;
pub mod logging;

pub use manager::{FetcherConfig, NewsFetcher};
pub use scrapers::{BingNewsScraper, Scraper, SourceMetadata};

pub use cli::{handle_fetch, FetchArgs};
pub use logging::{init_logging, Logger};

pub mod prelude {
    pub use super::manager::{FetcherConfig, NewsFetcher};
    pub use super::scrapers::{BingNewsScraper, Scraper};
    pub use ns_core::{Article, Error, NewsReport, Result};
}

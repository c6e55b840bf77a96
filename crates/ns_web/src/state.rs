use std::sync::Arc;
use ns_core::AudioStore;
use ns_scrapers::NewsFetcher;

pub struct AppState {
    pub fetcher: Arc<NewsFetcher>,
    /// Where `/tts` reads back what the fetcher saved
    pub audio: Arc<dyn AudioStore>,
}

use std::sync::Arc;

use ns_core::{Article, AudioStore, NewsReport, Result, SentimentDistribution};
use ns_inference::{extract_topics, Models};

use crate::logging::Logger;
use crate::scrapers::Scraper;

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Headlines enriched per report
    pub max_articles: usize,
    /// Language of the translated verdict and its audio
    pub target_language: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_articles: 10,
            target_language: "hi".to_string(),
        }
    }
}

/// Turns a company name into a [`NewsReport`]: search, per-headline
/// enrichment, verdict, translation and speech, strictly in that order.
/// Any failure aborts the whole report.
pub struct NewsFetcher {
    scraper: Arc<dyn Scraper>,
    models: Models,
    audio: Arc<dyn AudioStore>,
    config: FetcherConfig,
}

impl NewsFetcher {
    pub fn new(scraper: Arc<dyn Scraper>, models: Models, audio: Arc<dyn AudioStore>) -> Self {
        Self {
            scraper,
            models,
            audio,
            config: FetcherConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FetcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Summary, then topics and sentiment of that summary.
    pub async fn enrich(&self, headline: &str) -> Result<Article> {
        let summary = self.models.summarizer.summarize(headline).await?;
        let topics = extract_topics(self.models.entities.as_ref(), &summary).await?;
        let sentiment = self.models.sentiment.classify(&summary);

        Ok(Article {
            title: headline.to_string(),
            summary,
            sentiment,
            topics,
        })
    }

    pub async fn fetch_report(&self, company: &str) -> Result<NewsReport> {
        let logger = Logger::new().with_new_prefixes(company.to_string());
        let source = self.scraper.source_metadata();

        logger.info(&format!("{} Searching {}", source.emoji, source.name));
        let headlines = self
            .scraper
            .fetch_headlines(company, self.config.max_articles)
            .await?;
        logger.info(&format!("📰 Found {} headlines", headlines.len()));

        let total = headlines.len();
        let mut articles = Vec::with_capacity(total);
        let mut distribution = SentimentDistribution::default();
        for (i, headline) in headlines.iter().enumerate() {
            let article_logger = logger.with_prefix(format!("{}/{}", i + 1, total));
            article_logger.debug(&format!("🤖 Enriching: {}", headline));

            let article = self.enrich(headline).await?;
            distribution.record(article.sentiment);
            article_logger.info(&format!("✨ {} {}", article.sentiment, article.title));
            articles.push(article);
        }

        let dominant = distribution.dominant();
        let final_sentiment = dominant.verdict_for(company);
        logger.info(&format!("📊 Dominant sentiment: {}", dominant));

        let final_sentiment_translated = self
            .models
            .translator
            .translate(&final_sentiment, &self.config.target_language)
            .await?;
        logger.debug(&format!("🌍 Translated verdict: {}", final_sentiment_translated));

        let audio = self
            .models
            .speech
            .synthesize(&final_sentiment_translated, &self.config.target_language)
            .await?;
        let file_name = self.audio.save(company, &audio).await?;
        logger.info(&format!("🔊 Saved {}", file_name));

        Ok(NewsReport {
            company: company.to_string(),
            articles,
            sentiment_distribution: distribution,
            final_sentiment,
            final_sentiment_translated,
            audio: NewsReport::audio_reference(&file_name),
        })
    }
}

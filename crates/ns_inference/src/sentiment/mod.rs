//! VADER (Hutto & Gilbert, 2014) compound polarity over the full upstream
//! lexicon, as shipped by the `vader_sentiment` crate.

use std::fmt;

use ns_core::SentimentScorer;
use vader_sentiment::SentimentIntensityAnalyzer;

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound score rounded to four decimals.
    pub fn polarity(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        (compound * 10_000.0).round() / 10_000.0
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        self.polarity(text)
    }
}

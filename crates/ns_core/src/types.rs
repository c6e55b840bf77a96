use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topic reported for an article when no entity of interest was found.
pub const GENERAL_NEWS_TOPIC: &str = "General News";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const POSITIVE_THRESHOLD: f64 = 0.3;
    pub const NEGATIVE_THRESHOLD: f64 = -0.3;

    /// Every label, in the order used to break ties between equal counts.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Classifies a compound polarity score. Anything that is neither clearly
    /// positive nor clearly negative (including NaN) is neutral.
    pub fn from_compound(score: f64) -> Self {
        if score >= Self::POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score <= Self::NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// The canned closing statement for a company whose coverage is dominated
    /// by this label.
    pub fn verdict_for(&self, company: &str) -> String {
        match self {
            Sentiment::Positive => format!(
                "{company}’s latest news coverage is mostly positive. Potential stock growth expected."
            ),
            Sentiment::Negative => format!(
                "{company}’s latest news coverage is mostly negative. Investors may need to be cautious."
            ),
            Sentiment::Neutral => format!(
                "{company}’s latest news coverage is neutral. No major market movements expected."
            ),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-label article counts for one report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive", default)]
    pub positive: usize,
    #[serde(rename = "Negative", default)]
    pub negative: usize,
    #[serde(rename = "Neutral", default)]
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// The label with the highest count. Ties go to the earliest label in
    /// [`Sentiment::ALL`].
    ///
    /// An empty distribution is the one exception: the all-zero three-way
    /// tie is Neutral, not Positive.
    pub fn dominant(&self) -> Sentiment {
        if self.total() == 0 {
            return Sentiment::Neutral;
        }
        let mut best = Sentiment::ALL[0];
        for candidate in Sentiment::ALL.into_iter().skip(1) {
            if self.count(candidate) > self.count(best) {
                best = candidate;
            }
        }
        best
    }
}

impl FromIterator<Sentiment> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut distribution = SentimentDistribution::default();
        for sentiment in iter {
            distribution.record(sentiment);
        }
        distribution
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Topics")]
    pub topics: BTreeSet<String>,
}

/// Everything returned for one company query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsReport {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<Article>,
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment: String,
    #[serde(rename = "Final Sentiment Analysis (Hindi)")]
    pub final_sentiment_translated: String,
    #[serde(rename = "Audio")]
    pub audio: String,
}

impl NewsReport {
    /// Playback hint pointing at a saved audio file.
    pub fn audio_reference(file_name: &str) -> String {
        format!("[Play {file_name}]")
    }
}

/// Entity categories produced by OntoNotes-style NER models, plus the CoNLL
/// catch-alls some hosted models emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    Norp,
    Facility,
    Organization,
    GeoPolitical,
    Location,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
    Misc,
}

impl EntityLabel {
    /// Whether entities of this kind are reported as article topics.
    pub fn is_topic(&self) -> bool {
        matches!(
            self,
            EntityLabel::Organization
                | EntityLabel::GeoPolitical
                | EntityLabel::Product
                | EntityLabel::Event
                | EntityLabel::Law
                | EntityLabel::Money
        )
    }
}

impl FromStr for EntityLabel {
    type Err = String;

    /// Accepts bare labels (`ORG`) as well as BIOES-tagged ones (`B-ORG`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let tag = match upper.split_once('-') {
            Some((prefix, rest)) if matches!(prefix, "B" | "I" | "E" | "S" | "L" | "U") => rest,
            _ => upper.as_str(),
        };
        let label = match tag {
            "PERSON" | "PER" => EntityLabel::Person,
            "NORP" => EntityLabel::Norp,
            "FAC" => EntityLabel::Facility,
            "ORG" => EntityLabel::Organization,
            "GPE" => EntityLabel::GeoPolitical,
            "LOC" => EntityLabel::Location,
            "PRODUCT" => EntityLabel::Product,
            "EVENT" => EntityLabel::Event,
            "WORK_OF_ART" => EntityLabel::WorkOfArt,
            "LAW" => EntityLabel::Law,
            "LANGUAGE" => EntityLabel::Language,
            "DATE" => EntityLabel::Date,
            "TIME" => EntityLabel::Time,
            "PERCENT" => EntityLabel::Percent,
            "MONEY" => EntityLabel::Money,
            "QUANTITY" => EntityLabel::Quantity,
            "ORDINAL" => EntityLabel::Ordinal,
            "CARDINAL" => EntityLabel::Cardinal,
            "MISC" => EntityLabel::Misc,
            other => return Err(format!("unknown entity label: {other}")),
        };
        Ok(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    pub text: String,
    pub label: EntityLabel,
}

impl NamedEntity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self { text: text.into(), label }
    }
}

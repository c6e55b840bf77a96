use std::collections::BTreeSet;

use ns_core::{EntityExtractor, NamedEntity, Result, GENERAL_NEWS_TOPIC};

/// Reduce entities to the distinct topic names worth reporting. Never empty:
/// text without a single organisation, place, product, event, law or amount
/// of money is "General News".
pub fn topics_from_entities<I>(entities: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = NamedEntity>,
{
    let topics: BTreeSet<String> = entities
        .into_iter()
        .filter(|entity| entity.label.is_topic())
        .map(|entity| entity.text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if topics.is_empty() {
        BTreeSet::from([GENERAL_NEWS_TOPIC.to_string()])
    } else {
        topics
    }
}

pub async fn extract_topics(extractor: &dyn EntityExtractor, text: &str) -> Result<BTreeSet<String>> {
    let entities = extractor.extract_entities(text).await?;
    Ok(topics_from_entities(entities))
}

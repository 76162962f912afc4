//! Sentence-level enrichment: topic, compound, named entity, summary.

use crate::{Summary, SummaryProvider};
use sense_context::{classify, detect_compound, is_likely_named_entity, search_terms, Topic};
use serde::Serialize;

/// Everything the context layer learned about one (sentence, word) query.
#[derive(Clone, Debug, Serialize)]
pub struct Enrichment {
    pub topic: Option<Topic>,
    /// Known compound the word closes in this sentence, if any.
    pub compound: Option<String>,
    /// Capitalized mid-sentence occurrence; informational only.
    pub named_entity: bool,
    pub summary: Option<Summary>,
}

/// Classify the sentence and fetch a matching summary.
///
/// A detected compound overrides topic-driven term selection: "food bank"
/// is looked up verbatim instead of the senses of "bank". The named-entity
/// flag is reported as metadata only and does not influence which terms
/// are tried.
pub async fn enrich(
    provider: &dyn SummaryProvider,
    sentence: &str,
    word: &str,
) -> Enrichment {
    let topic = classify(sentence);
    let compound = detect_compound(word, sentence);
    let named_entity = is_likely_named_entity(word, sentence);

    let terms = if let Some(compound) = &compound {
        vec![compound.clone()]
    } else {
        search_terms(word, topic)
    };

    let summary = provider.lookup(&terms).await;

    Enrichment {
        topic,
        compound,
        named_entity,
        summary,
    }
}

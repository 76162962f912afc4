//! Knowledge-overlap scoring against enriched glosses.

use sense_lexicon::SenseCandidate;
use sense_text::tokenize;
use std::collections::HashSet;

/// Hypernym definitions appended to a gloss.
const GLOSS_HYPERNYMS: usize = 2;

/// Definition text plus usage examples plus up to two hypernym definitions,
/// joined with single spaces. This is the text the overlap score runs on; the
/// extra context lets a sense match sentences that share vocabulary with its
/// neighborhood rather than its definition alone.
pub fn enriched_gloss(sense: &SenseCandidate) -> String {
    let mut parts = vec![sense.definition.clone()];
    parts.extend(sense.examples.iter().cloned());
    parts.extend(
        sense
            .hypernyms
            .iter()
            .take(GLOSS_HYPERNYMS)
            .map(|h| h.definition.clone()),
    );
    parts.join(" ")
}

/// Number of distinct sentence tokens that also occur in the sense's
/// enriched gloss. Set semantics: repeating a word in the sentence never
/// raises the score.
pub fn knowledge_overlap(sentence: &str, sense: &SenseCandidate) -> u32 {
    let sentence_tokens: HashSet<String> = tokenize(sentence).into_iter().collect();
    if sentence_tokens.is_empty() {
        return 0;
    }
    let gloss_tokens: HashSet<String> = tokenize(&enriched_gloss(sense)).into_iter().collect();
    sentence_tokens.intersection(&gloss_tokens).count() as u32
}

//! Keyword-driven context detection for sense disambiguation.
//!
//! Three read-only facilities, all backed by static data tables loaded into
//! the binary at compile time and safe to share across requests:
//!
//! - [`classify`]: best-matching topic for a sentence, from a fixed catalog
//!   of topic keyword sets.
//! - [`detect_compound`]: allow-list gated detection of two-word compounds
//!   ending in the target word ("food bank", "apple tree").
//! - [`search_terms`]: ordered encyclopedic lookup terms for a
//!   (word, topic) pair.

mod catalog;
mod compound;
mod terms;
mod topic;

pub use catalog::classify;
pub use compound::detect_compound;
pub use terms::search_terms;
pub use topic::Topic;

/// Whether the word appears capitalized in the sentence at a position that
/// suggests a proper noun rather than sentence-initial capitalization.
pub fn is_likely_named_entity(word: &str, sentence: &str) -> bool {
    let word_lower = word.to_lowercase();
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        let clean: String = token
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if clean.to_lowercase() != word_lower {
            continue;
        }
        let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
        if starts_upper && (i > 0 || tokens.len() > 1) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entity_requires_capitalization() {
        assert!(is_likely_named_entity(
            "apple",
            "Yesterday Apple launched a new iphone"
        ));
        assert!(!is_likely_named_entity(
            "apple",
            "she ate an apple for lunch"
        ));
    }
}

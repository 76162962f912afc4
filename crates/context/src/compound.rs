//! Allow-list gated two-word compound detection.
//!
//! The detector only ever reports compounds from a fixed list, trading recall
//! for precision: a spurious "the bank" must never become a lookup term.

/// Function words that never form the first half of a compound.
const STOP_WORDS: &[&str] = &[
    "will", "would", "could", "should", "can", "may", "might", "must",
    "do", "does", "did", "has", "have", "had", "is", "are", "was", "were",
    "the", "a", "an", "to", "and", "or", "but", "for", "with", "at", "by",
    "i", "you", "he", "she", "it", "we", "they", "my", "your", "his", "her",
    "this", "that", "these", "those", "some", "any", "all", "each", "every",
];

/// Known two-word compounds, kept as configuration data.
const KNOWN_COMPOUNDS: &[&str] = &[
    "blood bank", "food bank", "river bank", "memory bank",
    "apple tree", "apple pie", "apple juice",
    "cell phone", "prison cell", "blood cell",
    "light bulb", "traffic light", "flash light",
    "book store", "book shelf", "comic book",
    "smart watch", "pocket watch", "stop watch",
    "wrist watch", "night watch",
];

/// Detect whether `word` closes a known two-word compound in `sentence`.
///
/// The word is located among the raw whitespace tokens case-insensitively,
/// exact match first and substring containment as a fallback. The literal
/// preceding token (stripped to letters) must not be empty or a stop word,
/// and the resulting `"{prev} {word}"` phrase must appear in the allow-list.
/// Punctuation-only tokens occupy positions of their own, so a stray `,`
/// between the two words breaks adjacency.
pub fn detect_compound(word: &str, sentence: &str) -> Option<String> {
    let word_lower = word.to_lowercase();
    if word_lower.is_empty() {
        return None;
    }

    let sentence_lower = sentence.to_lowercase();
    let tokens: Vec<&str> = sentence_lower.split_whitespace().collect();
    let position = tokens
        .iter()
        .position(|token| *token == word_lower)
        .or_else(|| tokens.iter().position(|token| token.contains(&word_lower)))?;
    if position == 0 {
        return None;
    }

    let prev: String = tokens[position - 1]
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    if prev.is_empty() || STOP_WORDS.contains(&prev.as_str()) {
        return None;
    }

    let compound = format!("{prev} {word_lower}");
    if KNOWN_COMPOUNDS.contains(&compound.as_str()) {
        log::debug!("Detected compound term '{compound}'");
        Some(compound)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_known_compound() {
        assert_eq!(
            detect_compound("bank", "I went to donate to the food bank today"),
            Some("food bank".to_string())
        );
        assert_eq!(
            detect_compound("tree", "the apple tree bloomed"),
            Some("apple tree".to_string())
        );
    }

    #[test]
    fn stop_word_prefix_is_rejected() {
        assert_eq!(detect_compound("bank", "The bank raised interest rates"), None);
        assert_eq!(detect_compound("watch", "she lost her watch"), None);
    }

    #[test]
    fn unlisted_compound_is_rejected() {
        // "sand bank" is a real compound but not in the allow-list.
        assert_eq!(detect_compound("bank", "waves washed over the sand bank"), None);
    }

    #[test]
    fn first_token_cannot_close_a_compound() {
        assert_eq!(detect_compound("bank", "bank deposits grew"), None);
    }

    #[test]
    fn matching_is_case_insensitive_and_tolerates_punctuation() {
        assert_eq!(
            detect_compound("Bank", "we visited the Blood Bank."),
            Some("blood bank".to_string())
        );
    }

    #[test]
    fn falls_back_to_substring_match() {
        // "banks" contains "bank"; the preceding word still gates the result.
        assert_eq!(
            detect_compound("bank", "several food banks opened"),
            Some("food bank".to_string())
        );
    }

    #[test]
    fn punctuation_token_between_the_words_breaks_adjacency() {
        // The literal preceding token is "," which strips to empty, so the
        // "food" two tokens back must not be paired with "bank".
        assert_eq!(
            detect_compound("bank", "I gave to the food , bank yesterday"),
            None
        );
        assert_eq!(
            detect_compound("bank", "we followed the river - bank trail"),
            None
        );
    }

    #[test]
    fn missing_word_yields_none() {
        assert_eq!(detect_compound("bank", "nothing to see here"), None);
        assert_eq!(detect_compound("", "food bank"), None);
    }
}

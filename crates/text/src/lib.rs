//! Sentence tokenization shared by the scoring and context-detection crates.
//!
//! Two views of the same sentence:
//! - [`tokenize`]: lowercase ASCII word tokens for overlap scoring.
//! - [`extract_words`]: whitespace tokens with their original surface form,
//!   so a caller can select a *word* without ever selecting punctuation.

use serde::Serialize;

/// A whitespace-delimited token with punctuation stripped from the clean copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Index among the sentence's whitespace tokens.
    pub index: usize,
    /// Token with every non-alphanumeric/underscore character removed.
    pub clean: String,
    /// Original surface form, casing and punctuation intact.
    pub original: String,
}

/// Normalize text into lowercase word tokens.
///
/// Every character that is not ASCII alphanumeric becomes a space, then the
/// result splits on whitespace. Total function; empty or punctuation-only
/// input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            normalized.push(ch.to_ascii_lowercase());
        } else {
            normalized.push(' ');
        }
    }
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Extract selectable words from a sentence, preserving surface forms.
///
/// Tokens that are pure punctuation are skipped entirely; the returned
/// indices still refer to positions in the original whitespace split.
pub fn extract_words(sentence: &str) -> Vec<Word> {
    sentence
        .split_whitespace()
        .enumerate()
        .filter_map(|(index, token)| {
            let clean: String = token
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if clean.is_empty() {
                return None;
            }
            Some(Word {
                index,
                clean,
                original: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("I went to the Bank."),
            vec!["i", "went", "to", "the", "bank"]
        );
    }

    #[test]
    fn tokenize_output_is_lowercase_alphanumeric_only() {
        let tokens = tokenize("Mixed-CASE text, with 42 numbers & symbols!");
        for token in &tokens {
            assert!(token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() && !c.is_uppercase()));
        }
        assert_eq!(
            tokens,
            vec!["mixed", "case", "text", "with", "42", "numbers", "symbols"]
        );
    }

    #[test]
    fn tokenize_treats_non_ascii_letters_as_separators() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
        assert_eq!(tokenize("日本語 text"), vec!["text"]);
    }

    #[test]
    fn tokenize_punctuation_only_is_empty() {
        assert_eq!(tokenize("?!... --- ;;"), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn extract_words_keeps_positions_and_surface_forms() {
        let words = extract_words("I went to the bank.");
        let expected: Vec<(usize, &str, &str)> = vec![
            (0, "I", "I"),
            (1, "went", "went"),
            (2, "to", "to"),
            (3, "the", "the"),
            (4, "bank", "bank."),
        ];
        assert_eq!(words.len(), expected.len());
        for (word, (index, clean, original)) in words.iter().zip(expected) {
            assert_eq!(word.index, index);
            assert_eq!(word.clean, clean);
            assert_eq!(word.original, original);
        }
    }

    #[test]
    fn extract_words_skips_punctuation_only_tokens() {
        let words = extract_words("wait -- what ?");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].clean, "wait");
        assert_eq!(words[1].clean, "what");
        // Index still counts the skipped "--" token.
        assert_eq!(words[1].index, 2);
    }
}

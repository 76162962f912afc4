use crate::{EntryMap, LexicalResource, LexiconError, Result, SenseCandidate};
use serde::Deserialize;

pub(crate) const BUILTIN_LEXICON: &str = include_str!("../../../lexicon/builtin.json");

/// A candidate sense never carries more than two broader-category links.
const MAX_HYPERNYMS: usize = 2;

#[derive(Debug, Deserialize)]
struct RawLexicon {
    schema_version: u32,
    entries: EntryMap,
}

/// JSON-backed sense inventory.
///
/// Entry order inside each word is the resource's sense-frequency order and
/// is preserved verbatim; downstream tie-breaks rely on it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: EntryMap,
}

impl Dictionary {
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: RawLexicon = serde_json::from_str(raw)?;
        if parsed.schema_version != 1 {
            return Err(LexiconError::SchemaVersion(parsed.schema_version));
        }

        let mut entries = parsed.entries;
        for senses in entries.values_mut() {
            for sense in senses.iter_mut() {
                if sense.definition.trim().is_empty() {
                    return Err(LexiconError::EmptyDefinition(sense.key.clone()));
                }
                sense.hypernyms.truncate(MAX_HYPERNYMS);
            }
        }

        log::debug!("Loaded lexicon with {} headwords", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All headwords in the inventory, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.entries.keys().cloned().collect();
        words.sort();
        words
    }
}

impl LexicalResource for Dictionary {
    fn senses(&self, word: &str) -> Vec<SenseCandidate> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Vec::new();
        }
        self.entries.get(&word).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_lexicon_parses() {
        let dict = crate::builtin().expect("builtin lexicon is valid");
        assert!(!dict.is_empty());
    }

    #[test]
    fn senses_preserve_declared_order() {
        let dict = crate::builtin().unwrap();
        let senses = dict.senses("bank");
        assert!(senses.len() >= 2);
        assert_eq!(senses[0].key, "bank.n.01");
    }

    #[test]
    fn unknown_word_is_empty_not_error() {
        let dict = crate::builtin().unwrap();
        assert!(dict.senses("zzyzx").is_empty());
        assert!(dict.senses("").is_empty());
        assert!(dict.senses("   ").is_empty());
    }

    #[test]
    fn words_are_sorted_and_complete() {
        let dict = crate::builtin().unwrap();
        let words = dict.words();
        assert_eq!(words.len(), dict.len());
        assert!(words.windows(2).all(|w| w[0] < w[1]));
        assert!(words.iter().any(|w| w == "bank"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = crate::builtin().unwrap();
        assert_eq!(dict.senses("Bank"), dict.senses("bank"));
    }

    #[test]
    fn hypernyms_are_capped_at_two() {
        let raw = r#"{
            "schema_version": 1,
            "entries": {
                "word": [{
                    "key": "word.n.01",
                    "definition": "a unit of language",
                    "hypernyms": [
                        {"key": "a.n.01", "definition": "first"},
                        {"key": "b.n.01", "definition": "second"},
                        {"key": "c.n.01", "definition": "third"}
                    ]
                }]
            }
        }"#;
        let dict = Dictionary::from_json(raw).unwrap();
        assert_eq!(dict.senses("word")[0].hypernyms.len(), 2);
    }

    #[test]
    fn loads_a_lexicon_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"{
                "schema_version": 1,
                "entries": {
                    "widget": [{"key": "widget.n.01", "definition": "a small device"}]
                }
            }"#,
        )
        .expect("write lexicon");

        let dict = crate::from_path(&path).expect("load from disk");
        assert_eq!(dict.senses("widget")[0].key, "widget.n.01");
        assert!(crate::from_path(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let raw = r#"{"schema_version": 2, "entries": {}}"#;
        assert!(matches!(
            Dictionary::from_json(raw),
            Err(LexiconError::SchemaVersion(2))
        ));
    }

    #[test]
    fn rejects_empty_definition() {
        let raw = r#"{
            "schema_version": 1,
            "entries": {
                "word": [{"key": "word.n.01", "definition": "   "}]
            }
        }"#;
        assert!(matches!(
            Dictionary::from_json(raw),
            Err(LexiconError::EmptyDefinition(_))
        ));
    }
}

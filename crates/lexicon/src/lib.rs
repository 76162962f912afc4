//! Lexical resource adapter: candidate senses for a word.
//!
//! The scoring pipeline only depends on the [`LexicalResource`] trait. The
//! shipped implementation is [`Dictionary`], a WordNet-style sense inventory
//! deserialized from JSON (a builtin inventory is embedded; a larger one can
//! be loaded from disk). Lookups are pure: an unknown word yields an empty
//! candidate list, never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

mod dictionary;

pub use dictionary::Dictionary;

pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported lexicon schema_version {0} (expected 1)")]
    SchemaVersion(u32),

    #[error("Sense '{0}' has an empty definition")]
    EmptyDefinition(String),
}

/// A broader-category sense referenced by a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypernym {
    /// Resource key of the broader sense, e.g. `financial_institution.n.01`.
    pub key: String,
    pub definition: String,
}

/// One candidate meaning of a word.
///
/// Immutable once fetched; the pipeline owns it for the duration of a single
/// request and never caches it across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseCandidate {
    /// Resource-specific key, e.g. `bank.n.01`.
    pub key: String,
    /// Dictionary gloss. Always non-empty.
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Broader-category links, capped at two by the adapter.
    #[serde(default)]
    pub hypernyms: Vec<Hypernym>,
}

/// Ordered candidate-sense lookup for a lowercase word.
pub trait LexicalResource: Send + Sync {
    /// Candidate senses in resource-native frequency order.
    ///
    /// Unknown or empty words yield an empty vec.
    fn senses(&self, word: &str) -> Vec<SenseCandidate>;
}

/// Load the builtin sense inventory embedded in the binary.
pub fn builtin() -> Result<Dictionary> {
    Dictionary::from_json(dictionary::BUILTIN_LEXICON)
}

/// Load a sense inventory from a JSON file on disk.
pub fn from_path(path: &Path) -> Result<Dictionary> {
    let raw = std::fs::read_to_string(path)?;
    Dictionary::from_json(&raw)
}

pub(crate) type EntryMap = HashMap<String, Vec<SenseCandidate>>;

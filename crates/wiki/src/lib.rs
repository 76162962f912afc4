//! Encyclopedic enrichment for disambiguation queries.
//!
//! A [`SummaryProvider`] resolves an ordered list of lookup terms to a short
//! summary text. The production provider queries Wikipedia with tight
//! timeouts; lookups are best-effort and a miss is never an error. Summaries
//! can be cached on disk keyed by the term list.

mod cache;
mod enrich;
mod wikipedia;

pub use cache::{cache_dir, CachedProvider, DiskCache};
pub use enrich::{enrich, Enrichment};
pub use wikipedia::WikipediaProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug)]
pub enum WikiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Cache entry is corrupt: {0}")]
    CorruptCache(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WikiError>;

/// A short summary resolved for one of the attempted lookup terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The term that produced the hit.
    pub term: String,
    /// Trimmed summary text, a few sentences at most.
    pub text: String,
}

/// Resolves lookup terms to summaries, trying terms in order.
///
/// Implementations return `None` when no term yields a usable summary;
/// transport failures on one term advance to the next term silently.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn lookup(&self, terms: &[String]) -> Option<Summary>;
}

/// In-memory provider for tests and offline use.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    entries: HashMap<String, String>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, term: &str, text: &str) -> Self {
        self.entries.insert(term.to_string(), text.to_string());
        self
    }
}

#[async_trait]
impl SummaryProvider for StaticProvider {
    async fn lookup(&self, terms: &[String]) -> Option<Summary> {
        terms.iter().find_map(|term| {
            self.entries.get(term).map(|text| Summary {
                term: term.clone(),
                text: text.clone(),
            })
        })
    }
}

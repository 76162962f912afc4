//! Disk cache for resolved summaries.

use crate::{Result, Summary, SummaryProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

const CACHE_SCHEMA_VERSION: u32 = 1;

/// Cache root: `SENSE_CACHE_DIR`, else `$XDG_CACHE_HOME/sense-finder`, else
/// `~/.cache/sense-finder`.
pub fn cache_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SENSE_CACHE_DIR") {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var("XDG_CACHE_HOME") {
        return PathBuf::from(path).join("sense-finder");
    }
    std::env::var("HOME")
        .map_or_else(|_| PathBuf::from("."), PathBuf::from)
        .join(".cache")
        .join("sense-finder")
}

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    schema_version: u32,
    /// `None` records a confirmed miss so it is not retried every query.
    summary: Option<Summary>,
}

/// One JSON file per key under a single directory.
#[derive(Clone, Debug)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let digest = hasher.finalize();
        let mut name = String::with_capacity(64);
        for byte in digest {
            name.push_str(&format!("{byte:02x}"));
        }
        self.dir.join(format!("{name}.json"))
    }

    /// `Some(entry)` when the key is cached; the inner option distinguishes a
    /// cached summary from a cached miss.
    fn get(&self, key: &str) -> Option<Option<Summary>> {
        let path = self.path_for(key);
        let raw = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) if entry.schema_version == CACHE_SCHEMA_VERSION => Some(entry.summary),
            _ => {
                // Stale or corrupt entries are dropped and re-fetched.
                let _ = std::fs::remove_file(&path);
                None
            }
        }
    }

    fn put(&self, key: &str, summary: Option<&Summary>) -> Result<()> {
        let entry = CacheEntry {
            schema_version: CACHE_SCHEMA_VERSION,
            summary: summary.cloned(),
        };
        let path = self.path_for(key);
        std::fs::write(&path, serde_json::to_string(&entry)?)?;
        Ok(())
    }
}

/// Wraps a provider with the disk cache, keyed by the full term list.
pub struct CachedProvider<P> {
    inner: P,
    cache: DiskCache,
}

impl<P: SummaryProvider> CachedProvider<P> {
    pub const fn new(inner: P, cache: DiskCache) -> Self {
        Self { inner, cache }
    }

    fn key(terms: &[String]) -> String {
        terms.join("\n")
    }
}

#[async_trait]
impl<P: SummaryProvider> SummaryProvider for CachedProvider<P> {
    async fn lookup(&self, terms: &[String]) -> Option<Summary> {
        if terms.is_empty() {
            return None;
        }

        let key = Self::key(terms);
        if let Some(cached) = self.cache.get(&key) {
            log::debug!("Summary cache hit for '{}'", terms[0]);
            return cached;
        }

        let summary = self.inner.lookup(terms).await;
        if let Err(err) = self.cache.put(&key, summary.as_ref()) {
            log::warn!("Failed to write summary cache: {err}");
        }
        summary
    }
}

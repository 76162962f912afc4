//! Wikipedia-backed summary provider.

use crate::{Result, Summary, SummaryProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Per-request budget. Enrichment is optional context, so a slow upstream
/// must not stall the whole query.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Sentences kept from the page extract.
const SUMMARY_SENTENCES: usize = 3;

/// Character cap applied after sentence truncation.
const SUMMARY_MAX_CHARS: usize = 200;

const DEFAULT_SEARCH_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
const DEFAULT_SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

#[derive(Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Deserialize)]
struct PageSummary {
    extract: Option<String>,
}

/// Summary lookup against the MediaWiki search API plus the REST summary
/// endpoint. Each term costs at most one search and one summary request.
pub struct WikipediaProvider {
    client: Client,
    search_endpoint: String,
    summary_endpoint: String,
}

impl WikipediaProvider {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("sense-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            summary_endpoint: DEFAULT_SUMMARY_ENDPOINT.to_string(),
        })
    }

    async fn try_term(&self, term: &str) -> Result<Option<Summary>> {
        let response: SearchResponse = self
            .client
            .get(&self.search_endpoint)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(title) = response
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title)
        else {
            return Ok(None);
        };

        let url = format!(
            "{}/{}",
            self.summary_endpoint,
            urlencode_title(&title)
        );
        let page: PageSummary = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page
            .extract
            .map(|extract| trim_summary(&extract))
            .filter(|text| !text.is_empty())
            .map(|text| Summary {
                term: term.to_string(),
                text,
            }))
    }
}

#[async_trait]
impl SummaryProvider for WikipediaProvider {
    async fn lookup(&self, terms: &[String]) -> Option<Summary> {
        for term in terms {
            match self.try_term(term).await {
                Ok(Some(summary)) => {
                    log::debug!("Summary hit for '{term}' ({} chars)", summary.text.len());
                    return Some(summary);
                }
                Ok(None) => {}
                Err(err) => {
                    log::debug!("Summary lookup for '{term}' failed: {err}");
                }
            }
        }
        None
    }
}

/// Title path segment for the REST summary endpoint: spaces become
/// underscores and reserved characters are percent-encoded.
fn urlencode_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        match ch {
            ' ' => out.push('_'),
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' | '(' | ')' => out.push(ch),
            other => {
                let mut buf = [0u8; 4];
                for byte in other.encode_utf8(&mut buf).as_bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    out
}

/// First few sentences of the extract, capped to a character budget on a
/// char boundary.
fn trim_summary(extract: &str) -> String {
    let mut text = String::new();
    let mut sentences = 0;
    for ch in extract.chars() {
        text.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            sentences += 1;
            if sentences >= SUMMARY_SENTENCES {
                break;
            }
        }
    }

    let mut text = text.trim().to_string();
    if text.chars().count() > SUMMARY_MAX_CHARS {
        text = text.chars().take(SUMMARY_MAX_CHARS).collect();
        text.push_str("...");
    }
    text
}

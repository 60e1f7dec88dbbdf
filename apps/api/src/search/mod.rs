//! Web Lookup: pluggable search capability used by the selection-probability stage.
//!
//! Default: `PlaceholderSearch`, which returns a canned hit. A real backend
//! implements `WebSearch` and is swapped in at startup via `AppState`.

use std::fmt::Write as _;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchHit>,
}

impl SearchResults {
    /// Numbered plain-text rendering for prompt interpolation.
    pub fn to_prompt_text(&self) -> String {
        if self.results.is_empty() {
            return format!("No results found for \"{}\".", self.query);
        }
        let mut out = String::new();
        for (i, hit) in self.results.iter().enumerate() {
            let _ = writeln!(out, "{}. {} ({})\n   {}", i + 1, hit.title, hit.url, hit.snippet);
        }
        out
    }
}

/// Carried in `AppState` as `Arc<dyn WebSearch>`.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResults>;
}

pub struct PlaceholderSearch;

#[async_trait]
impl WebSearch for PlaceholderSearch {
    async fn search(&self, query: &str) -> Result<SearchResults> {
        Ok(SearchResults {
            query: query.to_string(),
            results: vec![SearchHit {
                title: format!("Search results for: {query}"),
                snippet: "Live web search is not configured; assume typical market conditions."
                    .to_string(),
                url: "about:blank".to_string(),
            }],
        })
    }
}

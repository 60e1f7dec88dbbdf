//! In-process fakes for the service's collaborator traits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::bail;
use async_trait::async_trait;

use crate::analysis::acquisition::PageFetcher;
use crate::config::{Config, ResumeSource};
use crate::documents::{DocumentError, DocumentStore};
use crate::llm_client::{LlmError, LlmProvider, ProviderSet};
use crate::search::{PlaceholderSearch, SearchResults, WebSearch};
use crate::state::AppState;

/// Replies by inspecting the prompt, like a model would. Records `(prompt, key)`.
#[derive(Default)]
pub struct ScriptedLlm {
    pub calls: Mutex<Vec<(String, String)>>,
    overrides: Vec<(&'static str, &'static str)>,
}

impl ScriptedLlm {
    /// Replies with `reply` to any prompt containing `marker`.
    pub fn replying(mut self, marker: &'static str, reply: &'static str) -> Self {
        self.overrides.push((marker, reply));
        self
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), api_key.to_string()));
        let overridden = self
            .overrides
            .iter()
            .find(|(marker, _)| prompt.contains(marker))
            .map(|(_, reply)| *reply);
        let reply = if let Some(reply) = overridden {
            reply
        } else if prompt.starts_with("What is the name of the hiring company") {
            "  Acme Corp \n"
        } else if prompt.starts_with("You are an expert resume writer") {
            "\nJane Doe\nStaff Data Engineer candidate\n"
        } else if prompt.starts_with("The following is the raw HTML") {
            "Senior Backend Engineer at Acme Corp"
        } else if prompt.contains("Years of experience fit") {
            "Years: 70\nSCORE: 80"
        } else if prompt.contains("projected match score") {
            "Add Kafka (+5)\nSCORE: 70"
        } else if prompt.contains("selection probability") {
            "Hiring activity: high\nSCORE: 60"
        } else {
            "Keyword match: 92\nSCORE: 90"
        };
        Ok(reply.to_string())
    }
}

pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn complete(&self, _prompt: &str, _api_key: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 429,
            message: "Quota exceeded".to_string(),
        })
    }
}

/// `None` simulates an unreachable document store.
pub struct FixedResume(pub Option<&'static str>);

#[async_trait]
impl DocumentStore for FixedResume {
    async fn fetch_text(&self) -> Result<String, DocumentError> {
        self.0.map(str::to_string).ok_or(DocumentError::Empty)
    }
}

#[derive(Default)]
pub struct CountingSearch(pub AtomicUsize);

#[async_trait]
impl WebSearch for CountingSearch {
    async fn search(&self, query: &str) -> anyhow::Result<SearchResults> {
        self.0.fetch_add(1, Ordering::SeqCst);
        PlaceholderSearch.search(query).await
    }
}

pub struct NoFetch;

#[async_trait]
impl PageFetcher for NoFetch {
    async fn fetch(&self, _url: &str) -> anyhow::Result<String> {
        bail!("network disabled")
    }
}

pub fn test_config() -> Config {
    Config {
        port: 3000,
        rust_log: "debug".to_string(),
        resume_source: ResumeSource::File {
            path: "resume.txt".into(),
        },
        llm_timeout: Duration::from_secs(5),
        page_fetch_timeout: Duration::from_secs(5),
        page_fetch_user_agent: "test-agent".to_string(),
    }
}

/// State wired with `llm` for both providers and a fixed resume.
pub fn test_state(llm: Arc<dyn LlmProvider>) -> AppState {
    AppState {
        config: test_config(),
        providers: ProviderSet::new(llm.clone(), llm),
        documents: Arc::new(FixedResume(Some(
            "Jane Doe. Senior engineer, 7 years of Rust, Go and PostgreSQL.",
        ))),
        search: Arc::new(PlaceholderSearch),
        fetcher: Arc::new(NoFetch),
    }
}

//! Content Acquisition: resolves the job description text for a request.
//!
//! Manual text wins and is passed through unchanged. Otherwise the URL is
//! fetched once and its markup handed to the LLM for extraction; a failure on
//! that path is logged and reported as a missing description. No retries.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::analysis::keys::{ApiKeys, Stage};
use crate::analysis::prompts::JOB_EXTRACTION_PROMPT;
use crate::errors::AppError;
use crate::llm_client::{ProviderKind, ProviderSet};

/// Markup beyond this many characters is dropped before prompting.
pub const MAX_MARKUP_CHARS: usize = 50_000;

pub const MISSING_DESCRIPTION: &str = "Job description or URL is required";

/// Raw page retrieval. Carried in `AppState` as `Arc<dyn PageFetcher>`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching job posting: {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch job posting")?;

        if !response.status().is_success() {
            bail!("HTTP error: {}", response.status());
        }

        response.text().await.context("Failed to read response body")
    }
}

pub struct Acquisition<'a> {
    pub fetcher: &'a dyn PageFetcher,
    pub providers: &'a ProviderSet,
    pub provider: ProviderKind,
    pub keys: &'a ApiKeys,
}

impl Acquisition<'_> {
    /// Returns the job description, or `Validation` when no source yields one.
    pub async fn job_description(
        &self,
        job_url: Option<&str>,
        manual: Option<&str>,
    ) -> Result<String, AppError> {
        if let Some(text) = manual {
            return Ok(text.to_string());
        }

        if let Some(url) = job_url {
            match self.extract_from_url(url).await {
                Ok(text) => return Ok(text),
                Err(e) => warn!("Job description extraction from {url} failed: {e:#}"),
            }
        }

        Err(AppError::Validation(MISSING_DESCRIPTION.to_string()))
    }

    async fn extract_from_url(&self, url: &str) -> Result<String> {
        let markup = self.fetcher.fetch(url).await?;
        let prompt =
            JOB_EXTRACTION_PROMPT.replace("{markup}", truncate_chars(&markup, MAX_MARKUP_CHARS));

        let key = self
            .keys
            .for_stage(Stage::JobExtraction)
            .context("No API key available for job extraction")?;
        let text = self
            .providers
            .dispatch(self.provider, &prompt, key)
            .await
            .context("Job description extraction failed")?;

        let text = text.trim();
        if text.is_empty() {
            bail!("Extraction returned no text");
        }
        info!("Extracted job description ({} chars)", text.chars().count());
        Ok(text.to_string())
    }
}

/// Longest prefix of `text` with at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, LlmProvider};
    use std::sync::{Arc, Mutex};

    struct FixedPage(Option<&'static str>);

    #[async_trait]
    impl PageFetcher for FixedPage {
        async fn fetch(&self, _url: &str) -> Result<String> {
            match self.0 {
                Some(html) => Ok(html.to_string()),
                None => bail!("connection refused"),
            }
        }
    }

    /// Records prompts and keys, replies with a fixed string.
    struct Recorder {
        reply: &'static str,
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl LlmProvider for Recorder {
        async fn complete(&self, prompt: &str, api_key: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), api_key.to_string()));
            Ok(self.reply.to_string())
        }
    }

    fn recorder(reply: &'static str) -> Arc<Recorder> {
        Arc::new(Recorder {
            reply,
            calls: Mutex::new(vec![]),
        })
    }

    fn keys() -> ApiKeys {
        ApiKeys::new(
            Some("k1".to_string()),
            Some("k2".to_string()),
            Some("k3".to_string()),
        )
    }

    #[tokio::test]
    async fn test_manual_text_passes_through_without_fetch() {
        let llm = recorder("unused");
        let providers = ProviderSet::new(llm.clone(), llm.clone());
        let keys = keys();
        let acq = Acquisition {
            fetcher: &FixedPage(None),
            providers: &providers,
            provider: ProviderKind::Gemini,
            keys: &keys,
        };
        let text = acq
            .job_description(Some("https://jobs.example/1"), Some("Manual JD"))
            .await
            .unwrap();
        assert_eq!(text, "Manual JD");
        assert!(llm.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_url_is_extracted_with_slot_one_key() {
        let llm = recorder("  Senior Backend Engineer at Acme  ");
        let providers = ProviderSet::new(llm.clone(), llm.clone());
        let keys = keys();
        let acq = Acquisition {
            fetcher: &FixedPage(Some("<html><h1>Senior Backend Engineer</h1></html>")),
            providers: &providers,
            provider: ProviderKind::Gemini,
            keys: &keys,
        };
        let text = acq
            .job_description(Some("https://jobs.example/1"), None)
            .await
            .unwrap();
        assert_eq!(text, "Senior Backend Engineer at Acme");

        let calls = llm.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("<h1>Senior Backend Engineer</h1>"));
        assert_eq!(calls[0].1, "k1");
    }

    #[tokio::test]
    async fn test_fetch_failure_without_manual_is_validation_error() {
        let llm = recorder("unused");
        let providers = ProviderSet::new(llm.clone(), llm.clone());
        let keys = keys();
        let acq = Acquisition {
            fetcher: &FixedPage(None),
            providers: &providers,
            provider: ProviderKind::Gemini,
            keys: &keys,
        };
        let err = acq
            .job_description(Some("https://jobs.example/1"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == MISSING_DESCRIPTION));
    }

    #[tokio::test]
    async fn test_no_source_is_validation_error() {
        let llm = recorder("unused");
        let providers = ProviderSet::new(llm.clone(), llm.clone());
        let keys = keys();
        let acq = Acquisition {
            fetcher: &FixedPage(None),
            providers: &providers,
            provider: ProviderKind::Chatgpt,
            keys: &keys,
        };
        assert!(acq.job_description(None, None).await.is_err());
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }
}

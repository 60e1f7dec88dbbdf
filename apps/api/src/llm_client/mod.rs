//! LLM Client: the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call a provider API directly.
//! Every prompt goes through `ProviderSet::dispatch`, which routes on the
//! request's `ProviderKind` to one `LlmProvider` implementation.
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod gemini;
pub mod openai;
pub mod prompts;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Request URLs are stripped so query-string credentials never reach
/// error messages or logs.
impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e.without_url())
    }
}

/// The text-generation service used for every prompt of one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    Chatgpt,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => f.write_str("gemini"),
            ProviderKind::Chatgpt => f.write_str("chatgpt"),
        }
    }
}

/// Uniform `(prompt, key) -> text` contract shared by every provider.
///
/// The API key is passed per call because each scoring stage may use a
/// different key slot.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String, LlmError>;
}

/// One provider implementation per `ProviderKind`.
/// Carried in `AppState`; tests swap in fakes through `ProviderSet::new`.
#[derive(Clone)]
pub struct ProviderSet {
    gemini: Arc<dyn LlmProvider>,
    chatgpt: Arc<dyn LlmProvider>,
}

impl ProviderSet {
    pub fn new(gemini: Arc<dyn LlmProvider>, chatgpt: Arc<dyn LlmProvider>) -> Self {
        Self { gemini, chatgpt }
    }

    /// Builds the real HTTP-backed providers, each bounded by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self::new(
            Arc::new(GeminiProvider::new(timeout)?),
            Arc::new(OpenAiProvider::new(timeout)?),
        ))
    }

    fn provider(&self, kind: ProviderKind) -> &dyn LlmProvider {
        match kind {
            ProviderKind::Gemini => self.gemini.as_ref(),
            ProviderKind::Chatgpt => self.chatgpt.as_ref(),
        }
    }

    /// Sends `prompt` to the provider selected by `kind` using `api_key`.
    ///
    /// The completion is returned as-is, blank or not; callers decide what an
    /// empty answer means.
    pub async fn dispatch(
        &self,
        kind: ProviderKind,
        prompt: &str,
        api_key: &str,
    ) -> Result<String, LlmError> {
        debug!("Dispatching {} char prompt to {kind}", prompt.chars().count());
        self.provider(kind).complete(prompt, api_key).await
    }
}

/// Pulls a human-readable message out of a provider error envelope
/// (`{"error": {"message": ...}}`), falling back to the raw body.
pub(crate) fn api_error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(body)
}

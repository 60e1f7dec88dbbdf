use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_GOOGLE_DOCS_API_URL: &str = "https://docs.googleapis.com/v1/documents";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Where the master resume is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeSource {
    GoogleDocs {
        api_url: String,
        document_id: String,
        access_token: String,
    },
    File {
        path: PathBuf,
    },
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable required by the chosen resume source is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub resume_source: ResumeSource,
    pub llm_timeout: Duration,
    pub page_fetch_timeout: Duration,
    pub page_fetch_user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            resume_source: resume_source_from_env()?,
            llm_timeout: Duration::from_secs(secs_env("LLM_TIMEOUT_SECS", 120)?),
            page_fetch_timeout: Duration::from_secs(secs_env("PAGE_FETCH_TIMEOUT_SECS", 10)?),
            page_fetch_user_agent: std::env::var("PAGE_FETCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

fn resume_source_from_env() -> Result<ResumeSource> {
    let kind = std::env::var("RESUME_SOURCE").unwrap_or_else(|_| "google-docs".to_string());
    match kind.as_str() {
        "google-docs" => Ok(ResumeSource::GoogleDocs {
            api_url: std::env::var("GOOGLE_DOCS_API_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_DOCS_API_URL.to_string()),
            document_id: require_env("RESUME_DOCUMENT_ID")?,
            access_token: require_env("GOOGLE_ACCESS_TOKEN")?,
        }),
        "file" => Ok(ResumeSource::File {
            path: PathBuf::from(require_env("RESUME_FILE_PATH")?),
        }),
        other => bail!("RESUME_SOURCE must be 'google-docs' or 'file', got '{other}'"),
    }
}

fn secs_env(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds")),
        Err(_) => Ok(default),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

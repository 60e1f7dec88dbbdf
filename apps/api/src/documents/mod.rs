//! Reference Fetch: retrieves the applicant's master resume as plain text.
//!
//! Carried in `AppState` as `Arc<dyn DocumentStore>`; built from
//! `Config::resume_source` at startup.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ResumeSource;

pub mod google_docs;
pub mod local_file;

pub use google_docs::GoogleDocsStore;
pub use local_file::LocalFileStore;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Document API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read resume file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Resume document is empty")]
    Empty,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the whole document flattened to plain text.
    async fn fetch_text(&self) -> Result<String, DocumentError>;
}

pub fn store_from_source(source: &ResumeSource) -> Result<Arc<dyn DocumentStore>, DocumentError> {
    Ok(match source {
        ResumeSource::GoogleDocs {
            api_url,
            document_id,
            access_token,
        } => Arc::new(GoogleDocsStore::new(
            api_url.clone(),
            document_id.clone(),
            access_token.clone(),
        )?),
        ResumeSource::File { path } => Arc::new(LocalFileStore::new(path.clone())),
    })
}

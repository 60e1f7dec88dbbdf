use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::{DocumentError, DocumentStore};

/// Reads the resume from disk. `.pdf` files go through `pdf-extract`;
/// anything else is read as UTF-8 text.
pub struct LocalFileStore {
    path: PathBuf,
}

impl LocalFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn is_pdf(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    }
}

#[async_trait]
impl DocumentStore for LocalFileStore {
    async fn fetch_text(&self) -> Result<String, DocumentError> {
        let text = if self.is_pdf() {
            let path = self.path.clone();
            tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path))
                .await
                .map_err(|e| DocumentError::Pdf(e.to_string()))?
                .map_err(|e| DocumentError::Pdf(e.to_string()))?
        } else {
            tokio::fs::read_to_string(&self.path).await?
        };

        if text.trim().is_empty() {
            return Err(DocumentError::Empty);
        }
        info!(
            "Loaded resume from {} ({} chars)",
            self.path.display(),
            text.chars().count()
        );
        Ok(text)
    }
}

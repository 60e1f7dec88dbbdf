use std::sync::Arc;

use crate::analysis::acquisition::PageFetcher;
use crate::analysis::pipeline::AnalysisDeps;
use crate::config::Config;
use crate::documents::DocumentStore;
use crate::llm_client::ProviderSet;
use crate::search::WebSearch;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; nothing mutable crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub providers: ProviderSet,
    /// Master resume source. Built from `Config::resume_source`.
    pub documents: Arc<dyn DocumentStore>,
    /// Pluggable web lookup. Default: PlaceholderSearch.
    pub search: Arc<dyn WebSearch>,
    pub fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    pub fn analysis_deps(&self) -> AnalysisDeps<'_> {
        AnalysisDeps {
            providers: &self.providers,
            documents: self.documents.as_ref(),
            search: self.search.as_ref(),
            fetcher: self.fetcher.as_ref(),
        }
    }
}

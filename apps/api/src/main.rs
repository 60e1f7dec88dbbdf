mod analysis;
mod config;
mod documents;
mod errors;
mod llm_client;
mod optimization;
mod routes;
mod search;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::acquisition::HttpPageFetcher;
use crate::config::{Config, ResumeSource};
use crate::documents::store_from_source;
use crate::llm_client::ProviderSet;
use crate::routes::build_router;
use crate::search::PlaceholderSearch;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    let providers = ProviderSet::with_timeout(config.llm_timeout)?;
    info!(
        "LLM providers initialized (gemini: {}, chatgpt: {}, timeout {:?})",
        llm_client::gemini::MODEL,
        llm_client::openai::MODEL,
        config.llm_timeout
    );

    let documents = store_from_source(&config.resume_source)?;
    match &config.resume_source {
        ResumeSource::GoogleDocs { document_id, .. } => {
            info!("Resume source: Google Docs document {document_id}")
        }
        ResumeSource::File { path } => info!("Resume source: {}", path.display()),
    }

    let fetcher = Arc::new(HttpPageFetcher::new(
        config.page_fetch_timeout,
        &config.page_fetch_user_agent,
    )?);

    let state = AppState {
        config: config.clone(),
        providers,
        documents,
        search: Arc::new(PlaceholderSearch),
        fetcher,
    };

    // The caller is a browser extension, so any origin is allowed.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

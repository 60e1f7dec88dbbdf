pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::optimization::handlers as optimization;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze-resume", post(analysis::handle_analyze_resume))
        .route(
            "/api/optimize-resume",
            post(optimization::handle_optimize_resume),
        )
        .with_state(state)
}

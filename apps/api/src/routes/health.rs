use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness probe with the listening port and the current time.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "port": state.config.port,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::analysis::models::AnalysisRequest;
use crate::errors::AppError;
use crate::optimization::optimizer::optimize_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub success: bool,
    pub optimized_resume: String,
}

/// POST /api/optimize-resume
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let Json(request) = payload?;
    let span = info_span!("optimization", id = %Uuid::new_v4());
    let optimized_resume = optimize_resume(state.analysis_deps(), &request)
        .instrument(span)
        .await?;

    Ok(Json(OptimizeResponse {
        success: true,
        optimized_resume,
    }))
}

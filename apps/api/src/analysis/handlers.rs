//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::analysis::models::{AnalysisRequest, AnalyzeResponse};
use crate::analysis::pipeline::run_analysis;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze-resume
///
/// Full analysis: acquire JD → fetch resume → four score stages → summary.
/// 400 on an unreadable body, a missing job source or a missing API key;
/// 500 with `details` on any upstream failure.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let span = info_span!("analysis", id = %Uuid::new_v4());
    let result = run_analysis(state.analysis_deps(), &request)
        .instrument(span)
        .await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        result,
    }))
}

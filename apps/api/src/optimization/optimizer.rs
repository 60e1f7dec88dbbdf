//! Resume Optimization: one LLM call producing a job-tailored resume.
//!
//! Flow: validate → acquire JD → fetch resume → rewrite (key slot per
//!       `Stage::ResumeOptimization`). Writing the result back to the
//!       document store is left to the caller.

use tracing::info;

use crate::analysis::keys::Stage;
use crate::analysis::models::AnalysisRequest;
use crate::analysis::pipeline::{load_inputs, validate, AnalysisDeps, StageRunner};
use crate::errors::AppError;
use crate::llm_client::prompts::NO_FABRICATION_INSTRUCTION;
use crate::optimization::prompts::OPTIMIZE_RESUME_PROMPT;

pub async fn optimize_resume(
    deps: AnalysisDeps<'_>,
    request: &AnalysisRequest,
) -> Result<String, AppError> {
    let keys = validate(request)?;
    let (job_description, resume) =
        load_inputs(deps, request, &keys, AppError::Optimization).await?;

    let prompt = OPTIMIZE_RESUME_PROMPT
        .replace("{resume}", &resume)
        .replace("{job_description}", &job_description)
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION);

    let runner = StageRunner {
        providers: deps.providers,
        provider: request.ai_provider,
        keys: &keys,
        on_error: AppError::Optimization,
    };
    let optimized = runner.run(Stage::ResumeOptimization, &prompt).await?;
    let optimized = optimized.trim();
    if optimized.is_empty() {
        return Err(AppError::Optimization(
            "Resume optimization returned no text".to_string(),
        ));
    }

    info!("Optimized resume: {} chars", optimized.chars().count());
    Ok(optimized.to_string())
}

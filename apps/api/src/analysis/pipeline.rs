//! Scoring Sequence: orchestrates the analysis flow.
//!
//! Flow: acquire JD → fetch resume → match → role fit → optimization potential →
//!       company name → 3 web lookups → selection probability → aggregate.
//!
//! Stages run strictly in order so each key slot sees a predictable request
//! rate. Only the three web lookups run concurrently; they share no key slot.

use tracing::info;

use crate::analysis::acquisition::{
    truncate_chars, Acquisition, PageFetcher, MISSING_DESCRIPTION,
};
use crate::analysis::keys::{ApiKeys, Stage};
use crate::analysis::models::{AnalysisRequest, AnalysisResult, ScoreReport};
use crate::analysis::prompts::{
    COMPANY_NAME_PROMPT, MATCH_PROMPT, OPTIMIZATION_POTENTIAL_PROMPT, ROLE_FIT_PROMPT,
    SELECTION_PROBABILITY_PROMPT,
};
use crate::documents::DocumentStore;
use crate::errors::AppError;
use crate::llm_client::prompts::{NO_FABRICATION_INSTRUCTION, SCORE_LINE_INSTRUCTION};
use crate::llm_client::{ProviderKind, ProviderSet};
use crate::search::WebSearch;

/// Characters of the job description shown to the company-name call.
const COMPANY_CONTEXT_CHARS: usize = 1000;
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Collaborators borrowed from `AppState` for one request.
#[derive(Clone, Copy)]
pub struct AnalysisDeps<'a> {
    pub providers: &'a ProviderSet,
    pub documents: &'a dyn DocumentStore,
    pub search: &'a dyn WebSearch,
    pub fetcher: &'a dyn PageFetcher,
}

/// Input checks shared by every endpoint taking an `AnalysisRequest`.
/// Job source is checked before keys.
pub fn validate(request: &AnalysisRequest) -> Result<ApiKeys, AppError> {
    if request.job_url().is_none() && request.manual_description().is_none() {
        return Err(AppError::Validation(MISSING_DESCRIPTION.to_string()));
    }
    let keys = request.keys();
    if !keys.any() {
        return Err(AppError::Validation(format!(
            "API key required for {}",
            request.ai_provider
        )));
    }
    Ok(keys)
}

/// Resolves the job description and resume text for a validated request.
/// `on_error` wraps upstream failures for the calling flow.
pub async fn load_inputs(
    deps: AnalysisDeps<'_>,
    request: &AnalysisRequest,
    keys: &ApiKeys,
    on_error: fn(String) -> AppError,
) -> Result<(String, String), AppError> {
    let job_description = Acquisition {
        fetcher: deps.fetcher,
        providers: deps.providers,
        provider: request.ai_provider,
        keys,
    }
    .job_description(request.job_url(), request.manual_description())
    .await?;

    let resume = deps
        .documents
        .fetch_text()
        .await
        .map_err(|e| on_error(format!("Failed to fetch resume: {e}")))?;

    Ok((job_description, resume))
}

/// Sends stage prompts through the request's provider with the stage's key slot.
pub struct StageRunner<'a> {
    pub providers: &'a ProviderSet,
    pub provider: ProviderKind,
    pub keys: &'a ApiKeys,
    pub on_error: fn(String) -> AppError,
}

impl StageRunner<'_> {
    pub async fn run(&self, stage: Stage, prompt: &str) -> Result<String, AppError> {
        let key = self.keys.for_stage(stage).ok_or_else(|| {
            AppError::Validation(format!("API key required for {}", self.provider))
        })?;
        self.providers
            .dispatch(self.provider, prompt, key)
            .await
            .map_err(|e| (self.on_error)(format!("{stage:?} stage failed: {e}")))
    }

    async fn score(&self, stage: Stage, prompt: &str) -> Result<ScoreReport, AppError> {
        let report = ScoreReport::from_response(self.run(stage, prompt).await?);
        info!("{stage:?} score: {}", report.score);
        Ok(report)
    }
}

/// Runs the full analysis for a request and returns the assembled result.
pub async fn run_analysis(
    deps: AnalysisDeps<'_>,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AppError> {
    let keys = validate(request)?;
    info!("Starting analysis with provider {}", request.ai_provider);

    let (job_description, resume) = load_inputs(deps, request, &keys, AppError::Analysis).await?;

    let runner = StageRunner {
        providers: deps.providers,
        provider: request.ai_provider,
        keys: &keys,
        on_error: AppError::Analysis,
    };

    let match_report = runner
        .score(
            Stage::Match,
            &fill(
                MATCH_PROMPT,
                &[
                    ("{resume}", resume.as_str()),
                    ("{job_description}", job_description.as_str()),
                ],
            ),
        )
        .await?;

    let role_fit = runner
        .score(
            Stage::RoleFit,
            &fill(
                ROLE_FIT_PROMPT,
                &[
                    ("{resume}", resume.as_str()),
                    ("{job_description}", job_description.as_str()),
                ],
            ),
        )
        .await?;

    let optimization = runner
        .score(
            Stage::OptimizationPotential,
            &fill(
                OPTIMIZATION_POTENTIAL_PROMPT,
                &[
                    ("{resume}", resume.as_str()),
                    ("{job_description}", job_description.as_str()),
                    ("{match_score}", match_report.score.to_string().as_str()),
                    ("{no_fabrication}", NO_FABRICATION_INSTRUCTION),
                ],
            ),
        )
        .await?;

    let company_name = company_name(&runner, job_description.as_str()).await?;
    info!("Company: {company_name}");

    let hiring_query = format!("{company_name} hiring");
    let growth_query = format!("{company_name} company growth");
    let openings_query = format!("{company_name} job openings");
    let (hiring, growth, openings) = tokio::try_join!(
        deps.search.search(&hiring_query),
        deps.search.search(&growth_query),
        deps.search.search(&openings_query),
    )
    .map_err(|e| AppError::Analysis(format!("Web lookup failed: {e}")))?;

    let selection = runner
        .score(
            Stage::SelectionProbability,
            &fill(
                SELECTION_PROBABILITY_PROMPT,
                &[
                    ("{resume}", resume.as_str()),
                    ("{job_description}", job_description.as_str()),
                    ("{company_name}", company_name.as_str()),
                    ("{hiring_results}", hiring.to_prompt_text().as_str()),
                    ("{growth_results}", growth.to_prompt_text().as_str()),
                    ("{openings_results}", openings.to_prompt_text().as_str()),
                    ("{match_score}", match_report.score.to_string().as_str()),
                    ("{role_fit_score}", role_fit.score.to_string().as_str()),
                    ("{optimization_score}", optimization.score.to_string().as_str()),
                ],
            ),
        )
        .await?;

    let result = AnalysisResult::from_reports(
        company_name,
        [match_report, role_fit, optimization, selection],
    );
    info!("Analysis complete: average {}", result.summary.average_score);
    Ok(result)
}

async fn company_name(
    runner: &StageRunner<'_>,
    job_description: &str,
) -> Result<String, AppError> {
    let prompt = COMPANY_NAME_PROMPT.replace(
        "{job_description}",
        truncate_chars(job_description, COMPANY_CONTEXT_CHARS),
    );
    let name = runner.run(Stage::CompanyName, &prompt).await?;
    let name = name.trim();
    Ok(if name.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        name.to_string()
    })
}

/// Fills `{placeholder}` slots, then the `{score_instruction}` slot.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (placeholder, value) in values {
        out = out.replace(placeholder, value);
    }
    out.replace("{score_instruction}", SCORE_LINE_INSTRUCTION)
}

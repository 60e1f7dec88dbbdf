use serde::{Deserialize, Serialize};

use crate::analysis::keys::ApiKeys;
use crate::llm_client::ProviderKind;

/// Request body shared by `/api/analyze-resume` and `/api/optimize-resume`.
///
/// Keys for both provider families may be sent; only the three belonging to
/// `ai_provider` are used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub job_url: Option<String>,
    pub manual_job_description: Option<String>,
    #[serde(default)]
    pub ai_provider: ProviderKind,
    pub gemini_key1: Option<String>,
    pub gemini_key2: Option<String>,
    pub gemini_key3: Option<String>,
    pub chatgpt_key1: Option<String>,
    pub chatgpt_key2: Option<String>,
    pub chatgpt_key3: Option<String>,
}

impl AnalysisRequest {
    /// The key slots of the selected provider family.
    pub fn keys(&self) -> ApiKeys {
        match self.ai_provider {
            ProviderKind::Gemini => ApiKeys::new(
                self.gemini_key1.clone(),
                self.gemini_key2.clone(),
                self.gemini_key3.clone(),
            ),
            ProviderKind::Chatgpt => ApiKeys::new(
                self.chatgpt_key1.clone(),
                self.chatgpt_key2.clone(),
                self.chatgpt_key3.clone(),
            ),
        }
    }

    pub fn job_url(&self) -> Option<&str> {
        non_blank(self.job_url.as_deref())
    }

    pub fn manual_description(&self) -> Option<&str> {
        non_blank(self.manual_job_description.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Output of one score stage. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub score: u32,
    pub raw_text: String,
}

impl ScoreReport {
    pub fn from_response(raw_text: String) -> Self {
        Self {
            score: crate::analysis::extraction::extract_score(&raw_text),
            raw_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(rename = "resumeJDMatch")]
    pub resume_jd_match: u32,
    pub experience_role_fit: u32,
    pub post_optimization_potential: u32,
    pub selection_probability: u32,
}

impl Scores {
    pub fn as_array(&self) -> [u32; 4] {
        [
            self.resume_jd_match,
            self.experience_role_fit,
            self.post_optimization_potential,
            self.selection_probability,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedReports {
    #[serde(rename = "resumeJDMatch")]
    pub resume_jd_match: String,
    pub experience_role_fit: String,
    pub post_optimization_potential: String,
    pub selection_probability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average_score: u32,
    pub recommendation: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// The sole artifact returned to the caller of the analysis flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub company_name: String,
    pub scores: Scores,
    pub detailed_reports: DetailedReports,
    pub summary: Summary,
}

impl AnalysisResult {
    pub fn from_reports(
        company_name: String,
        [match_report, role_fit, optimization, selection]: [ScoreReport; 4],
    ) -> Self {
        let scores = Scores {
            resume_jd_match: match_report.score,
            experience_role_fit: role_fit.score,
            post_optimization_potential: optimization.score,
            selection_probability: selection.score,
        };
        let summary = crate::analysis::aggregator::summarize(scores.as_array());
        Self {
            company_name,
            scores,
            detailed_reports: DetailedReports {
                resume_jd_match: match_report.raw_text,
                experience_role_fit: role_fit.raw_text,
                post_optimization_potential: optimization.raw_text,
                selection_probability: selection.raw_text,
            },
            summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

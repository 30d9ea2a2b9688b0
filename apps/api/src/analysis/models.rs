//! Wire types shared by the analysis relay and its clients.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body of `POST /api/v1/analyze-job-readiness`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

/// Structured readiness verdict relayed from the model.
///
/// Score range and label are what the model was asked for, not enforced here:
/// whatever parses is relayed unchanged. `score` keeps the model's own number
/// (`7`, `7.5` and `8.0` all round-trip as written).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: Number, // 0 – 10
    pub label: String,
    pub explanation: String,
    pub skill_gaps: Vec<String>,
    pub recommendation: String,
}

impl AnalysisResult {
    /// The payload returned when the model's reply cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            score: Number::from(5u8),
            label: MatchLabel::Moderate.as_str().to_string(),
            explanation: "Unable to perform detailed analysis. Please try again.".to_string(),
            skill_gaps: vec!["Analysis error - please retry".to_string()],
            recommendation: "Ensure your resume clearly highlights relevant skills and experience."
                .to_string(),
        }
    }

    /// The score as a float, for thresholds and display tiers.
    pub fn score_value(&self) -> f64 {
        self.score.as_f64().unwrap_or(0.0)
    }
}

/// The three labels the model is instructed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLabel {
    Strong,
    Moderate,
    Weak,
}

impl MatchLabel {
    /// 8–10 strong, 5–7 moderate, 0–4 weak.
    /// Fractional scores fall into the band below the next whole number.
    pub fn for_score(score: f64) -> Self {
        if score >= 8.0 {
            MatchLabel::Strong
        } else if score >= 5.0 {
            MatchLabel::Moderate
        } else {
            MatchLabel::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchLabel::Strong => "Strong Match",
            MatchLabel::Moderate => "Moderate Match",
            MatchLabel::Weak => "Weak Match",
        }
    }
}

//! Axum route handlers for the analysis relay.

use axum::{extract::State, Json};
use tracing::Instrument;
use uuid::Uuid;

use crate::analysis::analyzer::analyze_readiness;
use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze-job-readiness
///
/// Scores a resume against a job description. Returns the model's structured
/// verdict, or the fallback verdict when the reply is not parseable.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }

    let span = tracing::info_span!("analyze", request_id = %Uuid::new_v4());
    let result = analyze_readiness(&request, &state.llm)
        .instrument(span)
        .await?;

    Ok(Json(result))
}

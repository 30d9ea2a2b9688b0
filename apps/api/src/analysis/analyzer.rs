//! Readiness analyzer — prompt assembly, the gateway call, and tolerant reply parsing.
//!
//! The model is asked for JSON but answers in free text. The first embedded object
//! that parses as an `AnalysisResult` wins; if there is none, the caller still gets
//! a well-formed result (`AnalysisResult::fallback`) rather than an error.

use tracing::{debug, info, warn};

use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::analysis::prompts::{ANALYSIS_INSTRUCTION, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{extract_json_object, LlmClient};

/// Concatenates both documents into the user prompt.
pub fn build_user_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Job Description:\n{}\n\nResume:\n{}\n\n{} {}",
        request.job_description, request.resume, ANALYSIS_INSTRUCTION, JSON_ONLY_INSTRUCTION
    )
}

/// Parses the model's reply, substituting the fallback result when no usable
/// JSON object is found.
pub fn parse_analysis(content: &str) -> AnalysisResult {
    match extract_json_object::<AnalysisResult>(content) {
        Some(result) => result,
        None => {
            warn!(
                "Failed to parse AI response ({} chars), returning fallback result",
                content.len()
            );
            AnalysisResult::fallback()
        }
    }
}

/// Runs one analysis against the gateway. Upstream failures propagate;
/// malformed model output does not.
pub async fn analyze_readiness(
    request: &AnalysisRequest,
    llm: &LlmClient,
) -> Result<AnalysisResult, AppError> {
    info!("Analyzing job readiness...");

    let prompt = build_user_prompt(request);
    let content = llm.complete(ANALYSIS_SYSTEM, &prompt).await?;
    debug!("AI response: {content}");

    let result = parse_analysis(&content);
    info!(
        "Analysis complete: score={} label={} gaps={}",
        result.score,
        result.label,
        result.skill_gaps.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            score: Number::from(7u8),
            label: "Strong Match".to_string(),
            explanation: "x".to_string(),
            skill_gaps: vec![],
            recommendation: "y".to_string(),
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            job_description: "Senior Rust Engineer. Tokio, Kubernetes.".to_string(),
            resume: "Five years writing Rust services.".to_string(),
        }
    }

    #[test]
    fn test_user_prompt_contains_both_documents_in_order() {
        let prompt = build_user_prompt(&request());
        let jd_at = prompt.find("Senior Rust Engineer").unwrap();
        let resume_at = prompt.find("Five years writing Rust").unwrap();
        assert!(prompt.starts_with("Job Description:\n"));
        assert!(jd_at < prompt.find("Resume:\n").unwrap());
        assert!(resume_at > jd_at);
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_user_prompt_does_not_expand_placeholders_in_input() {
        let prompt = build_user_prompt(&AnalysisRequest {
            job_description: "{resume}".to_string(),
            resume: "plain".to_string(),
        });
        assert!(prompt.contains("Job Description:\n{resume}\n"));
    }

    #[test]
    fn test_system_prompt_states_rubric_weights() {
        assert!(ANALYSIS_SYSTEM.contains("Skills Match: 50%"));
        assert!(ANALYSIS_SYSTEM.contains("Tools/Technologies Match: 30%"));
        assert!(ANALYSIS_SYSTEM.contains("Experience Match: 20%"));
        assert!(ANALYSIS_SYSTEM.contains("\"skillGaps\""));
    }

    #[test]
    fn test_parse_embedded_object_unchanged() {
        let content = "prefix text {\"score\":7,\"label\":\"Strong Match\",\"explanation\":\"x\",\"skillGaps\":[],\"recommendation\":\"y\"} suffix";
        assert_eq!(parse_analysis(content), sample_result());
    }

    #[test]
    fn test_parse_plain_text_falls_back() {
        assert_eq!(
            parse_analysis("I cannot analyze this"),
            AnalysisResult::fallback()
        );
    }

    #[test]
    fn test_parse_fractional_scores_are_relayed_not_replaced() {
        for raw in ["7.5", "8.0"] {
            let content = format!(
                "Result: {{\"score\":{raw},\"label\":\"Strong Match\",\"explanation\":\"x\",\"skillGaps\":[\"Go\"],\"recommendation\":\"y\"}}"
            );
            let result = parse_analysis(&content);
            assert_ne!(result, AnalysisResult::fallback());
            assert_eq!(result.score.to_string(), raw);
            assert_eq!(result.label, "Strong Match");
            assert_eq!(result.skill_gaps, vec!["Go"]);
        }
    }

    #[test]
    fn test_parse_wrong_shape_falls_back() {
        let content = "{\"score\": \"high\", \"label\": \"Strong Match\"}";
        assert_eq!(parse_analysis(content), AnalysisResult::fallback());
    }

    #[test]
    fn test_parse_embedded_result_survives_noisy_surroundings() {
        let embedded = serde_json::to_string(&AnalysisResult {
            score: Number::from(3u8),
            label: "Weak Match".to_string(),
            explanation: "Missing {core} tools".to_string(),
            skill_gaps: vec!["Kubernetes".to_string(), "gRPC".to_string()],
            recommendation: "Ship a small gRPC service.".to_string(),
        })
        .unwrap();
        let expected: AnalysisResult = serde_json::from_str(&embedded).unwrap();

        for (before, after) in [
            ("", ""),
            ("Here you go:\n```json\n", "\n```"),
            ("{ not json at all } then ", " {trailing}"),
            ("}}{{", "}"),
        ] {
            let content = format!("{before}{embedded}{after}");
            assert_eq!(parse_analysis(&content), expected, "content: {content}");
        }
    }

    #[tokio::test]
    async fn test_analyze_readiness_returns_fallback_on_prose_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "I cannot analyze this" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let llm = LlmClient::new("k".to_string(), server.uri());
        let result = analyze_readiness(&request(), &llm).await.unwrap();
        assert_eq!(result, AnalysisResult::fallback());
    }

    #[tokio::test]
    async fn test_analyze_readiness_propagates_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let llm = LlmClient::new("k".to_string(), server.uri());
        let err = analyze_readiness(&request(), &llm).await.unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
    }
}

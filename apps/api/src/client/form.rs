//! Analysis form controller.
//!
//! Two text inputs, one in-flight request at most, and either the form or the
//! result on screen. Validation happens here, before any network call.

use tracing::error;

use crate::analysis::models::{AnalysisRequest, AnalysisResult, MatchLabel};
use crate::client::relay::RelayClient;
use crate::client::{InFlight, Notification};

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both job description and resume";
pub const ANALYSIS_SUCCESS_MESSAGE: &str = "Analysis complete!";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze. Please try again.";

/// What the page currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Form,
    Result(&'a AnalysisResult),
}

pub struct FormController<C: RelayClient> {
    relay: C,
    job_description: String,
    resume: String,
    is_analyzing: bool,
    result: Option<AnalysisResult>,
    notifications: Vec<Notification>,
}

impl<C: RelayClient> FormController<C> {
    pub fn new(relay: C) -> Self {
        Self {
            relay,
            job_description: String::new(),
            resume: String::new(),
            is_analyzing: false,
            result: None,
            notifications: Vec::new(),
        }
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn set_resume(&mut self, text: impl Into<String>) {
        self.resume = text.into();
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn resume(&self) -> &str {
        &self.resume
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn view(&self) -> View<'_> {
        match &self.result {
            Some(result) => View::Result(result),
            None => View::Form,
        }
    }

    /// Drains queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Validates the inputs and, if both are present, runs one analysis.
    /// On failure the form and its inputs are left as they were.
    pub async fn submit(&mut self) {
        if self.is_analyzing {
            return;
        }

        if self.job_description.trim().is_empty() || self.resume.trim().is_empty() {
            self.notifications
                .push(Notification::Error(MISSING_INPUT_MESSAGE.to_string()));
            return;
        }

        let request = AnalysisRequest {
            job_description: self.job_description.clone(),
            resume: self.resume.clone(),
        };

        let in_flight = InFlight::start(&mut self.is_analyzing);
        let outcome = self.relay.analyze(&request).await;
        drop(in_flight);

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.notifications
                    .push(Notification::Success(ANALYSIS_SUCCESS_MESSAGE.to_string()));
            }
            Err(e) => {
                error!("Analysis error: {e}");
                self.notifications
                    .push(Notification::Error(ANALYSIS_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Clears the result and both inputs, back to an empty form.
    pub fn reset(&mut self) {
        self.result = None;
        self.job_description.clear();
        self.resume.clear();
    }
}

/// Plain-text rendering of a result, section by section as the results page lays it out.
pub fn render_result(result: &AnalysisResult) -> String {
    let marker = match MatchLabel::for_score(result.score_value()) {
        MatchLabel::Strong => "[+]",
        MatchLabel::Moderate => "[~]",
        MatchLabel::Weak => "[-]",
    };

    let gaps = if result.skill_gaps.is_empty() {
        "Great! No significant skill gaps identified.".to_string()
    } else {
        result
            .skill_gaps
            .iter()
            .map(|gap| format!("  - {gap}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{marker} Match Score: {score}/10\n{label}\n\n\
         Why This Score\n{explanation}\n\n\
         Skill Gaps Identified\n{gaps}\n\n\
         Actionable Tip\n{recommendation}",
        score = result.score,
        label = result.label,
        explanation = result.explanation,
        recommendation = result.recommendation,
    )
}

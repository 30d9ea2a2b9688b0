//! Career assistant chat panel state.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::chat::prompts::CAREER_ASSISTANT_GREETING;
use crate::client::relay::RelayClient;
use crate::client::{InFlight, Notification};

pub const CHAT_APOLOGY: &str =
    "I apologize, but I'm having trouble responding right now. Please try again.";
pub const CHAT_FAILED_MESSAGE: &str = "Failed to get response. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One bubble in the transcript. Display only; never sent back upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

pub struct ChatSession<C: RelayClient> {
    relay: C,
    messages: Vec<ChatMessage>,
    is_loading: bool,
    notifications: Vec<Notification>,
}

impl<C: RelayClient> ChatSession<C> {
    pub fn new(relay: C) -> Self {
        Self {
            relay,
            messages: vec![ChatMessage::assistant(CAREER_ASSISTANT_GREETING)],
            is_loading: false,
            notifications: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Sends one message. Blank input, or a send while another is in flight, does nothing.
    pub async fn send(&mut self, input: &str) {
        let message = input.trim();
        if message.is_empty() || self.is_loading {
            return;
        }

        self.messages.push(ChatMessage::user(message));
        let in_flight = InFlight::start(&mut self.is_loading);
        let outcome = self.relay.chat(message).await;
        drop(in_flight);

        match outcome {
            Ok(reply) => self.messages.push(ChatMessage::assistant(reply)),
            Err(e) => {
                error!("Chat error: {e}");
                self.notifications
                    .push(Notification::Error(CHAT_FAILED_MESSAGE.to_string()));
                self.messages.push(ChatMessage::assistant(CHAT_APOLOGY));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{AnalysisRequest, AnalysisResult};
    use crate::client::relay::ClientError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct EchoRelay {
        calls: Arc<AtomicUsize>,
        rate_limited: bool,
        stall: Arc<AtomicBool>,
    }

    #[async_trait]
    impl RelayClient for EchoRelay {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
            unreachable!("chat never analyzes")
        }

        async fn chat(&self, message: &str) -> Result<String, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.stall.load(Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            if self.rate_limited {
                Err(ClientError::RateLimited("slow down".to_string()))
            } else {
                Ok(format!("echo: {message}"))
            }
        }
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let session = ChatSession::new(EchoRelay::default());
        assert_eq!(
            session.messages(),
            &[ChatMessage::assistant(CAREER_ASSISTANT_GREETING)]
        );
    }

    #[tokio::test]
    async fn test_send_appends_user_then_reply() {
        let mut session = ChatSession::new(EchoRelay::default());

        session.send("  Should I learn Go?  ").await;

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], ChatMessage::user("Should I learn Go?"));
        assert_eq!(messages[2], ChatMessage::assistant("echo: Should I learn Go?"));
        assert!(!session.is_loading());
        assert!(session.take_notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_send_does_not_leave_session_loading() {
        let relay = EchoRelay::default();
        relay.stall.store(true, Ordering::SeqCst);
        let mut session = ChatSession::new(relay.clone());

        let timed_out = tokio::time::timeout(Duration::from_millis(20), session.send("first")).await;
        assert!(timed_out.is_err());
        assert!(!session.is_loading());

        relay.stall.store(false, Ordering::SeqCst);
        session.send("second").await;

        assert_eq!(relay.calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            session.messages().last(),
            Some(&ChatMessage::assistant("echo: second"))
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let relay = EchoRelay::default();
        let mut session = ChatSession::new(relay.clone());

        session.send("   ").await;

        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_appends_apology_and_notifies() {
        let mut session = ChatSession::new(EchoRelay {
            rate_limited: true,
            ..EchoRelay::default()
        });

        session.send("hello").await;

        assert_eq!(
            session.messages().last(),
            Some(&ChatMessage::assistant(CHAT_APOLOGY))
        );
        assert_eq!(
            session.take_notifications(),
            vec![Notification::Error(CHAT_FAILED_MESSAGE.to_string())]
        );
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let value = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(value["role"], "user");
    }
}

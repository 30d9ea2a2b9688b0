//! Client-side controllers for the two relays.
//!
//! These are the state machines behind the analysis form and the chat panel,
//! kept free of any rendering toolkit: views are plain enums, notifications are
//! queued values the host drains and displays however it likes.

pub mod chat;
pub mod form;
pub mod relay;

pub use chat::ChatSession;
pub use form::{render_result, FormController, View};
pub use relay::{ClientError, HttpRelayClient, RelayClient};

/// A transient message for the user (a toast in the browser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Holds a controller's loading flag up for as long as it lives.
///
/// The flag drops back to `false` even when the awaiting future is cancelled
/// (a host timeout or `select!`), so a controller can never stay busy forever.
pub(crate) struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    pub(crate) fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

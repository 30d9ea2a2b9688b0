//! Career Compass: job readiness analysis and career chat, relayed to a hosted model.

pub mod analysis;
pub mod chat;
pub mod client;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;

// Job readiness analysis relay.
// Builds the rubric prompt, calls the gateway once, and best-effort parses the reply.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;

use axum::{extract::State, Json};

use crate::chat::{ask_career_assistant, ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/career-assistant
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let response = ask_career_assistant(message, &state.llm).await?;
    Ok(Json(ChatResponse { response }))
}

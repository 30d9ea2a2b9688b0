pub mod health;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::analysis::handlers as analysis;
use crate::chat::handlers as chat;
use crate::state::AppState;

/// Bare OPTIONS requests (no preflight headers) still get an empty 200.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Browser clients call the relays from any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze-job-readiness",
            post(analysis::handle_analyze).options(preflight),
        )
        .route(
            "/api/v1/career-assistant",
            post(chat::handle_chat).options(preflight),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

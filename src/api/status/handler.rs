// Start of file: /src/api/status/handler.rs

use serde_json::json;
use axum::{http::StatusCode, extract::State};
use tracing::{instrument, info};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

// Returns API status and health information
#[instrument(skip(state))]
pub async fn status_handler(
    State(state): State<AppState>,
) -> HandlerResponse {
    info!("Status endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "environment": state.environment.environment,
            "ncbi_api_key_configured": state.citations.has_api_key()
        }))
        .message("API is running successfully")
}

// End of file: /src/api/status/handler.rs

// Landing page used to verify a fresh deployment

use serde_json::json;
use axum::http::StatusCode;
use tracing::{instrument, info};

use crate::utils::response_handler::HandlerResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to the FatPlants API";

/// Returns the welcome message shown at http://localhost:5004/
#[instrument]
pub async fn welcome_handler() -> HandlerResponse {
    info!("Welcome endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .data(json!({ "message": WELCOME_MESSAGE }))
        .message("Service is up and running")
}

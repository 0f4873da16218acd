// Health check route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the health endpoint
pub fn status_routes() -> Router<AppState> {
    Router::new().route("/status", get(handler::status_handler))
}

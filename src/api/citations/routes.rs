// Literature route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with both literature endpoints
pub fn citation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/retrieve_literature", get(handler::retrieve_literature_handler))
        .route("/retrieve-citations", post(handler::retrieve_citations_handler))
}

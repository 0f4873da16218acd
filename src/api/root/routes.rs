use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(handler::welcome_handler))
}

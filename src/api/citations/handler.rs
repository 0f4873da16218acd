// Literature endpoints backed by the citation retrieval service

use serde::Deserialize;
use serde_json::json;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{instrument, info, warn};

use crate::citation::service::{validate_num_citations, DEFAULT_NUM_CITATIONS};
use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// Query string of `GET /api/retrieve_literature` and body of `POST /retrieve-citations`
#[derive(Debug, Deserialize)]
pub struct CitationRequest {
    pub query: String,
    #[serde(default = "default_num_citations")]
    pub num_citations: usize,
}

fn default_num_citations() -> usize {
    DEFAULT_NUM_CITATIONS
}

/// GET /api/retrieve_literature?query=...&num_citations=3
#[instrument(skip(state))]
pub async fn retrieve_literature_handler(
    State(state): State<AppState>,
    Query(request): Query<CitationRequest>,
) -> HandlerResponse {
    retrieve(&state, request).await
}

/// POST /retrieve-citations with a JSON body
#[instrument(skip(state))]
pub async fn retrieve_citations_handler(
    State(state): State<AppState>,
    Json(request): Json<CitationRequest>,
) -> HandlerResponse {
    retrieve(&state, request).await
}

async fn retrieve(state: &AppState, request: CitationRequest) -> HandlerResponse {
    let num_citations: usize = match validate_num_citations(request.num_citations) {
        Ok(n) => n,
        Err(e) => {
            warn!("Rejected citation request: {}", e);
            return HandlerResponse::new(StatusCode::BAD_REQUEST)
                .data(json!({ "error": "invalid_num_citations" }))
                .message(e.to_string());
        }
    };

    let citations: Vec<String> = state
        .citations
        .retrieve_and_rank_citations(&request.query, num_citations)
        .await;

    info!("Returning {} citation entries", citations.len());

    HandlerResponse::new(StatusCode::OK)
        .data(json!({ "citations": citations }))
        .message("Citations retrieved")
}

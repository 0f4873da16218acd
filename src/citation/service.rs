// Orchestrates entity extraction, PubMed search, ranking and formatting

use chrono::{Datelike, Utc};
use tracing::{error, info, instrument, warn};

use crate::citation::entities::extract_entities;
use crate::citation::error::{CitationError, Result};
use crate::citation::format::numbered;
use crate::citation::model::Citation;
use crate::citation::pubmed::PubMedClient;
use crate::citation::ranking::rank_citations;

pub const NO_CITATIONS_MESSAGE: &str = "Not able to scrape citations for this question.";
pub const DEFAULT_NUM_CITATIONS: usize = 3;
pub const MAX_NUM_CITATIONS: usize = 50;

// More candidates than requested are fetched so ranking has something to choose from.
const CANDIDATES_PER_CITATION: usize = 2;

/// Accepts citation counts in `1..=MAX_NUM_CITATIONS`.
pub fn validate_num_citations(num_citations: usize) -> Result<usize> {
    if (1..=MAX_NUM_CITATIONS).contains(&num_citations) {
        Ok(num_citations)
    } else {
        Err(CitationError::InvalidRequest {
            message: format!(
                "num_citations must be between 1 and {MAX_NUM_CITATIONS}, got {num_citations}"
            ),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CitationRetrievalService {
    client: PubMedClient,
}

impl CitationRetrievalService {
    pub fn new(client: PubMedClient) -> Self {
        Self { client }
    }

    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }

    /// Returns up to `num_citations` formatted citations for `query`, best first.
    ///
    /// When nothing can be found (no usable keywords, PubMed unreachable or
    /// empty result) the list holds a single explanatory message instead.
    #[instrument(skip(self))]
    pub async fn retrieve_and_rank_citations(&self, query: &str, num_citations: usize) -> Vec<String> {
        let search_term: String = extract_entities(query).join(" ");
        if search_term.trim().is_empty() {
            warn!("No entities extracted from query, cannot search for citations");
            return vec![NO_CITATIONS_MESSAGE.to_string()];
        }

        let candidates: usize = num_citations.saturating_mul(CANDIDATES_PER_CITATION);
        let raw_citations: Vec<Citation> = match self.client.search(&search_term, candidates).await {
            Ok(citations) => citations,
            Err(e) => {
                error!("PubMed search for '{}' failed: {}", search_term, e);
                Vec::new()
            }
        };

        if raw_citations.is_empty() {
            info!("No citations found for '{}'", search_term);
            return vec![NO_CITATIONS_MESSAGE.to_string()];
        }

        rank_citations(raw_citations, Utc::now().year())
            .iter()
            .take(num_citations)
            .enumerate()
            .map(|(index, citation)| numbered(index + 1, citation))
            .collect()
    }
}

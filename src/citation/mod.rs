// Citation retrieval: keyword extraction, PubMed lookup, ranking and formatting

pub mod entities;
pub mod error;
pub mod format;
pub mod model;
pub mod pubmed;
pub mod ranking;
pub mod service;

pub use error::{CitationError, Result};
pub use model::Citation;
pub use pubmed::PubMedClient;
pub use service::CitationRetrievalService;

// Library root for the FatPlants API: HTTP layer plus PubMed citation retrieval

pub mod api;
pub mod citation;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::citation::{CitationError, CitationRetrievalService, PubMedClient};
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;

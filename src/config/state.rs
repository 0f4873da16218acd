// Application state shared by every handler

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::citation::{CitationRetrievalService, PubMedClient};
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub citations: Arc<CitationRetrievalService>,
}

impl AppState {
    /// Wires the citation service from an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Result<Self> {
        let client: PubMedClient = PubMedClient::new(
            environment.ncbi_base_url.to_string(),
            environment.ncbi_api_key.clone(),
            Duration::from_secs(environment.ncbi_timeout_seconds),
        )
        .context("Failed to build PubMed HTTP client")?;

        Ok(Self {
            environment: Arc::new(environment),
            citations: Arc::new(CitationRetrievalService::new(client)),
        })
    }

    /// Loads the configuration from the process environment and builds the state
    pub fn from_env() -> Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Self::new(environment)
    }
}

// Start of file: /src/config/environment.rs

// * Environment configuration, parsed once at start-up.

use std::{borrow::Cow, collections::HashMap, path::Path};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

use crate::citation::pubmed::DEFAULT_ENTREZ_BASE_URL;
use crate::config::credentials::Credentials;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5004;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 30; // NCBI round trips are slow
const DEFAULT_NCBI_TIMEOUT: u64 = 10;
const DEFAULT_CONFIG_FILE: &str = "secrets/config.yaml";

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub ncbi_base_url: Cow<'static, str>,
    pub ncbi_timeout_seconds: u64,
    pub ncbi_api_key: Option<String>,
}

impl EnvironmentVariables {
    // * Loads the process environment.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars().collect();

        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit variable map, providing
    // * defaults if missing. NCBI_API_KEY wins over the credentials file.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        let config_file: &str = get_var("CONFIG_FILE").unwrap_or(DEFAULT_CONFIG_FILE);

        let ncbi_api_key: Option<String> = match get_var("NCBI_API_KEY").filter(|s| !s.trim().is_empty()) {
            Some(key) => Some(key.to_string()),
            None => Credentials::from_file(Path::new(config_file))?
                .and_then(|credentials| credentials.ncbi_api_key),
        };

        if ncbi_api_key.is_none() {
            warn!("No NCBI API key configured, literature searches will return no citations");
        }

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            ncbi_base_url: get_var("NCBI_BASE_URL")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_ENTREZ_BASE_URL)),

            ncbi_timeout_seconds: get_var("NCBI_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid NCBI_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_NCBI_TIMEOUT),

            ncbi_api_key,
        })
    }
}


// End of file: /src/config/environment.rs

// Start of file: /src/config/credentials.rs

// * Developer-supplied secrets, read from a YAML file kept in a gitignored
// * folder and mounted into the container.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

// Unknown keys are ignored so the same file can hold secrets for other services.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub ncbi_api_key: Option<String>,
}

impl Credentials {
    // * Returns Ok(None) when the file does not exist; a file that exists
    // * but cannot be read or parsed is an error.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            warn!("Credentials file {} not found, continuing without it", path.display());
            return Ok(None);
        }

        let raw: String = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;

        // An empty YAML document deserializes to nothing at all.
        if raw.trim().is_empty() {
            return Ok(Some(Self::default()));
        }

        let credentials: Credentials = serde_yaml::from_str(&raw)
            .with_context(|| format!("Invalid YAML in credentials file {}", path.display()))?;

        info!("Loaded credentials from {}", path.display());
        Ok(Some(credentials))
    }
}


// End of file: /src/config/credentials.rs

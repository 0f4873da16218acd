use thiserror::Error;

#[derive(Error, Debug)]
pub enum CitationError {
    #[error("NCBI API key is not configured")]
    MissingApiKey,

    #[error("NCBI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ESearch response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("EFetch response is not valid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

pub type Result<T> = std::result::Result<T, CitationError>;

// Start of file: /src/citation/model.rs

use chrono::NaiveDate;

// Placeholder for any bibliographic field PubMed did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single PubMed article reduced to the fields used for ranking and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub publication_date: Option<NaiveDate>,
    pub publication_types: Vec<String>,
}

impl Default for Citation {
    fn default() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            authors: NOT_AVAILABLE.to_string(),
            journal: NOT_AVAILABLE.to_string(),
            publication_date: None,
            publication_types: Vec::new(),
        }
    }
}

// End of file: /src/citation/model.rs

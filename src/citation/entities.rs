// Start of file: /src/citation/entities.rs

// * Turns a free-text question into the keywords sent to PubMed.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Upper-case alphanumeric tokens, optionally joined by '-' or '_' (APOE, MAPT-STX6).
static GENE_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z0-9]+(?:[-_][A-Z0-9]+)*\b").expect("valid gene symbol regex"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "and", "or", "in", "on", "with", "for", "of", "what",
    "which", "how", "when", "where", "why", "role", "effect", "about", "tell", "show", "me",
    "genes", "proteins", "pathways",
];

const INTERACTION_KEYWORDS: &[&str] = &["interaction", "interact"];

/// Extracts the biomedical entities and keywords of `query`.
///
/// Gene or protein symbols come first (upper-cased), then interaction
/// keywords, then the remaining meaningful words in lower case. Every entity
/// appears once, in the order it was first found.
pub fn extract_entities(query: &str) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();

    for symbol in GENE_SYMBOL.find_iter(query).map(|m| m.as_str()) {
        if symbol.chars().count() > 1 {
            push_unique(&mut entities, symbol.to_uppercase());
        }
    }

    let lowered: String = query.to_lowercase();

    for keyword in INTERACTION_KEYWORDS {
        if lowered.contains(keyword) {
            push_unique(&mut entities, (*keyword).to_string());
        }
    }

    for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
        let length: usize = word.chars().count();
        if STOP_WORDS.contains(&word) || length <= 2 {
            continue;
        }

        // Short words already captured as a symbol would only duplicate it.
        let captured_as_symbol: bool = entities.contains(&word.to_uppercase());
        if !captured_as_symbol || length > 3 {
            push_unique(&mut entities, word.to_string());
        }
    }

    debug!("Extracted entities: {:?}", entities);
    entities
}

fn push_unique(entities: &mut Vec<String>, entity: String) {
    if !entities.contains(&entity) {
        entities.push(entity);
    }
}


// End of file: /src/citation/entities.rs

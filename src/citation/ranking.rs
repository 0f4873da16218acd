// Start of file: /src/citation/ranking.rs

// * Orders citations by publication type first and recency second.

use std::cmp::Reverse;

use chrono::Datelike;

use crate::citation::model::Citation;

const TYPE_WEIGHT: i64 = 100;
const RECENCY_WINDOW_YEARS: i64 = 10;

/// Priority of a PubMed publication type; unknown types count as 0.
pub fn type_priority(publication_type: &str) -> i64 {
    match publication_type {
        "Review" => 3,
        "Journal Article" | "Clinical Trial" | "Meta-Analysis" | "Guideline" => 2,
        "Case Reports" => 1,
        _ => 0,
    }
}

/// Score = 100 x best type priority + years of recency within a ten-year window.
pub fn rank_score(citation: &Citation, current_year: i32) -> i64 {
    let best_type: i64 = citation
        .publication_types
        .iter()
        .map(|t| type_priority(t))
        .max()
        .unwrap_or(0);

    let recency: i64 = citation
        .publication_date
        .map(|date| {
            let years_ago: i64 = i64::from(current_year) - i64::from(date.year());
            (RECENCY_WINDOW_YEARS - years_ago).max(0)
        })
        .unwrap_or(0);

    best_type * TYPE_WEIGHT + recency
}

/// Sorts by descending score. Equal scores keep their PubMed order.
pub fn rank_citations(mut citations: Vec<Citation>, current_year: i32) -> Vec<Citation> {
    citations.sort_by_key(|citation| Reverse(rank_score(citation, current_year)));
    tracing::debug!("Ranked {} citations", citations.len());
    citations
}


// End of file: /src/citation/ranking.rs

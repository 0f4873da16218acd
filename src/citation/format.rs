// Markdown rendering of a ranked citation

use url::form_urlencoded;

use crate::citation::model::Citation;

const SEARCH_URL: &str = "https://www.google.com/search";
const LUCKY_SUFFIX: &str = "&btnI=I%27m%20Feeling%20Lucky";

/// "I'm Feeling Lucky" search link for a paper title.
pub fn search_link(title: &str) -> String {
    let encoded_title: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("{SEARCH_URL}?q={encoded_title}{LUCKY_SUFFIX}")
}

pub fn format_citation(citation: &Citation) -> String {
    format!(
        "Title of the paper: {}\nAuthors: {}\nJournal: {}\n[Link]({})\n",
        citation.title,
        citation.authors,
        citation.journal,
        search_link(&citation.title),
    )
}

/// Prefixes a formatted citation with its 1-based position.
pub fn numbered(position: usize, citation: &Citation) -> String {
    format!("--- Citation {} ---\n{}", position, format_citation(citation))
}

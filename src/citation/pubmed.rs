// Client for the NCBI Entrez E-utilities (ESearch + EFetch) restricted to PubMed

use std::time::Duration;

use chrono::NaiveDate;
use roxmltree::{Document, Node, ParsingOptions};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use crate::citation::error::{CitationError, Result};
use crate::citation::model::{Citation, NOT_AVAILABLE};

pub const DEFAULT_ENTREZ_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

#[derive(Debug, Default, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// Thin PubMed client. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PubMedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PubMedClient {
    /// Builds a client against `base_url` whose requests give up after `timeout`.
    /// A blank `api_key` counts as no key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, utility: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), utility)
    }

    /// Searches PubMed for `term` and returns up to `max_results` parsed articles.
    ///
    /// A blank term returns nothing without touching the network. So does a
    /// search whose ESearch step finds no PubMed IDs.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str, max_results: usize) -> Result<Vec<Citation>> {
        if term.trim().is_empty() {
            warn!("Search term is empty, skipping PubMed search");
            return Ok(Vec::new());
        }

        let api_key: &str = match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                error!("NCBI API key is empty, cannot call PubMed");
                return Err(CitationError::MissingApiKey);
            }
        };

        let pubmed_ids: Vec<String> = self.search_ids(term, max_results, api_key).await?;
        if pubmed_ids.is_empty() {
            info!("No PubMed IDs found for '{}'", term);
            return Ok(Vec::new());
        }

        let citations: Vec<Citation> = self.fetch_articles(&pubmed_ids, api_key).await?;
        info!("Retrieved {} detailed citations", citations.len());
        Ok(citations)
    }

    async fn search_ids(&self, term: &str, max_results: usize, api_key: &str) -> Result<Vec<String>> {
        let retmax: String = max_results.to_string();
        let response: reqwest::Response = self.http
            .get(self.endpoint("esearch.fcgi"))
            .query(&[
                ("db", "pubmed"),
                ("term", term),
                ("retmax", retmax.as_str()),
                ("retmode", "json"),
                ("api_key", api_key),
            ])
            .send()
            .await?;

        debug!("ESearch {} -> {}", redacted_url(response.url()), response.status());
        let body: String = response.error_for_status()?.text().await?;

        let parsed: ESearchResponse = serde_json::from_str(&body)?;
        let ids: Vec<String> = parsed.esearchresult.idlist;
        debug!("Found {} PubMed IDs: {:?}", ids.len(), ids);
        Ok(ids)
    }

    async fn fetch_articles(&self, pubmed_ids: &[String], api_key: &str) -> Result<Vec<Citation>> {
        let ids: String = pubmed_ids.join(",");
        let response: reqwest::Response = self.http
            .get(self.endpoint("efetch.fcgi"))
            .query(&[
                ("db", "pubmed"),
                ("id", ids.as_str()),
                ("retmode", "xml"),
                ("api_key", api_key),
            ])
            .send()
            .await?;

        debug!("EFetch {} -> {}", redacted_url(response.url()), response.status());
        let body: String = response.error_for_status()?.text().await?;

        parse_articles(&body)
    }
}

// Request URL safe for logs: the api_key value is masked.
fn redacted_url(url: &reqwest::Url) -> String {
    let mut redacted: reqwest::Url = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value: String = if key == "api_key" { "REDACTED".to_string() } else { value.into_owned() };
            (key.into_owned(), value)
        })
        .collect();

    if pairs.is_empty() {
        redacted.set_query(None);
    } else {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

/// Parses an EFetch `PubmedArticleSet` document into citations, one per `PubmedArticle`.
pub fn parse_articles(xml: &str) -> Result<Vec<Citation>> {
    // EFetch documents carry a DOCTYPE declaration.
    let mut options: ParsingOptions = ParsingOptions::default();
    options.allow_dtd = true;
    let document: Document<'_> = Document::parse_with_options(xml, options)?;

    let citations: Vec<Citation> = document
        .descendants()
        .filter(|node| node.has_tag_name("PubmedArticle"))
        .map(parse_article)
        .collect();

    Ok(citations)
}

fn parse_article(article: Node<'_, '_>) -> Citation {
    let title: String = first_descendant(article, "ArticleTitle")
        .map(flattened_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let author_names: Vec<String> = find_under(article, "AuthorList", "Author")
        .filter_map(author_name)
        .collect();
    let authors: String = if author_names.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        author_names.join(", ")
    };

    let journal: String = find_under(article, "Journal", "Title")
        .next()
        .and_then(own_text)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let publication_date: Option<NaiveDate> = first_descendant(article, "PubDate")
        .and_then(parse_publication_date);

    let publication_types: Vec<String> = find_under(article, "PublicationTypeList", "PublicationType")
        .filter_map(own_text)
        .collect();

    debug!("Parsed article: title='{}', authors='{}', journal='{}'", title, authors, journal);

    Citation {
        title,
        authors,
        journal,
        publication_date,
        publication_types,
    }
}

// "LastName Initials", falling back to "LastName ForeName".
fn author_name(author: Node<'_, '_>) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(last_name) = child_text(author, "LastName") {
        parts.push(last_name);
    }
    if let Some(given) = child_text(author, "Initials").or_else(|| child_text(author, "ForeName")) {
        parts.push(given);
    }

    (!parts.is_empty()).then(|| parts.join(" "))
}

// Year-Month-Day with month and day defaulting to 01. Textual months such as
// "Jan" cannot be read numerically and fall back to January 1st of the year.
fn parse_publication_date(pub_date: Node<'_, '_>) -> Option<NaiveDate> {
    let year: i32 = child_text(pub_date, "Year")?.parse().ok()?;
    let month: Option<u32> = child_text(pub_date, "Month").map_or(Some(1), |m| m.parse().ok());
    let day: Option<u32> = child_text(pub_date, "Day").map_or(Some(1), |d| d.parse().ok());

    month
        .zip(day)
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
}

fn first_descendant<'a, 'input>(scope: Node<'a, 'input>, name: &'static str) -> Option<Node<'a, 'input>> {
    scope.descendants().find(|node| node.has_tag_name(name))
}

// Descendants named `name` whose direct parent is named `parent`.
fn find_under<'a, 'input>(
    scope: Node<'a, 'input>,
    parent: &'static str,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    scope.descendants().filter(move |node| {
        node.has_tag_name(name)
            && node.parent_element().is_some_and(|p| p.has_tag_name(parent))
    })
}

fn child_text(scope: Node<'_, '_>, name: &'static str) -> Option<String> {
    scope
        .children()
        .find(|node| node.has_tag_name(name))
        .and_then(own_text)
}

fn own_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

// Titles may contain inline markup (<i>, <sup>); keep all of their text.
fn flattened_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

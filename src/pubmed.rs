//! NCBI E-utilities API client.
//!
//! Provides PubMed search (ESearch) and batch summary lookup (ESummary).
//!
//! API details:
//! - ESearch: GET /esearch.fcgi?db=pubmed&term=...&retmode=json&retmax=N
//! - ESummary: GET /esummary.fcgi?db=pubmed&id=<comma-joined>&retmode=json
//! - ESummary accepts a bounded number of ids per request, so large id sets
//!   are chunked and the resulting maps merged.

use crate::error::{PubmedError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// E-utilities base URL
const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Maximum ids per ESummary request
const ESUMMARY_MAX_IDS: usize = 200;

/// One author entry from an ESummary record.
///
/// Every field defaults to empty so records with missing data deserialize
/// cleanly; an absent affiliation is an empty string by contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorEntry {
    /// Display name (e.g. "Smith J")
    #[serde(default)]
    pub name: String,
    /// Free-text affiliation, possibly empty
    #[serde(default)]
    pub affiliation: String,
}

/// One ESummary record for a PubMed identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperSummary {
    /// PubMed identifier as echoed by the server
    #[serde(default)]
    pub uid: String,
    /// Article title
    #[serde(default)]
    pub title: String,
    /// Publication date string (e.g. "2024 Mar 15")
    #[serde(default)]
    pub pubdate: String,
    /// Electronic location identifier (DOI/pii locator, not a contact address)
    #[serde(default)]
    pub elocationid: String,
    /// Author list in record order
    #[serde(default)]
    pub authors: Vec<AuthorEntry>,
}

// === E-utilities response types ===

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    #[serde(default)]
    esearchresult: EsearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EsummaryResponse {
    #[serde(default)]
    result: EsummaryResult,
}

/// The ESummary `result` object holds a `uids` bookkeeping list plus one
/// key per record; the flatten captures the per-id records.
#[derive(Debug, Default, Deserialize)]
struct EsummaryResult {
    #[serde(default)]
    #[allow(dead_code)]
    uids: Vec<String>,
    #[serde(flatten)]
    records: HashMap<String, PaperSummary>,
}

/// Client for the NCBI E-utilities endpoints.
pub struct PubmedClient {
    client: Client,
    base_url: String,
}

impl PubmedClient {
    /// Create a client against the production E-utilities endpoints.
    pub fn new() -> Result<Self> {
        Self::with_base_url(EUTILS_BASE)
    }

    /// Create a client against an alternate base URL (used by tests).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pubmed-papers/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search PubMed for identifiers matching a free-text query.
    ///
    /// Returns identifiers in the server's relevance order; this order is
    /// later reused as the row emission order. At most `retmax` identifiers
    /// are requested (one page, no further pagination).
    pub async fn search(&self, query: &str, retmax: u32) -> Result<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        let retmax = retmax.to_string();

        debug!(url = %url, "Sending ESearch request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("db", "pubmed"),
                ("term", query),
                ("retmode", "json"),
                ("retmax", retmax.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PubmedError::Api {
                code: status.as_u16() as i32,
                message: format!("ESearch error: {}", status),
            });
        }

        let body: EsearchResponse = response
            .json()
            .await
            .map_err(|e| PubmedError::Parse(format!("Failed to parse ESearch response: {}", e)))?;

        info!(count = body.esearchresult.idlist.len(), "ESearch complete");
        Ok(body.esearchresult.idlist)
    }

    /// Fetch summary records for a batch of identifiers.
    ///
    /// Identifiers the server omits from its response are simply absent from
    /// the returned map. An empty id slice returns an empty map without
    /// issuing a request.
    pub async fn fetch_summaries(&self, ids: &[String]) -> Result<HashMap<String, PaperSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let url = format!("{}/esummary.fcgi", self.base_url);
        let mut summaries = HashMap::new();

        for chunk in ids.chunks(ESUMMARY_MAX_IDS) {
            debug!(count = chunk.len(), "Fetching ESummary chunk");

            let joined = chunk.join(",");
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("db", "pubmed"),
                    ("id", joined.as_str()),
                    ("retmode", "json"),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(PubmedError::Api {
                    code: status.as_u16() as i32,
                    message: format!("ESummary error: {}", status),
                });
            }

            let body: EsummaryResponse = response.json().await.map_err(|e| {
                PubmedError::Parse(format!("Failed to parse ESummary response: {}", e))
            })?;

            summaries.extend(body.result.records);
        }

        info!(
            requested = ids.len(),
            returned = summaries.len(),
            "ESummary complete"
        );
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_esearch_response() {
        let json = r#"{
            "header": {"type": "esearch", "version": "0.3"},
            "esearchresult": {
                "count": "2",
                "retmax": "2",
                "idlist": ["39012345", "38987654"]
            }
        }"#;

        let body: EsearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.esearchresult.idlist, vec!["39012345", "38987654"]);
    }

    #[test]
    fn test_parse_esearch_empty_idlist() {
        let json = r#"{"esearchresult": {"count": "0", "idlist": []}}"#;
        let body: EsearchResponse = serde_json::from_str(json).unwrap();
        assert!(body.esearchresult.idlist.is_empty());
    }

    #[test]
    fn test_parse_esummary_excludes_uids_key() {
        let json = r#"{
            "result": {
                "uids": ["111", "222"],
                "111": {
                    "uid": "111",
                    "title": "A Study",
                    "pubdate": "2024 Jan",
                    "elocationid": "doi: 10.1000/xyz",
                    "authors": [{"name": "Smith J", "affiliation": "ABC Pharma"}]
                },
                "222": {
                    "uid": "222",
                    "title": "Another Study"
                }
            }
        }"#;

        let body: EsummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.result.records.len(), 2);

        let first = &body.result.records["111"];
        assert_eq!(first.title, "A Study");
        assert_eq!(first.authors[0].affiliation, "ABC Pharma");

        // Missing fields default to empty rather than failing deserialization
        let second = &body.result.records["222"];
        assert_eq!(second.pubdate, "");
        assert_eq!(second.elocationid, "");
        assert!(second.authors.is_empty());
    }

    #[test]
    fn test_author_missing_affiliation_defaults_empty() {
        let json = r#"{"name": "Doe A"}"#;
        let author: AuthorEntry = serde_json::from_str(json).unwrap();
        assert_eq!(author.name, "Doe A");
        assert_eq!(author.affiliation, "");
    }
}

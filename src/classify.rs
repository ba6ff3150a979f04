//! Author affiliation classification.
//!
//! Buckets each author of a summary record by matching their free-text
//! affiliation against fixed case-insensitive pattern sets:
//!
//! - academic: university, institute, college, lab
//! - company: pharma, biotech
//!
//! Authors whose affiliation matches no academic pattern are collected by
//! name as non-academic; authors matching a company pattern contribute their
//! full affiliation string. An empty affiliation matches neither set, so such
//! authors count as non-academic and not as company-affiliated.

use crate::pubmed::PaperSummary;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Separator used when joining collected names/affiliations
const LIST_SEPARATOR: &str = ", ";

static ACADEMIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|institute|college|lab").expect("academic pattern is valid")
});

static COMPANY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pharma|biotech").expect("company pattern is valid"));

/// One output row of the export table.
///
/// Serde renames carry the fixed CSV column names; the same names appear as
/// keys in the stdout JSON rendering. The "Corresponding Author Email" column
/// is populated from the record's elocationid field, which is a document
/// locator rather than a contact address (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

/// Classify one summary record into an output row.
///
/// Pure and deterministic; never fails. `id` is the identifier the record was
/// looked up under, and becomes the row's PubmedID. Author order from the
/// record is preserved in both collected columns.
pub fn classify(id: &str, paper: &PaperSummary) -> ClassifiedRow {
    let non_academic_authors = paper
        .authors
        .iter()
        .filter(|a| !ACADEMIC_PATTERN.is_match(&a.affiliation))
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);

    let company_affiliations = paper
        .authors
        .iter()
        .filter(|a| COMPANY_PATTERN.is_match(&a.affiliation))
        .map(|a| a.affiliation.as_str())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);

    ClassifiedRow {
        pubmed_id: id.to_string(),
        title: paper.title.clone(),
        publication_date: paper.pubdate.clone(),
        non_academic_authors,
        company_affiliations,
        corresponding_author_email: paper.elocationid.clone(),
    }
}

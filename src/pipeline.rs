//! Search-to-export orchestration.
//!
//! Wires the pipeline stages in sequence: search PubMed for identifiers,
//! fetch summary records in one batch, classify each record's author
//! affiliations, write the table. Data flows strictly forward; identifiers
//! missing from the summary response are dropped without error.

use crate::classify::{self, ClassifiedRow};
use crate::error::{PubmedError, Result};
use crate::pubmed::PubmedClient;
use crate::table;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One invocation's configuration.
///
/// Verbosity is an explicit field here rather than ambient logger state;
/// `main` reads it when initializing the subscriber.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Free-text PubMed search query
    pub query: String,
    /// Output CSV path; rows are rendered to stdout when absent
    pub output: Option<PathBuf>,
    /// Maximum identifiers requested from ESearch (one page)
    pub retmax: u32,
    /// Enable debug logging
    pub verbose: bool,
}

/// Run the full pipeline for one query.
///
/// All stage failures propagate to the caller; the binary logs them once and
/// exits non-zero without distinguishing which stage failed.
pub async fn run(client: &PubmedClient, config: &RunConfig) -> Result<()> {
    if config.query.trim().is_empty() {
        return Err(PubmedError::Validation(
            "query must not be empty".to_string(),
        ));
    }

    info!(query = %config.query, retmax = config.retmax, "Searching PubMed");
    let ids = client.search(&config.query, config.retmax).await?;
    debug!(ids = ?ids, "Fetched PubMed IDs");

    if ids.is_empty() {
        info!("No matching records");
        table::write_rows(&[], config.output.as_deref())?;
        return Ok(());
    }

    let summaries = client.fetch_summaries(&ids).await?;

    // Emit rows in search order, skipping ids the server omitted.
    let rows: Vec<ClassifiedRow> = ids
        .iter()
        .filter_map(|id| summaries.get(id).map(|paper| classify::classify(id, paper)))
        .collect();

    if rows.len() < ids.len() {
        warn!(
            missing = ids.len() - rows.len(),
            "Some identifiers had no summary record"
        );
    }

    table::write_rows(&rows, config.output.as_deref())?;
    info!(rows = rows.len(), "Export complete");
    Ok(())
}

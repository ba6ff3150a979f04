//! pubmed-papers - PubMed literature export with industry-affiliation flagging
//!
//! Searches PubMed via the NCBI E-utilities, flags non-academic and
//! company-affiliated authors by affiliation text, and exports a six-column
//! CSV table.
//!
//! ## Usage
//!
//! ```bash
//! pubmed-papers "cancer immunotherapy" --file results.csv
//! ```

use anyhow::Result;
use clap::Parser;
use pubmed_papers::{pipeline, pubmed::PubmedClient};
use std::path::PathBuf;
use tracing::{error, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// PubMed literature export with industry-affiliation flagging
#[derive(Parser)]
#[command(name = "pubmed-papers")]
#[command(version, about, long_about = None)]
struct Cli {
    /// PubMed search query
    query: String,

    /// Output CSV filename (prints rows to stdout when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of identifiers to request from the search
    #[arg(long, default_value_t = 100)]
    retmax: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pipeline::RunConfig {
        query: cli.query,
        output: cli.file,
        retmax: cli.retmax,
        verbose: cli.debug,
    };

    // Initialize logging
    let log_level = if config.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let client = PubmedClient::new()?;

    if let Err(e) = pipeline::run(&client, &config).await {
        error!(error = %e, "Export failed");
        std::process::exit(1);
    }

    Ok(())
}

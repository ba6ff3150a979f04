//! # pubmed-papers
//!
//! PubMed literature export with industry-affiliation flagging
//!
//! ## Modules
//!
//! - [`pubmed`] - NCBI E-utilities client (ESearch + ESummary)
//! - [`classify`] - Author affiliation classification
//! - [`table`] - CSV file / stdout rendering of classified rows
//! - [`pipeline`] - Search-to-export orchestration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubmed_papers::{pipeline, pubmed::PubmedClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubmedClient::new()?;
//!     let config = pipeline::RunConfig {
//!         query: "cancer immunotherapy".to_string(),
//!         output: None,
//!         retmax: 100,
//!         verbose: false,
//!     };
//!     pipeline::run(&client, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod error;
pub mod pipeline;
pub mod pubmed;
pub mod table;

pub use error::{PubmedError, Result};

//! CSV file and stdout rendering of classified rows.

use crate::classify::ClassifiedRow;
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Fixed column order of the export table
pub const HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Write rows to a CSV file, or render each row to stdout when no
/// destination is given.
///
/// The file path variant overwrites any existing content and always writes
/// the header record, so a zero-row table still yields a header-only file.
pub fn write_rows(rows: &[ClassifiedRow], destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => write_csv(rows, path),
        None => print_rows(rows),
    }
}

fn write_csv(rows: &[ClassifiedRow], path: &Path) -> Result<()> {
    // Header is written explicitly: serialize-derived headers would be
    // absent entirely when there are zero rows.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!(path = %path.display(), rows = rows.len(), "Saved CSV");
    Ok(())
}

/// Render each row as one JSON object per line.
fn print_rows(rows: &[ClassifiedRow]) -> Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

//! Lookup table resource on disk.

use std::path::Path;

use gendersort_analysis::LookupTable;
use gendersort_core::errors::{LoadReport, StorageError, TableError};

use crate::fs::{read_text, write_atomic};

/// Load a table resource. A missing file is fatal; malformed records are
/// skipped and listed in the report.
pub fn load_table(path: &Path) -> Result<LoadReport<LookupTable, TableError>, StorageError> {
    let text = read_text(path)?;
    let report = LookupTable::parse(&text);
    tracing::info!(
        path = %path.display(),
        records = report.data.len(),
        skipped = report.error_count(),
        "lookup table loaded"
    );
    Ok(report)
}

pub fn save_table(path: &Path, table: &LookupTable) -> Result<(), StorageError> {
    write_atomic(path, &table.to_tsv())?;
    tracing::info!(path = %path.display(), records = table.len(), "lookup table saved");
    Ok(())
}

//! Reconciled dataset artifact (CSV) read/write
//!
//! Nullable fields serialize as empty cells and come back as `None`; callers
//! that require a non-empty batch (the loader) check emptiness themselves.

use std::path::Path;

use anyhow::{Context, Result};

use crate::record::BookRecord;

/// Write the reconciled dataset, one row per record plus a header row.
pub fn write_dataset(path: &Path, records: &[BookRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create dataset: {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush dataset: {}", path.display()))?;
    Ok(())
}

/// Read the reconciled dataset back. May be empty; a malformed row is an
/// error for the whole read, not a skipped row.
pub fn read_dataset(path: &Path) -> Result<Vec<BookRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset: {}", path.display()))?;
    let mut records = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        let record: BookRecord =
            row.with_context(|| format!("malformed dataset row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

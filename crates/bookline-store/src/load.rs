//! Idempotent batch loader
//!
//! One transaction per batch: every row is upserted or none is. On conflict
//! only the mutable columns change; `ingested_at` always advances to the
//! current batch, the documented exception to strict idempotence.

use anyhow::{Context, Result};
use bookline_core::record::BookRecord;
use bookline_core::{Artifact, PipelineError};
use duckdb::{params, Connection};

use crate::schema;

/// Outcome of one committed batch load.
#[derive(Debug)]
pub struct LoadSummary {
    /// Rows upserted by this batch.
    pub rows_loaded: usize,
    /// Rows in the store after the commit.
    pub rows_in_store: i64,
}

/// Upsert one reconciled batch as a single atomic unit.
///
/// An empty batch is a fatal precondition failure: committing nothing would
/// look like success to the harness. A record without an identifier aborts
/// the whole batch; the transaction rolls back and the store keeps its
/// pre-batch state.
pub fn load(conn: &mut Connection, records: &[BookRecord]) -> Result<LoadSummary> {
    if records.is_empty() {
        return Err(PipelineError::EmptyBatch {
            artifact: Artifact::ReconciledDataset,
        }
        .into());
    }

    let tx = conn
        .transaction()
        .context("failed to begin batch transaction")?;
    {
        let mut stmt = tx
            .prepare(&schema::upsert_sql())
            .context("failed to prepare upsert")?;
        for (i, record) in records.iter().enumerate() {
            if record.isbn.is_empty() {
                // Dropping the transaction rolls the batch back.
                return Err(PipelineError::MissingIdentifier { row: i + 1 }.into());
            }
            stmt.execute(params![
                record.isbn,
                record.title,
                record.author,
                record.publisher,
                record.publication_date,
                record.description,
                record.rank,
                record.list_name,
                record.weeks_on_list,
                record.page_count,
                record.language,
                record.cover_image_url,
                record.buy_links,
                record.data_source,
                record.ingested_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            ])
            .with_context(|| format!("failed to upsert isbn {}", record.isbn))?;
        }
    }
    tx.commit().context("failed to commit batch")?;

    let rows_in_store = conn
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .context("failed to count store rows")?;

    log::info!(
        "loaded batch: {} rows upserted, {} rows in store",
        records.len(),
        rows_in_store
    );

    Ok(LoadSummary {
        rows_loaded: records.len(),
        rows_in_store,
    })
}

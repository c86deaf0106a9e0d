//! bookline-store: DuckDB-backed persisted store
//!
//! The store handle is opened per batch run and passed explicitly into the
//! loader and validator; there is no shared connection state across batches.

pub mod schema;

mod load;
mod validate;

pub use load::{load, LoadSummary};
pub use validate::{validate, ValidationReport};

use std::path::Path;

use anyhow::{Context, Result};
use duckdb::Connection;

/// Open (or create) the store database and ensure the schema exists.
pub fn open_store(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open store: {}", path.display()))?;
    conn.execute_batch(&format!(
        "{};\n{};",
        schema::create_table_sql(),
        schema::create_index_sql()
    ))
    .context("failed to create books schema")?;
    Ok(conn)
}

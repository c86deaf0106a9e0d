//! Post-load validation: metrics re-derived from the persisted store
//!
//! Every query is read-only; the report catches defects a prior partial load
//! or a concurrent writer could have introduced, independently of the
//! in-memory batch.

use std::fmt;

use anyhow::{Context, Result};
use duckdb::Connection;

/// Metrics derived from the `books` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub total_rows: i64,
    /// Rows missing any of isbn/title/author/publisher.
    pub missing_critical: i64,
    pub distinct_authors: i64,
    /// Identifiers appearing more than once. Defensive: the primary key
    /// should keep this at zero.
    pub duplicate_isbn_groups: i64,
    /// Identifiers that are not purely numeric or not 10/13 characters long.
    pub invalid_isbns: i64,
    /// Non-empty purchase-link fields that do not start with http(s)://.
    pub invalid_buy_links: i64,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Records: {}", self.total_rows)?;
        writeln!(f, "Missing Critical Fields: {}", self.missing_critical)?;
        writeln!(f, "Unique Authors: {}", self.distinct_authors)?;
        if self.duplicate_isbn_groups > 0 {
            writeln!(f, "Duplicate ISBNs Found: {}", self.duplicate_isbn_groups)?;
        } else {
            writeln!(f, "No duplicate ISBNs found.")?;
        }
        writeln!(f, "Invalid ISBNs: {}", self.invalid_isbns)?;
        write!(f, "Books with Invalid Buy Links: {}", self.invalid_buy_links)
    }
}

fn scalar(conn: &Connection, sql: &str) -> Result<i64> {
    conn.query_row(sql, [], |row| row.get(0))
        .with_context(|| format!("validation query failed: {sql}"))
}

/// Re-derive validation metrics by querying the store.
pub fn validate(conn: &Connection) -> Result<ValidationReport> {
    let total_rows = scalar(conn, "SELECT COUNT(*) FROM books")?;
    let missing_critical = scalar(
        conn,
        "SELECT COUNT(*) FROM books \
         WHERE isbn IS NULL OR title IS NULL OR author IS NULL OR publisher IS NULL",
    )?;
    let distinct_authors = scalar(conn, "SELECT COUNT(DISTINCT author) FROM books")?;
    let duplicate_isbn_groups = scalar(
        conn,
        "SELECT COUNT(*) FROM \
         (SELECT isbn FROM books GROUP BY isbn HAVING COUNT(*) > 1) AS dup",
    )?;
    let invalid_isbns = scalar(
        conn,
        "SELECT COUNT(*) FROM books \
         WHERE LENGTH(isbn) NOT IN (10, 13) OR NOT regexp_matches(isbn, '^[0-9]+$')",
    )?;
    let invalid_buy_links = scalar(
        conn,
        "SELECT COUNT(*) FROM books \
         WHERE buy_links IS NOT NULL AND buy_links <> '' \
           AND NOT regexp_matches(buy_links, '^https?://')",
    )?;

    Ok(ValidationReport {
        total_rows,
        missing_critical,
        distinct_authors,
        duplicate_isbn_groups,
        invalid_isbns,
        invalid_buy_links,
    })
}

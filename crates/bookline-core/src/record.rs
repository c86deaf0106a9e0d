//! Canonical book record
//!
//! One record per rank entry after reconciliation. Field order here is the
//! column order of both the CSV dataset artifact and the store schema
//! (asserted against the store's column map in bookline-store tests).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for rank-entry text fields absent at the source.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for an absent rank; below the valid range so the quality screen
/// flags it.
pub const RANK_SENTINEL: i64 = -1;

/// Fixed provenance tag: every record merges the rank list and both catalogs.
pub const DATA_SOURCE: &str = "rank_list, catalog_a, catalog_b";

/// The reconciled representation of one bestseller-list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publication_date: String,
    pub description: String,
    pub rank: i64,
    pub list_name: String,
    pub weeks_on_list: i64,
    pub page_count: Option<i64>,
    pub language: Option<String>,
    pub cover_image_url: Option<String>,
    /// Purchase URLs flattened to one `", "`-delimited string; empty for an
    /// empty link list, never null.
    pub buy_links: String,
    pub data_source: String,
    pub ingested_at: DateTime<Utc>,
}

//! Source artifact deserialization
//!
//! Shapes follow what the retrieval adapters stage: the list provider's
//! `results` wrapper for the rank snapshot, and identifier-keyed maps of
//! provider-shaped JSON for the two enrichment catalogs. Enrichment values
//! stay untyped (`serde_json::Value`) so one malformed provider entry
//! degrades only its own fields instead of failing the whole map.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Enrichment map: identifier → raw provider payload.
pub type EnrichmentMap = FxHashMap<String, serde_json::Value>;

/// Provider wrapper around the list snapshot.
#[derive(Debug, Deserialize)]
struct RankSnapshotArtifact {
    results: ListSnapshot,
}

/// One bestseller-list snapshot: list-level metadata plus ranked entries.
#[derive(Debug, Deserialize)]
pub struct ListSnapshot {
    pub list_name: Option<String>,
    pub published_date: Option<String>,
    pub books: Vec<RankEntry>,
}

/// One ranked entry. The identifier is required; every other field may be
/// absent and is defaulted during reconciliation.
#[derive(Debug, Deserialize)]
pub struct RankEntry {
    pub primary_isbn13: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub rank: Option<i64>,
    pub weeks_on_list: Option<i64>,
    #[serde(default)]
    pub buy_links: Vec<BuyLink>,
}

#[derive(Debug, Deserialize)]
pub struct BuyLink {
    pub url: String,
}

/// Read the staged rank snapshot, unwrapping the provider envelope.
pub fn read_snapshot(path: &Path) -> Result<ListSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read rank snapshot: {}", path.display()))?;
    let artifact: RankSnapshotArtifact = serde_json::from_str(&raw)
        .with_context(|| format!("malformed rank snapshot: {}", path.display()))?;
    Ok(artifact.results)
}

/// Read a staged enrichment map. The map itself must parse; individual
/// entries are kept raw.
pub fn read_enrichment(path: &Path) -> Result<EnrichmentMap> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read enrichment map: {}", path.display()))?;
    let map: EnrichmentMap = serde_json::from_str(&raw)
        .with_context(|| format!("malformed enrichment map: {}", path.display()))?;
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "results": {
            "list_name": "Hardcover Fiction",
            "published_date": "2026-08-23",
            "books": [
                {
                    "primary_isbn13": "1111111111111",
                    "title": "First",
                    "author": "A. Author",
                    "rank": 1,
                    "weeks_on_list": 4,
                    "buy_links": [{"name": "Shop", "url": "https://shop.example/1"}]
                },
                {"primary_isbn13": "2222222222222"}
            ]
        }
    }"#;

    #[test]
    fn snapshot_parses_with_sparse_entries() {
        let snapshot: RankSnapshotArtifact = serde_json::from_str(SNAPSHOT).unwrap();
        let list = snapshot.results;
        assert_eq!(list.list_name.as_deref(), Some("Hardcover Fiction"));
        assert_eq!(list.books.len(), 2);
        assert_eq!(list.books[0].buy_links[0].url, "https://shop.example/1");
        assert!(list.books[1].title.is_none());
        assert!(list.books[1].buy_links.is_empty());
    }

    #[test]
    fn snapshot_without_identifier_fails() {
        let raw = r#"{"results": {"books": [{"title": "No id"}]}}"#;
        assert!(serde_json::from_str::<RankSnapshotArtifact>(raw).is_err());
    }

    #[test]
    fn enrichment_map_keeps_malformed_entries_raw() {
        let raw = r#"{
            "1111111111111": {"items": [{"volumeInfo": {"pageCount": 320}}]},
            "2222222222222": "not an object"
        }"#;
        let map: EnrichmentMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map["2222222222222"].is_string());
    }
}

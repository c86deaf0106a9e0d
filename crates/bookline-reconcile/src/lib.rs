//! bookline-reconcile: merge one rank snapshot with both enrichment catalogs
//!
//! Pure transformation over three already-materialized inputs; no I/O.
//! Every rank entry yields exactly one canonical record, in snapshot order.
//! Enrichment lookups that miss or hit malformed payloads degrade the
//! affected fields to null — a record is never dropped for incomplete
//! enrichment.

use bookline_core::record::{BookRecord, DATA_SOURCE, RANK_SENTINEL, UNKNOWN};
use bookline_core::source::{EnrichmentMap, ListSnapshot, RankEntry};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Cover payload shape inside a catalog-A entry (`"ISBN:<isbn>" → cover`).
#[derive(Debug, Deserialize)]
struct CoverPayload {
    cover: Option<CoverLinks>,
}

#[derive(Debug, Deserialize)]
struct CoverLinks {
    large: Option<String>,
}

/// Volume payload shape inside a catalog-B entry (`items[0].volumeInfo`).
#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    #[serde(rename = "pageCount")]
    page_count: Option<i64>,
    language: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

/// Large cover URL from a raw catalog-A payload, if the entry has one.
fn cover_from_catalog_a(value: &serde_json::Value, isbn: &str) -> Option<String> {
    let entry = value.get(format!("ISBN:{isbn}"))?;
    let payload: CoverPayload = serde_json::from_value(entry.clone()).ok()?;
    payload.cover?.large
}

/// Volume info from a raw catalog-B payload; malformed payloads yield the
/// all-null default.
fn volume_from_catalog_b(value: &serde_json::Value) -> VolumeInfo {
    value
        .get("items")
        .and_then(|items| items.get(0))
        .and_then(|item| item.get("volumeInfo"))
        .and_then(|info| serde_json::from_value(info.clone()).ok())
        .unwrap_or_default()
}

fn reconcile_entry(
    entry: &RankEntry,
    list_name: &str,
    publication_date: &str,
    catalog_a: &EnrichmentMap,
    catalog_b: &EnrichmentMap,
    ingested_at: DateTime<Utc>,
) -> BookRecord {
    let isbn = entry.primary_isbn13.clone();

    let cover_a = catalog_a
        .get(&isbn)
        .and_then(|v| cover_from_catalog_a(v, &isbn));
    let volume = catalog_b
        .get(&isbn)
        .map(volume_from_catalog_b)
        .unwrap_or_default();

    // Catalog A wins for the cover; B fills in only when A yielded nothing.
    let cover_image_url = cover_a.or(volume.image_links.and_then(|l| l.thumbnail));

    let buy_links = entry
        .buy_links
        .iter()
        .map(|link| link.url.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    BookRecord {
        isbn,
        title: entry.title.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        author: entry.author.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        publisher: entry
            .publisher
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        publication_date: publication_date.to_string(),
        description: entry
            .description
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        rank: entry.rank.unwrap_or(RANK_SENTINEL),
        list_name: list_name.to_string(),
        weeks_on_list: entry.weeks_on_list.unwrap_or(0),
        page_count: volume.page_count,
        language: volume.language,
        cover_image_url,
        buy_links,
        data_source: DATA_SOURCE.to_string(),
        ingested_at,
    }
}

/// Reconcile one batch: one canonical record per rank entry, in snapshot
/// order. `ingested_at` is set once per batch by the caller.
pub fn reconcile(
    snapshot: &ListSnapshot,
    catalog_a: &EnrichmentMap,
    catalog_b: &EnrichmentMap,
    ingested_at: DateTime<Utc>,
) -> Vec<BookRecord> {
    let list_name = snapshot
        .list_name
        .clone()
        .unwrap_or_else(|| UNKNOWN.to_string());
    let publication_date = snapshot.published_date.clone().unwrap_or_default();

    snapshot
        .books
        .iter()
        .map(|entry| {
            reconcile_entry(
                entry,
                &list_name,
                &publication_date,
                catalog_a,
                catalog_b,
                ingested_at,
            )
        })
        .collect()
}

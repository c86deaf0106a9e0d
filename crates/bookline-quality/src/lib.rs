//! bookline-quality: pre-load quality screen over the reconciled dataset
//!
//! Every check is independent and non-blocking: a violated invariant becomes
//! a [`Finding`] in the report, never an error. The rendered report is
//! byte-for-byte reproducible for a given input.

use std::fmt;

use bookline_core::record::{BookRecord, RANK_SENTINEL};
use rustc_hash::FxHashSet;

/// Which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// A critical field is missing (empty text, or the rank sentinel).
    MissingCritical,
    /// The same identifier appears more than once in the batch.
    DuplicateIdentifier,
    /// Rank below the valid range (>= 1).
    RankRange,
    /// Negative weeks-on-list counter.
    NegativeWeeks,
}

/// One non-fatal data-quality finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub check: CheckKind,
    pub count: usize,
    /// Rendered report line for this finding.
    pub message: String,
}

/// Aggregate statistics over the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityStats {
    pub total_records: usize,
    pub distinct_titles: usize,
    pub distinct_authors: usize,
    /// Mean over records with a non-null page count.
    pub mean_page_count: Option<f64>,
    /// Mean over records whose rank is not the missing-value sentinel.
    pub mean_rank: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub stats: QualityStats,
    pub findings: Vec<Finding>,
}

impl QualityReport {
    pub fn has_issues(&self) -> bool {
        !self.findings.is_empty()
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Quality Report")?;
        writeln!(f, "====================")?;
        writeln!(f, "Total Books Processed: {}", self.stats.total_records)?;
        writeln!(f, "Distinct Titles: {}", self.stats.distinct_titles)?;
        writeln!(f, "Distinct Authors: {}", self.stats.distinct_authors)?;
        match self.stats.mean_page_count {
            Some(mean) => writeln!(f, "Average Page Count: {mean:.2}")?,
            None => writeln!(f, "Average Page Count: n/a")?,
        }
        match self.stats.mean_rank {
            Some(mean) => writeln!(f, "Average Rank: {mean:.2}")?,
            None => writeln!(f, "Average Rank: n/a")?,
        }
        writeln!(f)?;
        if self.findings.is_empty() {
            write!(f, "No major data quality issues detected.")?;
        } else {
            writeln!(f, "Issues Found:")?;
            for finding in &self.findings {
                writeln!(f, "{}", finding.message)?;
            }
        }
        Ok(())
    }
}

/// Critical fields and their missing-value predicates, in report order.
const CRITICAL_FIELDS: [(&str, fn(&BookRecord) -> bool); 7] = [
    ("title", |r| r.title.is_empty()),
    ("author", |r| r.author.is_empty()),
    ("publisher", |r| r.publisher.is_empty()),
    ("publication_date", |r| r.publication_date.is_empty()),
    ("isbn", |r| r.isbn.is_empty()),
    ("description", |r| r.description.is_empty()),
    ("rank", |r| r.rank == RANK_SENTINEL),
];

fn mean(values: impl Iterator<Item = i64>) -> Option<f64> {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Screen one reconciled batch. Deterministic: the same input always yields
/// the same stats and the same findings in the same order.
pub fn screen(records: &[BookRecord]) -> QualityReport {
    let distinct_titles: FxHashSet<&str> = records.iter().map(|r| r.title.as_str()).collect();
    let distinct_authors: FxHashSet<&str> = records.iter().map(|r| r.author.as_str()).collect();

    let stats = QualityStats {
        total_records: records.len(),
        distinct_titles: distinct_titles.len(),
        distinct_authors: distinct_authors.len(),
        mean_page_count: mean(records.iter().filter_map(|r| r.page_count)),
        mean_rank: mean(
            records
                .iter()
                .map(|r| r.rank)
                .filter(|&rank| rank != RANK_SENTINEL),
        ),
    };

    let mut findings = Vec::new();

    for (field, is_missing) in CRITICAL_FIELDS {
        let count = records.iter().filter(|r| is_missing(r)).count();
        if count > 0 {
            findings.push(Finding {
                check: CheckKind::MissingCritical,
                count,
                message: format!("Missing values in {field}: {count}"),
            });
        }
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let duplicates = records
        .iter()
        .filter(|r| !seen.insert(r.isbn.as_str()))
        .count();
    if duplicates > 0 {
        findings.push(Finding {
            check: CheckKind::DuplicateIdentifier,
            count: duplicates,
            message: format!("Found {duplicates} duplicate ISBNs"),
        });
    }

    // The sentinel already counts as a missing rank; it still falls below the
    // valid range, matching what the range check is meant to catch.
    let bad_ranks = records.iter().filter(|r| r.rank < 1).count();
    if bad_ranks > 0 {
        findings.push(Finding {
            check: CheckKind::RankRange,
            count: bad_ranks,
            message: format!("{bad_ranks} records have an invalid rank (should be >= 1)"),
        });
    }

    let negative_weeks = records.iter().filter(|r| r.weeks_on_list < 0).count();
    if negative_weeks > 0 {
        findings.push(Finding {
            check: CheckKind::NegativeWeeks,
            count: negative_weeks,
            message: format!("{negative_weeks} records have negative weeks_on_list"),
        });
    }

    QualityReport { stats, findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookline_core::record::{DATA_SOURCE, UNKNOWN};
    use chrono::{TimeZone, Utc};

    fn record(isbn: &str, rank: i64) -> BookRecord {
        BookRecord {
            isbn: isbn.to_string(),
            title: format!("Title {isbn}"),
            author: format!("Author {isbn}"),
            publisher: UNKNOWN.into(),
            publication_date: "2026-08-23".into(),
            description: "d".into(),
            rank,
            list_name: "Hardcover Fiction".into(),
            weeks_on_list: 1,
            page_count: None,
            language: None,
            cover_image_url: None,
            buy_links: String::new(),
            data_source: DATA_SOURCE.into(),
            ingested_at: Utc.with_ymd_and_hms(2026, 8, 23, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn clean_batch_reports_no_issues() {
        let records = vec![record("1111111111111", 1), record("2222222222222", 2)];
        let report = screen(&records);
        assert!(!report.has_issues());
        assert!(format!("{report}").ends_with("No major data quality issues detected."));
        assert_eq!(report.stats.total_records, 2);
        assert_eq!(report.stats.distinct_titles, 2);
    }

    #[test]
    fn rank_zero_yields_exactly_one_range_finding() {
        let records = vec![record("1111111111111", 0), record("2222222222222", 2)];
        let report = screen(&records);
        let range: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.check == CheckKind::RankRange)
            .collect();
        assert_eq!(range.len(), 1);
        assert_eq!(range[0].count, 1);
        // Rank 0 is present, just out of range: not a missing-value finding.
        assert!(!report
            .findings
            .iter()
            .any(|f| f.check == CheckKind::MissingCritical));
    }

    #[test]
    fn sentinel_rank_counts_as_missing_and_out_of_range() {
        let records = vec![record("1111111111111", RANK_SENTINEL)];
        let report = screen(&records);
        assert!(report
            .findings
            .iter()
            .any(|f| f.check == CheckKind::MissingCritical && f.message.contains("rank")));
        assert!(report
            .findings
            .iter()
            .any(|f| f.check == CheckKind::RankRange));
        // Sentinel ranks are excluded from the mean.
        assert_eq!(report.stats.mean_rank, None);
    }

    #[test]
    fn duplicate_identifiers_counted_as_extra_occurrences() {
        let records = vec![
            record("1111111111111", 1),
            record("1111111111111", 2),
            record("1111111111111", 3),
        ];
        let report = screen(&records);
        let dup = report
            .findings
            .iter()
            .find(|f| f.check == CheckKind::DuplicateIdentifier)
            .unwrap();
        assert_eq!(dup.count, 2);
    }

    #[test]
    fn negative_weeks_found() {
        let mut bad = record("1111111111111", 1);
        bad.weeks_on_list = -3;
        let report = screen(&[bad]);
        assert!(report
            .findings
            .iter()
            .any(|f| f.check == CheckKind::NegativeWeeks && f.count == 1));
    }

    #[test]
    fn means_cover_only_non_null_values() {
        let mut a = record("1111111111111", 1);
        a.page_count = Some(300);
        let mut b = record("2222222222222", 3);
        b.page_count = Some(100);
        let c = record("3333333333333", RANK_SENTINEL);

        let report = screen(&[a, b, c]);
        assert_eq!(report.stats.mean_page_count, Some(200.0));
        assert_eq!(report.stats.mean_rank, Some(2.0));
    }

    #[test]
    fn report_rendering_is_reproducible() {
        let records = vec![record("1111111111111", 0), record("1111111111111", 2)];
        let first = screen(&records);
        let second = screen(&records);
        assert_eq!(first, second);
        assert_eq!(format!("{first}"), format!("{second}"));
    }

    #[test]
    fn empty_batch_screens_without_error() {
        let report = screen(&[]);
        assert_eq!(report.stats.total_records, 0);
        assert_eq!(report.stats.mean_page_count, None);
        assert!(!report.has_issues());
    }
}

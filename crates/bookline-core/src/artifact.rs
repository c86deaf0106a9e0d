//! Staged artifact catalog
//!
//! The staging layer (an external collaborator) hands each stage its inputs as
//! named files in one staging directory. This enum is the catalog of those
//! checkpoint names; stages resolve their inputs through it so a missing file
//! always surfaces as the same fatal error.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// One named checkpoint in the staging directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Ranked bestseller-list snapshot (JSON, from the list provider adapter).
    RankSnapshot,
    /// Cover catalog enrichment map (JSON, identifier → provider payload).
    CatalogA,
    /// Volume catalog enrichment map (JSON, identifier → provider payload).
    CatalogB,
    /// Reconciled tabular dataset (CSV, one row per canonical record).
    ReconciledDataset,
    /// Pre-load quality report (text).
    QualityReport,
    /// Post-load validation report (text).
    ValidationReport,
    /// The persisted store database file.
    StoreDb,
}

impl Artifact {
    /// File name under the staging directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::RankSnapshot => "rank_snapshot.json",
            Self::CatalogA => "catalog_a.json",
            Self::CatalogB => "catalog_b.json",
            Self::ReconciledDataset => "reconciled_books.csv",
            Self::QualityReport => "quality_report.txt",
            Self::ValidationReport => "validation_report.txt",
            Self::StoreDb => "books.duckdb",
        }
    }

    /// Path of this artifact under `dir`, without checking existence.
    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// Resolve this artifact under `dir`, failing with
    /// [`PipelineError::MissingArtifact`] when the file does not exist.
    pub fn resolve(self, dir: &Path) -> Result<PathBuf, PipelineError> {
        let path = self.path_in(dir);
        if path.is_file() {
            Ok(path)
        } else {
            Err(PipelineError::MissingArtifact {
                artifact: self,
                path,
            })
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::RankSnapshot.resolve(dir.path()).unwrap_err();
        match err {
            PipelineError::MissingArtifact { artifact, .. } => {
                assert_eq!(artifact, Artifact::RankSnapshot);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn resolve_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Artifact::CatalogA.path_in(dir.path());
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(Artifact::CatalogA.resolve(dir.path()).unwrap(), path);
    }

    #[test]
    fn file_names_are_distinct() {
        let all = [
            Artifact::RankSnapshot,
            Artifact::CatalogA,
            Artifact::CatalogB,
            Artifact::ReconciledDataset,
            Artifact::QualityReport,
            Artifact::ValidationReport,
            Artifact::StoreDb,
        ];
        let names: std::collections::HashSet<_> = all.iter().map(|a| a.file_name()).collect();
        assert_eq!(names.len(), all.len());
    }
}

//! Pipeline error taxonomy
//!
//! Only fatal, stage-aborting conditions live here. Per-item enrichment
//! misses degrade fields to null inside reconciliation, and quality or
//! validation findings are report data; neither is ever an error.

use std::path::PathBuf;

use crate::artifact::Artifact;

/// Fatal pipeline failure. Each variant names a precondition the
/// orchestration harness should surface as a failed stage.
#[derive(Debug)]
pub enum PipelineError {
    /// A required staged artifact does not exist when the stage begins.
    MissingArtifact { artifact: Artifact, path: PathBuf },
    /// The reconciled dataset exists but contains no records; loading it
    /// would silently commit nothing.
    EmptyBatch { artifact: Artifact },
    /// A record reached the loader without an identifier. The whole batch
    /// aborts rather than skipping the row.
    MissingIdentifier { row: usize },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArtifact { artifact, path } => {
                write!(f, "missing artifact {artifact}: {}", path.display())
            }
            Self::EmptyBatch { artifact } => {
                write!(f, "empty batch: {artifact} contains no records")
            }
            Self::MissingIdentifier { row } => {
                write!(f, "record {row} has no identifier; aborting batch")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl PipelineError {
    /// The artifact whose absence or emptiness caused the failure, if any.
    pub fn artifact(&self) -> Option<Artifact> {
        match self {
            Self::MissingArtifact { artifact, .. } | Self::EmptyBatch { artifact } => {
                Some(*artifact)
            }
            Self::MissingIdentifier { .. } => None,
        }
    }
}

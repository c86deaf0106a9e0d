//! bookline-core: shared types for the bestseller ETL pipeline
//!
//! Canonical book record, source-artifact deserialization, the staged-artifact
//! catalog, the pipeline error taxonomy, and CSV dataset I/O shared by every
//! stage crate.

pub mod artifact;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod record;
pub mod source;

pub use artifact::Artifact;
pub use error::PipelineError;
pub use logging::init_logging;
pub use record::BookRecord;
pub use source::{EnrichmentMap, ListSnapshot, RankEntry};

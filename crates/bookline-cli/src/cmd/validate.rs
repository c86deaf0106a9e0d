//! `bookline validate` - re-derive validation metrics from the store

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bookline_core::{Artifact, PipelineError};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Staging directory where the validation report is written
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Store database path
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, config: &Config) -> Result<()> {
    let dir = super::staging_dir(&args.data_dir, config);

    let db_path = super::store_path(&args.db_path, config, &dir);
    if !db_path.is_file() {
        return Err(PipelineError::MissingArtifact {
            artifact: Artifact::StoreDb,
            path: db_path,
        }
        .into());
    }

    let conn = bookline_store::open_store(&db_path)?;
    let report = bookline_store::validate(&conn)?;

    let out = Artifact::ValidationReport.path_in(&dir);
    std::fs::write(&out, format!("{report}"))
        .with_context(|| format!("failed to write validation report: {}", out.display()))?;

    log::info!(
        "validation complete: {} rows checked, report at {}",
        report.total_rows,
        out.display()
    );

    Ok(())
}

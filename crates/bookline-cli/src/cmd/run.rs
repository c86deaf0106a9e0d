//! `bookline run` - execute the full stage sequence

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::Config;

use super::{load, quality, reconcile, validate};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Staging directory for all artifacts
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Store database path
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

/// Strict stage sequence: reconcile → quality → load → validate.
///
/// The two enrichment fetches fan out inside the retrieval layer; by the
/// time this sequence starts, all three source artifacts must already be
/// staged. The first fatal stage error aborts the sequence and propagates
/// to the harness as a non-zero exit.
pub fn run(args: RunArgs, config: &Config) -> Result<()> {
    log::info!("stage 1/4: reconcile");
    reconcile::run(
        reconcile::ReconcileArgs {
            data_dir: args.data_dir.clone(),
        },
        config,
    )?;

    log::info!("stage 2/4: quality screen");
    quality::run(
        quality::QualityArgs {
            data_dir: args.data_dir.clone(),
        },
        config,
    )?;

    log::info!("stage 3/4: load");
    load::run(
        load::LoadArgs {
            data_dir: args.data_dir.clone(),
            db_path: args.db_path.clone(),
        },
        config,
    )?;

    log::info!("stage 4/4: validate");
    validate::run(
        validate::ValidateArgs {
            data_dir: args.data_dir,
            db_path: args.db_path,
        },
        config,
    )?;

    log::info!("pipeline run complete");
    Ok(())
}

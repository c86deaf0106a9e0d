//! `bookline load` - upsert the reconciled dataset into the store

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bookline_core::{dataset, Artifact};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Staging directory holding the reconciled dataset
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Store database path
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

pub fn run(args: LoadArgs, config: &Config) -> Result<()> {
    let dir = super::staging_dir(&args.data_dir, config);

    let dataset_path = Artifact::ReconciledDataset.resolve(&dir)?;
    let records = dataset::read_dataset(&dataset_path)?;

    let db_path = super::store_path(&args.db_path, config, &dir);
    let mut conn = bookline_store::open_store(&db_path)?;

    let summary = bookline_store::load(&mut conn, &records)?;
    log::info!(
        "load complete: {} rows upserted into {}, {} rows in store",
        summary.rows_loaded,
        db_path.display(),
        summary.rows_in_store
    );

    Ok(())
}

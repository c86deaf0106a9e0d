//! `bookline reconcile` - merge the staged snapshot with both catalogs

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bookline_core::{dataset, source, Artifact};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Staging directory holding the source artifacts
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

pub fn run(args: ReconcileArgs, config: &Config) -> Result<()> {
    let dir = super::staging_dir(&args.data_dir, config);

    // All three inputs must exist before any parsing starts; a structurally
    // missing artifact fails the stage with nothing written.
    let snapshot_path = Artifact::RankSnapshot.resolve(&dir)?;
    let catalog_a_path = Artifact::CatalogA.resolve(&dir)?;
    let catalog_b_path = Artifact::CatalogB.resolve(&dir)?;

    let snapshot = source::read_snapshot(&snapshot_path)?;
    let catalog_a = source::read_enrichment(&catalog_a_path)?;
    let catalog_b = source::read_enrichment(&catalog_b_path)?;

    let ingested_at = chrono::Utc::now();
    let records = bookline_reconcile::reconcile(&snapshot, &catalog_a, &catalog_b, ingested_at);

    let covers = records
        .iter()
        .filter(|r| r.cover_image_url.is_some())
        .count();
    let pages = records.iter().filter(|r| r.page_count.is_some()).count();
    log::info!(
        "reconciled {} records ({covers} with covers, {pages} with page counts)",
        records.len()
    );

    let out = Artifact::ReconciledDataset.path_in(&dir);
    dataset::write_dataset(&out, &records)?;
    log::info!("reconciled dataset written to {}", out.display());

    Ok(())
}

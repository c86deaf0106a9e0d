//! `bookline quality` - screen the reconciled dataset

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bookline_core::{dataset, Artifact};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct QualityArgs {
    /// Staging directory holding the reconciled dataset
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

pub fn run(args: QualityArgs, config: &Config) -> Result<()> {
    let dir = super::staging_dir(&args.data_dir, config);

    let dataset_path = Artifact::ReconciledDataset.resolve(&dir)?;
    let records = dataset::read_dataset(&dataset_path)?;

    let report = bookline_quality::screen(&records);

    // The report is written whenever the stage completes, findings or not.
    let out = Artifact::QualityReport.path_in(&dir);
    std::fs::write(&out, format!("{report}"))
        .with_context(|| format!("failed to write quality report: {}", out.display()))?;

    if report.has_issues() {
        log::warn!(
            "quality screen: {} finding(s) over {} records, report at {}",
            report.findings.len(),
            report.stats.total_records,
            out.display()
        );
    } else {
        log::info!(
            "quality screen: no issues over {} records, report at {}",
            report.stats.total_records,
            out.display()
        );
    }

    Ok(())
}

//! bookline - weekly bestseller-list reconciliation pipeline
//!
//! Reconciles a ranked list snapshot with two enrichment catalogs, screens
//! the result for data-quality defects, upserts it idempotently into a
//! DuckDB store, and re-validates against the store. Each subcommand is one
//! pipeline stage; the scheduling harness invokes them in order (or `run`
//! for the whole sequence).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "bookline")]
#[command(about = "Bestseller-list reconcile/quality/load/validate pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./bookline.toml or ~/.config/bookline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Reconcile the staged rank snapshot with both enrichment catalogs
    Reconcile(cmd::reconcile::ReconcileArgs),
    /// Screen the reconciled dataset and write the quality report
    Quality(cmd::quality::QualityArgs),
    /// Upsert the reconciled dataset into the store as one batch
    Load(cmd::load::LoadArgs),
    /// Re-derive validation metrics from the store
    Validate(cmd::validate::ValidateArgs),
    /// Run the full stage sequence
    Run(cmd::run::RunArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    bookline_core::init_logging(cli.debug);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Reconcile(args) => cmd::reconcile::run(args, &config),
        Command::Quality(args) => cmd::quality::run(args, &config),
        Command::Load(args) => cmd::load::run(args, &config),
        Command::Validate(args) => cmd::validate::run(args, &config),
        Command::Run(args) => cmd::run::run(args, &config),
        Command::Config => {
            use comfy_table::{
                modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec![
                "Staging directory",
                &config.staging.data_dir.display().to_string(),
            ]);
            table.add_row(vec![
                "Store database",
                &cmd::store_path(&None, &config, &config.staging.data_dir)
                    .display()
                    .to_string(),
            ]);

            println!("{table}");
            Ok(())
        }
    }
}

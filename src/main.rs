use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use waste_index::config::ProjectPaths;
use waste_index::progress::{NoProgress, Progress, TerminalProgress};
use waste_index::{build_index, logging, write_table, IndexOptions};

/// Index a per-class image dataset into a `filepath,label` CSV.
#[derive(Parser)]
#[command(name = "waste_index", version, about)]
struct Cli {
    /// Root directory with one subdirectory per class [default: <root>/data/raw]
    #[arg(long)]
    input_path: Option<PathBuf>,

    /// Destination CSV [default: <root>/data/processed/dataset.csv]
    #[arg(long)]
    output_path: Option<PathBuf>,

    /// Sort labels and files by name for reproducible output
    #[arg(long)]
    sort: bool,

    /// Skip top-level entries that are not directories instead of failing
    #[arg(long)]
    skip_non_dirs: bool,

    /// Hide progress bars
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    logging::init_tracing()?;
    let cli = Cli::parse();

    let paths = ProjectPaths::from_env();
    let input_path = cli.input_path.unwrap_or_else(|| paths.raw_data_dir.clone());
    let output_path = cli
        .output_path
        .unwrap_or_else(|| paths.default_dataset_csv());

    let options = IndexOptions {
        sort: cli.sort,
        skip_non_dirs: cli.skip_non_dirs,
    };

    let mut progress: Box<dyn Progress> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(TerminalProgress::new())
    };

    let records = build_index(&input_path, options, progress.as_mut())
        .with_context(|| format!("failed to index {}", input_path.display()))?;

    write_table(&records, &output_path)?;

    info!(
        rows = records.len(),
        output = %output_path.display(),
        "Processing dataset complete."
    );

    Ok(())
}

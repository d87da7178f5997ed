use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use waste_index::config::ProjectPaths;
use waste_index::summary::LabelSummary;
use waste_index::{logging, read_table, viz};

/// Summarize a dataset index produced by `waste_index`.
#[derive(Parser)]
#[command(name = "analyze", version, about)]
struct Cli {
    /// Index CSV [default: <root>/data/processed/dataset.csv]
    csv: Option<PathBuf>,

    /// Also write the per-label counts as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also draw a class distribution bar chart (PNG)
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init_tracing()?;
    let cli = Cli::parse();

    let csv_path = cli
        .csv
        .unwrap_or_else(|| ProjectPaths::from_env().default_dataset_csv());

    info!("Summarizing {}...", csv_path.display());
    let records = read_table(&csv_path)?;
    let summary = LabelSummary::from_records(&records);

    for (label, count) in &summary.labels {
        println!("{:<20} {:>8}", label, count);
    }
    println!("{:<20} {:>8}", "total", summary.total);

    if let Some(json_path) = &cli.json {
        let file = File::create(json_path)
            .with_context(|| format!("failed to create {}", json_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summary)?;
        info!("Wrote summary to {}", json_path.display());
    }

    if let Some(plot_path) = &cli.plot {
        viz::draw_label_distribution(&summary, plot_path)?;
        info!("Wrote chart to {}", plot_path.display());
    }

    Ok(())
}

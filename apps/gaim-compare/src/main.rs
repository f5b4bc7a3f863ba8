//! GAIM cohort comparison
//!
//! Compares two cohorts of assessment records and prints the per-dimension
//! report as JSON on stdout. Logs go to stderr (`RUST_LOG` to adjust).

use std::path::{Path, PathBuf};

use clap::Parser;
use gaim_stats::{compare_cohorts, parse_records, Cohort, ComparisonConfig};
use tracing_subscriber::EnvFilter;

/// Cohort comparison CLI arguments
#[derive(Parser, Debug)]
#[command(name = "gaim-compare")]
#[command(version, about = "Compare two cohorts of assessment records")]
struct Cli {
    /// JSON file with group A's assessment records
    group_a: PathBuf,

    /// JSON file with group B's assessment records
    group_b: PathBuf,

    /// Display label for group A (defaults to the file stem)
    #[arg(long)]
    label_a: Option<String>,

    /// Display label for group B (defaults to the file stem)
    #[arg(long)]
    label_b: Option<String>,

    /// TOML comparison config (dimensions, rounding)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn load_config(&self) -> gaim_stats::Result<ComparisonConfig> {
        match &self.config {
            Some(path) => ComparisonConfig::from_file(path),
            None => Ok(ComparisonConfig::default()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let group_a = load_cohort(&cli.group_a, cli.label_a.as_deref())?;
    let group_b = load_cohort(&cli.group_b, cli.label_b.as_deref())?;

    let report = compare_cohorts(&group_a, &group_b, &config)?;
    for c in report.significant_dimensions() {
        tracing::info!(dimension = %c.dimension, p = c.t_test.p, "significant difference");
    }

    let json = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        report.to_json()?
    };
    println!("{json}");

    Ok(())
}

fn load_cohort(path: &Path, label: Option<&str>) -> gaim_stats::Result<Cohort> {
    let records = parse_records(&std::fs::read_to_string(path)?)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded cohort");
    Ok(Cohort::new(cohort_label(path, label), records))
}

fn cohort_label(path: &Path, label: Option<&str>) -> String {
    match label {
        Some(label) => label.to_string(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

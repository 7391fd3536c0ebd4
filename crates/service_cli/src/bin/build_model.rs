//! Build the quarterly revenue forecast workbook.
//!
//! Evaluates the three scenarios and the probability-weighted blend
//! entirely in memory, then writes the workbook CSV and the JSON summary
//! and prints the rounded headline numbers.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use model_core::{ForecastModel, ModelInputs};
use model_report::{sink, workbook, WorkbookMeta};

/// Quarterly revenue forecast workbook builder
#[derive(Parser)]
#[command(name = "build-model")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file overriding the built-in model assumptions
    #[arg(short, long)]
    inputs: Option<PathBuf>,

    /// Directory receiving the workbook CSV and summary JSON
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let inputs = ModelInputs::load_or_default(cli.inputs.as_deref())?;
    let weight_sum = inputs.weight_sum();
    if (weight_sum - 1.0).abs() > 1e-9 {
        // Deliberate scaling is allowed; the blend is then scaled, not a
        // true expectation.
        warn!(weight_sum, "Scenario weights do not sum to 1");
    }

    let model = ForecastModel::evaluate(&inputs);
    info!(
        base_total_m = model.base.total_rev_m,
        weighted_total_m = model.weighted.total_revenue_m,
        "Model evaluated"
    );

    let grid = workbook::render(&inputs, &WorkbookMeta::default());
    sink::write_workbook_csv(&cli.output_dir.join("coinbase_q3_2025_model.csv"), &grid)?;
    sink::write_summary_json(&cli.output_dir.join("model_summary.json"), &model)?;

    println!("Base total revenue (M): {:.2}", model.base.total_rev_m);
    println!("Bear total revenue (M): {:.2}", model.bear.total_rev_m);
    println!("Bull total revenue (M): {:.2}", model.bull.total_rev_m);
    println!(
        "Probability-weighted total (M): {:.2}",
        model.weighted.total_revenue_m
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["build-model"]).unwrap();
        assert!(cli.inputs.is_none());
        assert_eq!(cli.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_explicit_options() {
        let cli = Cli::try_parse_from([
            "build-model",
            "--inputs",
            "assumptions.toml",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.inputs, Some(PathBuf::from("assumptions.toml")));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
    }
}

//! Sweep the consumption range and tabulate projected savings
//!
//! Runs the full projection at each consumption step in parallel and
//! writes one summary row per step.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use tariff_engine::input::{MAX_MONTHLY_UNITS, MIN_MONTHLY_UNITS};
use tariff_engine::projection::ProjectionEngine;
use tariff_engine::{Period, ScenarioParams};

#[derive(Parser)]
#[command(about = "Sweep monthly consumption and tabulate projected savings")]
struct Args {
    /// First consumption step
    #[arg(long, default_value_t = MIN_MONTHLY_UNITS)]
    from: u64,

    /// Last consumption step (inclusive)
    #[arg(long, default_value_t = 100_000)]
    to: u64,

    /// Step size in units
    #[arg(long, default_value_t = 5_000)]
    step: u64,

    /// Scenario parameter file (JSON); defaults apply when omitted
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "sweep_output.csv")]
    output: PathBuf,
}

/// One summary row per consumption step
#[derive(Debug, Serialize)]
struct SweepRow {
    monthly_units: u64,
    monthly_savings_vs_utility: f64,
    savings_percent_vs_utility: f64,
    cumulative_savings: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.step == 0 || args.from > args.to {
        anyhow::bail!("sweep range is empty");
    }
    if args.from < MIN_MONTHLY_UNITS || args.to > MAX_MONTHLY_UNITS {
        anyhow::bail!(
            "sweep range {}-{} outside supported domain {}-{}",
            args.from,
            args.to,
            MIN_MONTHLY_UNITS,
            MAX_MONTHLY_UNITS
        );
    }

    let base = match &args.params {
        Some(path) => ScenarioParams::from_json_file(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ScenarioParams::default(),
    };
    tariff_engine::input::validate_horizon_years(base.horizon_years)
        .context("scenario rejected")?;

    let steps: Vec<u64> = (args.from..=args.to).step_by(args.step as usize).collect();
    println!("Sweeping {} consumption steps...", steps.len());
    let start = Instant::now();

    let rows: Vec<SweepRow> = steps
        .par_iter()
        .map(|&units| {
            let params = ScenarioParams {
                monthly_units: units,
                ..base.clone()
            };
            let comparison = params.comparison();
            let engine = ProjectionEngine::new(params.projection_config())
                .expect("validated scenario must project");
            let series = engine.project();

            // Comparison figures are reported monthly regardless of the
            // scenario's view flag
            let monthly = match params.period() {
                Period::Monthly => comparison.savings_vs_utility,
                Period::Yearly => comparison.savings_vs_utility / 12.0,
            };

            SweepRow {
                monthly_units: units,
                monthly_savings_vs_utility: monthly,
                savings_percent_vs_utility: comparison.savings_percent_vs_utility,
                cumulative_savings: series.cumulative_savings,
            }
        })
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("Sweep complete in {:?}", start.elapsed());
    Ok(())
}

//! Run the multi-year savings projection and export the year table
//!
//! Outputs a year-indexed CSV for tabular rendering plus a console summary.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tariff_engine::projection::ProjectionEngine;
use tariff_engine::ScenarioParams;

#[derive(Parser)]
#[command(about = "Project utility vs alternative-provider costs over the horizon")]
struct Args {
    /// Monthly unit consumption (overrides the scenario file)
    #[arg(long)]
    units: Option<u64>,

    /// Projection horizon in years (overrides the scenario file)
    #[arg(long)]
    horizon: Option<u32>,

    /// Scenario parameter file (JSON); defaults apply when omitted
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();

    let mut params = match &args.params {
        Some(path) => ScenarioParams::from_json_file(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ScenarioParams::default(),
    };
    if let Some(units) = args.units {
        params.monthly_units = units;
    }
    if let Some(horizon) = args.horizon {
        params.horizon_years = horizon;
    }
    params.validate().context("scenario rejected")?;

    println!(
        "Projecting {} years at {} units/month...",
        params.horizon_years, params.monthly_units
    );

    let engine = ProjectionEngine::new(params.projection_config())?;
    let series = engine.project();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for row in &series.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    // Summary rows at the start, midpoint, and end of the horizon
    println!("\nProjection Summary:");
    let mut summary_years = vec![1, params.horizon_years / 2, params.horizon_years];
    summary_years.retain(|&y| y >= 1);
    summary_years.dedup();
    for year in summary_years {
        if let Some(row) = series.rows.get((year - 1) as usize) {
            println!(
                "  Year {:>2}: utility={:>12.0}  alternative={:>12.0}  savings={:>12.0}{}",
                row.year,
                row.utility_cost,
                row.alternative_cost,
                row.annual_savings,
                if row.is_discount_year { "  (discount step)" } else { "" },
            );
        }
    }
    println!(
        "\nCompetitor year-1 cost: {:.0}",
        series.competitor_year1_cost
    );
    println!(
        "Cumulative savings over {} years: {:.0}",
        series.horizon_years(),
        series.cumulative_savings
    );

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

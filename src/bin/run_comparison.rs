//! Print the three-scheme cost comparison for one scenario
//!
//! Stands in for the interactive surface: takes the consumption input and
//! view toggle, rounds to whole rupees at this boundary only.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tariff_engine::ScenarioParams;

#[derive(Parser)]
#[command(about = "Compare utility, competitor, and alternative-provider costs")]
struct Args {
    /// Monthly unit consumption (overrides the scenario file)
    #[arg(long)]
    units: Option<u64>,

    /// Report annual figures instead of monthly
    #[arg(long)]
    yearly: bool,

    /// Scenario parameter file (JSON); defaults apply when omitted
    #[arg(long)]
    params: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => ScenarioParams::from_json_file(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ScenarioParams::default(),
    };
    if let Some(units) = args.units {
        params.monthly_units = units;
    }
    if args.yearly {
        params.yearly_view = true;
    }
    params.validate().context("scenario rejected")?;

    let result = params.comparison();
    let period = if params.yearly_view { "Annual" } else { "Monthly" };

    println!(
        "{period} costs for {} units/month",
        params.monthly_units
    );
    println!("{:<24} {:>14}", "Scheme", "Cost");
    println!("{:<24} {:>13.0}", "Utility (slab)", result.utility_cost);
    println!("{:<24} {:>13.0}", "Competitor", result.competitor_cost);
    println!("{:<24} {:>13.0}", "Alternative provider", result.alternative_cost);
    println!();
    println!(
        "Savings vs utility:    {:>10.0}  ({:.0}%)",
        result.savings_vs_utility, result.savings_percent_vs_utility
    );
    println!(
        "Savings vs competitor: {:>10.0}",
        result.savings_vs_competitor
    );

    Ok(())
}

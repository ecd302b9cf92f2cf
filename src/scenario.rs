//! Scenario parameters for comparison and projection runs
//!
//! Bundles the external inputs and rate assumptions into one JSON-loadable
//! struct so the presentation binaries can run the same scenario the
//! interactive surface would.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::comparison::{compare, ComparisonResult, Period};
use crate::error::EngineError;
use crate::input::{validate_horizon_years, validate_monthly_units};
use crate::projection::{
    AlternativeTerms, ProjectionConfig, ProjectionRateSchedule, DEFAULT_DISCOUNT_FRACTION,
    DEFAULT_DISCOUNT_INTERVAL_YEARS, DEFAULT_HORIZON_YEARS,
};
use crate::tariff::{
    TariffSchedule, DEFAULT_ALTERNATIVE_FIXED_MONTHLY, DEFAULT_ALTERNATIVE_RATE,
    DEFAULT_COMPETITOR_RATE,
};

/// Parameters for one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Monthly unit consumption
    #[serde(default = "default_monthly_units")]
    pub monthly_units: u64,

    /// Report annual figures instead of monthly
    #[serde(default)]
    pub yearly_view: bool,

    /// Competitor flat rate per unit
    #[serde(default = "default_competitor_rate")]
    pub competitor_rate: f64,

    /// Alternative-provider flat rate per unit
    #[serde(default = "default_alternative_rate")]
    pub alternative_rate: f64,

    /// Alternative-provider fixed monthly surcharge
    #[serde(default = "default_alternative_fixed")]
    pub alternative_fixed_monthly: f64,

    /// Annual utility price drift (0.03 = +3% per year)
    #[serde(default)]
    pub utility_price_change_rate: f64,

    /// Alternative-provider step discount per interval
    #[serde(default = "default_discount_fraction")]
    pub discount_fraction: f64,

    /// Years between successive discount steps
    #[serde(default = "default_discount_interval")]
    pub discount_interval_years: u32,

    /// Annual consumption degradation (0.005 = -0.5% per year)
    #[serde(default)]
    pub volume_change_rate: f64,

    /// Projection horizon in years
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

fn default_monthly_units() -> u64 { 10_000 }
fn default_competitor_rate() -> f64 { DEFAULT_COMPETITOR_RATE }
fn default_alternative_rate() -> f64 { DEFAULT_ALTERNATIVE_RATE }
fn default_alternative_fixed() -> f64 { DEFAULT_ALTERNATIVE_FIXED_MONTHLY }
fn default_discount_fraction() -> f64 { DEFAULT_DISCOUNT_FRACTION }
fn default_discount_interval() -> u32 { DEFAULT_DISCOUNT_INTERVAL_YEARS }
fn default_horizon_years() -> u32 { DEFAULT_HORIZON_YEARS }

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            monthly_units: 10_000,
            yearly_view: false,
            competitor_rate: DEFAULT_COMPETITOR_RATE,
            alternative_rate: DEFAULT_ALTERNATIVE_RATE,
            alternative_fixed_monthly: DEFAULT_ALTERNATIVE_FIXED_MONTHLY,
            utility_price_change_rate: 0.0,
            discount_fraction: DEFAULT_DISCOUNT_FRACTION,
            discount_interval_years: DEFAULT_DISCOUNT_INTERVAL_YEARS,
            volume_change_rate: 0.0,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl ScenarioParams {
    /// Load parameters from a JSON file; absent fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let params: Self = serde_json::from_reader(file)?;
        info!("loaded scenario parameters from {}", path.display());
        Ok(params)
    }

    /// Validate the external input domain and rate assumptions.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_monthly_units(self.monthly_units)?;
        validate_horizon_years(self.horizon_years)?;
        self.alternative_drift().validate()?;
        self.utility_drift().validate()?;
        Ok(())
    }

    /// Reporting period implied by the view-mode flag
    pub fn period(&self) -> Period {
        Period::from_yearly_flag(self.yearly_view)
    }

    /// The authoritative utility schedule used by every scenario
    pub fn utility_schedule(&self) -> TariffSchedule {
        TariffSchedule::default_utility_slab()
    }

    fn utility_drift(&self) -> ProjectionRateSchedule {
        ProjectionRateSchedule::with_inflation(self.utility_price_change_rate)
    }

    fn alternative_drift(&self) -> ProjectionRateSchedule {
        ProjectionRateSchedule {
            annual_price_change_rate: 0.0,
            discount_fraction: self.discount_fraction,
            discount_interval_years: self.discount_interval_years,
            annual_volume_change_rate: self.volume_change_rate,
        }
    }

    /// Run the single-period comparison for this scenario.
    pub fn comparison(&self) -> ComparisonResult {
        compare(
            self.monthly_units,
            self.period(),
            &self.utility_schedule(),
            self.competitor_rate,
            self.alternative_rate,
            self.alternative_fixed_monthly,
        )
    }

    /// Build the projection configuration for this scenario.
    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            monthly_units: self.monthly_units,
            utility: self.utility_schedule(),
            competitor_year1_rate: self.competitor_rate,
            alternative: AlternativeTerms {
                base_rate: self.alternative_rate,
                fixed_monthly: self.alternative_fixed_monthly,
            },
            utility_rates: self.utility_drift(),
            alternative_rates: self.alternative_drift(),
            horizon_years: self.horizon_years,
        }
    }
}

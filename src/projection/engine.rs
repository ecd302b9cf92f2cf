//! Multi-year projection engine
//!
//! Advances the scheme comparison across the horizon, compounding each
//! scheme's drift schedule independently and accumulating savings. Every
//! row is a pure function of the configuration, so the series is cheap to
//! recompute and nothing is cached beyond the year-1 utility bill.

use log::debug;
use serde::{Deserialize, Serialize};

use super::rates::ProjectionRateSchedule;
use super::series::{ProjectionRow, ProjectionSeries};
use crate::error::EngineError;
use crate::tariff::{compute_slab_bill, TariffSchedule};

/// Alternative-provider pricing terms at the start of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeTerms {
    /// Year-1 unit rate
    pub base_rate: f64,
    /// Fixed monthly surcharge, constant across the horizon
    pub fixed_monthly: f64,
}

/// Full configuration of one projection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Monthly consumption at the start of the horizon
    pub monthly_units: u64,
    /// Utility tariff used for the year-1 baseline bill
    pub utility: TariffSchedule,
    /// Competitor flat rate at year 1, carried for report context
    pub competitor_year1_rate: f64,
    /// Alternative-provider pricing terms
    pub alternative: AlternativeTerms,
    /// Drift assumptions for the utility scheme
    pub utility_rates: ProjectionRateSchedule,
    /// Drift assumptions for the alternative scheme; its volume drift is
    /// the shared physical-load degradation for the whole projection
    pub alternative_rates: ProjectionRateSchedule,
    /// Number of years to project, at least 1
    pub horizon_years: u32,
}

impl ProjectionConfig {
    /// Check horizon, schedules, and rates.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.horizon_years == 0 {
            return Err(EngineError::InvalidInput(
                "projection horizon must be at least 1 year".to_string(),
            ));
        }
        self.utility.validate()?;
        self.utility_rates.validate()?;
        self.alternative_rates.validate()?;

        if !self.competitor_year1_rate.is_finite() || self.competitor_year1_rate < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "competitor rate {} is negative",
                self.competitor_year1_rate
            )));
        }
        if !self.alternative.base_rate.is_finite() || self.alternative.base_rate < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "alternative base rate {} is negative",
                self.alternative.base_rate
            )));
        }
        if !self.alternative.fixed_monthly.is_finite() || self.alternative.fixed_monthly < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "alternative fixed charge {} is negative",
                self.alternative.fixed_monthly
            )));
        }
        Ok(())
    }
}

/// Projection engine for one validated configuration.
pub struct ProjectionEngine {
    config: ProjectionConfig,
    /// Year-1 monthly utility bill; only this aggregate is inflated in
    /// later years, slab bounds are never re-escalated individually
    base_monthly_bill: f64,
}

impl ProjectionEngine {
    /// Validate the configuration and fix the year-1 utility baseline.
    pub fn new(config: ProjectionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let base_monthly_bill = compute_slab_bill(config.monthly_units, &config.utility).total_cost;
        debug!(
            "projection baseline: {} units/month, monthly utility bill {:.2}",
            config.monthly_units, base_monthly_bill
        );
        Ok(Self {
            config,
            base_monthly_bill,
        })
    }

    /// Compute the row for projection year `year` (1-indexed).
    pub fn row(&self, year: u32) -> ProjectionRow {
        let config = &self.config;
        let base_annual_units = config.monthly_units as f64 * 12.0;

        // Shared physical-load degradation; both schemes consume the same
        // volume, tracked on the alternative schedule.
        let effective_volume = base_annual_units * config.alternative_rates.volume_factor(year);

        let utility_cost =
            self.base_monthly_bill * 12.0 * config.utility_rates.price_factor(year);

        let effective_alternative_rate = config.alternative.base_rate
            * config.alternative_rates.price_factor(year)
            * config.alternative_rates.discount_factor(year);

        let alternative_cost =
            effective_volume * effective_alternative_rate + config.alternative.fixed_monthly * 12.0;

        ProjectionRow {
            year,
            utility_cost,
            effective_alternative_rate,
            effective_volume,
            alternative_cost,
            annual_savings: utility_cost - alternative_cost,
            is_discount_year: config.alternative_rates.is_discount_year(year),
        }
    }

    /// Lazy year-by-year row sequence over the horizon.
    pub fn rows(&self) -> impl Iterator<Item = ProjectionRow> + '_ {
        (1..=self.config.horizon_years).map(move |year| self.row(year))
    }

    /// Run the projection and accumulate cumulative savings.
    pub fn project(&self) -> ProjectionSeries {
        let rows: Vec<ProjectionRow> = self.rows().collect();
        let cumulative_savings = rows.iter().map(|row| row.annual_savings).sum();

        ProjectionSeries {
            rows,
            cumulative_savings,
            competitor_year1_cost: self.config.monthly_units as f64
                * 12.0
                * self.config.competitor_year1_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::TariffSchedule;
    use approx::assert_relative_eq;

    fn base_config() -> ProjectionConfig {
        ProjectionConfig {
            monthly_units: 10_000,
            utility: TariffSchedule::default_utility_slab(),
            competitor_year1_rate: 7.50,
            alternative: AlternativeTerms {
                base_rate: 5.40,
                fixed_monthly: 200.0,
            },
            utility_rates: ProjectionRateSchedule::flat(),
            alternative_rates: ProjectionRateSchedule::with_step_discount(0.02, 4),
            horizon_years: 20,
        }
    }

    #[test]
    fn test_row_count_matches_horizon() {
        let engine = ProjectionEngine::new(base_config()).unwrap();
        let series = engine.project();

        assert_eq!(series.rows.len(), 20);
        assert_eq!(series.horizon_years(), 20);
        for (idx, row) in series.rows.iter().enumerate() {
            assert_eq!(row.year, idx as u32 + 1);
        }
    }

    #[test]
    fn test_cumulative_is_sum_of_annual_savings() {
        let engine = ProjectionEngine::new(base_config()).unwrap();
        let series = engine.project();

        let summed: f64 = series.rows.iter().map(|row| row.annual_savings).sum();
        assert_relative_eq!(series.cumulative_savings, summed);
    }

    #[test]
    fn test_discount_steps_across_horizon() {
        let engine = ProjectionEngine::new(base_config()).unwrap();
        let series = engine.project();

        // Years 1-4 undiscounted, one step at year 5, the next at year 9
        for row in &series.rows[0..4] {
            assert!((row.effective_alternative_rate - 5.40).abs() < 1e-9);
            assert!(!row.is_discount_year);
        }
        for row in &series.rows[4..8] {
            assert!((row.effective_alternative_rate - 5.292).abs() < 1e-9);
        }
        assert!(series.rows[4].is_discount_year);
        assert!((series.rows[8].effective_alternative_rate - 5.18616).abs() < 1e-9);
        assert!(series.rows[8].is_discount_year);
        assert!(!series.rows[9].is_discount_year);
    }

    #[test]
    fn test_utility_inflation_compounds_on_aggregate() {
        let mut config = base_config();
        config.utility_rates = ProjectionRateSchedule::with_inflation(0.03);
        let engine = ProjectionEngine::new(config.clone()).unwrap();

        let base_annual =
            compute_slab_bill(config.monthly_units, &config.utility).total_cost * 12.0;
        let series = engine.project();

        assert_relative_eq!(series.rows[0].utility_cost, base_annual);
        assert_relative_eq!(series.rows[1].utility_cost, base_annual * 1.03);
        assert_relative_eq!(series.rows[9].utility_cost, base_annual * 1.03f64.powi(9));
    }

    #[test]
    fn test_volume_degradation_hits_alternative_cost() {
        let mut config = base_config();
        config.alternative_rates.annual_volume_change_rate = 0.005;
        let engine = ProjectionEngine::new(config.clone()).unwrap();
        let series = engine.project();

        let base_volume = config.monthly_units as f64 * 12.0;
        assert_relative_eq!(series.rows[0].effective_volume, base_volume);
        assert_relative_eq!(
            series.rows[2].effective_volume,
            base_volume * 0.995f64.powi(2)
        );

        // Fixed surcharge stays constant even as volume degrades
        let row = &series.rows[2];
        assert_relative_eq!(
            row.alternative_cost,
            row.effective_volume * row.effective_alternative_rate + 200.0 * 12.0
        );
    }

    #[test]
    fn test_flat_rates_give_constant_rows() {
        let mut config = base_config();
        config.alternative_rates = ProjectionRateSchedule::flat();
        let engine = ProjectionEngine::new(config).unwrap();
        let series = engine.project();

        let first = &series.rows[0];
        for row in &series.rows {
            assert_relative_eq!(row.utility_cost, first.utility_cost);
            assert_relative_eq!(row.alternative_cost, first.alternative_cost);
            assert!(!row.is_discount_year);
        }
        assert_relative_eq!(
            series.cumulative_savings,
            first.annual_savings * series.rows.len() as f64,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let mut config = base_config();
        config.horizon_years = 0;
        assert!(matches!(
            ProjectionEngine::new(config),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_competitor_context_cost() {
        let engine = ProjectionEngine::new(base_config()).unwrap();
        let series = engine.project();
        assert_relative_eq!(series.competitor_year1_cost, 10_000.0 * 12.0 * 7.50);
    }
}

//! Comparative cost model
//!
//! Computes the three parallel scheme costs for one period and the derived
//! savings metrics. Costs are always built monthly-first and only then
//! scaled to the yearly view, so a fixed monthly charge is never combined
//! with an already-scaled consumption total.

use serde::Serialize;

use crate::error::EngineError;
use crate::tariff::{compute_slab_bill, TariffSchedule};

/// Reporting period for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    Monthly,
    Yearly,
}

impl Period {
    /// Map the view-mode flag of the input surface onto a period
    pub fn from_yearly_flag(yearly: bool) -> Self {
        if yearly {
            Period::Yearly
        } else {
            Period::Monthly
        }
    }

    /// Factor applied uniformly to all monthly totals
    pub fn multiplier(self) -> f64 {
        match self {
            Period::Monthly => 1.0,
            Period::Yearly => 12.0,
        }
    }
}

/// Scheme costs and savings for a single period.
///
/// All figures are unrounded; rounding happens only at the presentation
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Utility cost under the progressive slab schedule
    pub utility_cost: f64,
    /// Competitor cost at its flat rate
    pub competitor_cost: f64,
    /// Alternative-provider cost: flat rate plus fixed monthly surcharge
    pub alternative_cost: f64,
    /// `utility_cost - alternative_cost`
    pub savings_vs_utility: f64,
    /// `competitor_cost - alternative_cost`
    pub savings_vs_competitor: f64,
    /// Savings as a percentage of the utility baseline; 0 when the
    /// baseline itself is 0
    pub savings_percent_vs_utility: f64,
}

impl ComparisonResult {
    /// Savings percentage, reporting [`EngineError::DivisionUndefined`]
    /// instead of the 0% sentinel when the utility baseline is zero.
    pub fn checked_savings_percent(&self) -> Result<f64, EngineError> {
        if self.utility_cost == 0.0 {
            return Err(EngineError::DivisionUndefined);
        }
        Ok(self.savings_percent_vs_utility)
    }
}

/// Compare the three schemes for one month's (or one year's) consumption.
///
/// The utility bill comes from the slab calculator; competitor and
/// alternative are flat-rate, the alternative carrying a fixed monthly
/// surcharge. All three monthly totals are scaled by the same period
/// multiplier before any savings are derived, which keeps the results
/// mutually consistent under either view.
pub fn compare(
    units: u64,
    period: Period,
    utility: &TariffSchedule,
    competitor_rate: f64,
    alternative_rate: f64,
    alternative_fixed_monthly: f64,
) -> ComparisonResult {
    let multiplier = period.multiplier();

    let utility_monthly = compute_slab_bill(units, utility).total_cost;
    let competitor_monthly = units as f64 * competitor_rate;
    let alternative_monthly = units as f64 * alternative_rate + alternative_fixed_monthly;

    let utility_cost = utility_monthly * multiplier;
    let competitor_cost = competitor_monthly * multiplier;
    let alternative_cost = alternative_monthly * multiplier;

    let savings_vs_utility = utility_cost - alternative_cost;
    let savings_percent_vs_utility = if utility_cost == 0.0 {
        0.0
    } else {
        100.0 * savings_vs_utility / utility_cost
    };

    ComparisonResult {
        utility_cost,
        competitor_cost,
        alternative_cost,
        savings_vs_utility,
        savings_vs_competitor: competitor_cost - alternative_cost,
        savings_percent_vs_utility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::{
        TariffSchedule, DEFAULT_ALTERNATIVE_FIXED_MONTHLY, DEFAULT_ALTERNATIVE_RATE,
        DEFAULT_COMPETITOR_RATE,
    };
    use approx::assert_relative_eq;

    fn default_comparison(units: u64, period: Period) -> ComparisonResult {
        compare(
            units,
            period,
            &TariffSchedule::default_utility_slab(),
            DEFAULT_COMPETITOR_RATE,
            DEFAULT_ALTERNATIVE_RATE,
            DEFAULT_ALTERNATIVE_FIXED_MONTHLY,
        )
    }

    #[test]
    fn test_flat_competitor_costs() {
        let monthly = default_comparison(10_000, Period::Monthly);
        assert_eq!(monthly.competitor_cost, 75_000.0);

        let yearly = default_comparison(10_000, Period::Yearly);
        assert_eq!(yearly.competitor_cost, 900_000.0);
    }

    #[test]
    fn test_yearly_is_twelve_times_monthly() {
        for units in [0u64, 500, 10_000, 250_000] {
            let monthly = default_comparison(units, Period::Monthly);
            let yearly = default_comparison(units, Period::Yearly);

            assert_relative_eq!(yearly.utility_cost, 12.0 * monthly.utility_cost);
            assert_relative_eq!(yearly.competitor_cost, 12.0 * monthly.competitor_cost);
            assert_relative_eq!(yearly.alternative_cost, 12.0 * monthly.alternative_cost);
            assert_relative_eq!(yearly.savings_vs_utility, 12.0 * monthly.savings_vs_utility);
        }
    }

    #[test]
    fn test_savings_identities() {
        let result = default_comparison(10_000, Period::Monthly);
        assert_relative_eq!(
            result.savings_vs_utility,
            result.utility_cost - result.alternative_cost
        );
        assert_relative_eq!(
            result.savings_vs_competitor,
            result.competitor_cost - result.alternative_cost
        );
        assert_relative_eq!(
            result.savings_percent_vs_utility,
            100.0 * result.savings_vs_utility / result.utility_cost
        );
    }

    #[test]
    fn test_fixed_charge_not_scaled_twice() {
        // The alternative's fixed charge is monthly; under the yearly view
        // it contributes exactly 12x, never 144x.
        let yearly = default_comparison(10_000, Period::Yearly);
        let expected = 12.0 * (10_000.0 * DEFAULT_ALTERNATIVE_RATE + 200.0);
        assert_relative_eq!(yearly.alternative_cost, expected);
    }

    #[test]
    fn test_zero_units_pays_fixed_charges() {
        let result = default_comparison(0, Period::Monthly);
        assert_eq!(result.utility_cost, 130.0);
        assert_eq!(result.competitor_cost, 0.0);
        assert_eq!(result.alternative_cost, 200.0);
    }

    #[test]
    fn test_zero_baseline_percent_sentinel() {
        let free_utility = TariffSchedule::flat(0.0).unwrap();
        let result = compare(1_000, Period::Monthly, &free_utility, 7.50, 5.50, 200.0);

        assert_eq!(result.utility_cost, 0.0);
        assert_eq!(result.savings_percent_vs_utility, 0.0);
        assert_eq!(
            result.checked_savings_percent(),
            Err(crate::EngineError::DivisionUndefined)
        );
    }

    #[test]
    fn test_checked_percent_on_nonzero_baseline() {
        let result = default_comparison(10_000, Period::Monthly);
        assert_eq!(
            result.checked_savings_percent().unwrap(),
            result.savings_percent_vs_utility
        );
    }
}

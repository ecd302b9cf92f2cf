//! Slab bill computation
//!
//! Walks the progressive bands, consuming each block of units at its own
//! rate, then applies duty on the variable charge and adds the fixed
//! monthly charge. Pure function of its inputs; results are derived on
//! every call and never cached.

use serde::Serialize;

use super::schedule::{Pricing, TariffBand, TariffSchedule};

/// Output of one billing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BillingResult {
    /// Consumption-based charge across all bands (or flat)
    pub variable_charge: f64,
    /// Duty on the variable charge only
    pub duty_charge: f64,
    /// Fixed monthly charge, independent of consumption
    pub fixed_charge: f64,
    /// Sum of the three components
    pub total_cost: f64,
}

/// Compute one monthly bill for `units` under `schedule`.
///
/// `units = 0` yields only the fixed charge. Consumption past the last
/// finite band bound is absorbed entirely by the unbounded final band.
pub fn compute_slab_bill(units: u64, schedule: &TariffSchedule) -> BillingResult {
    let variable_charge = match &schedule.pricing {
        Pricing::Flat(rate) => units as f64 * rate,
        Pricing::Slabbed(bands) => band_consumption(units, bands)
            .iter()
            .zip(bands)
            .map(|(consumed, band)| *consumed as f64 * band.rate)
            .sum(),
    };

    let duty_charge = variable_charge * schedule.duty_rate;
    let fixed_charge = schedule.fixed_monthly_charge;

    BillingResult {
        variable_charge,
        duty_charge,
        fixed_charge,
        total_cost: fixed_charge + variable_charge + duty_charge,
    }
}

/// Units consumed in each band, in band order.
///
/// The consumed counts always sum back to `units` because the final band
/// is unbounded.
pub fn band_consumption(units: u64, bands: &[TariffBand]) -> Vec<u64> {
    let mut remaining = units;
    let mut prev_upper = 0u64;

    bands
        .iter()
        .map(|band| {
            let consumed = match band.upper {
                Some(upper) => {
                    let width = upper.saturating_sub(prev_upper);
                    prev_upper = upper;
                    remaining.min(width)
                }
                None => remaining,
            };
            remaining -= consumed;
            consumed
        })
        .collect()
}

//! Year-over-year drift assumptions
//!
//! Describes how a scheme's effective unit rate and the consumption volume
//! move across the projection horizon. All factors compound
//! multiplicatively; nothing here is additive.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Drift assumptions for one scheme over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRateSchedule {
    /// Signed annual price drift; positive = inflation, negative = decrease
    pub annual_price_change_rate: f64,
    /// Multiplicative reduction applied once per discount interval
    pub discount_fraction: f64,
    /// Years between successive discount steps; 0 disables discounts
    pub discount_interval_years: u32,
    /// Signed annual consumption drift; positive = degradation
    pub annual_volume_change_rate: f64,
}

impl ProjectionRateSchedule {
    /// No drift at all: constant price and volume, no discounts
    pub fn flat() -> Self {
        Self {
            annual_price_change_rate: 0.0,
            discount_fraction: 0.0,
            discount_interval_years: 0,
            annual_volume_change_rate: 0.0,
        }
    }

    /// Pure price inflation (or deflation when negative)
    pub fn with_inflation(annual_price_change_rate: f64) -> Self {
        Self {
            annual_price_change_rate,
            ..Self::flat()
        }
    }

    /// Step discount: the rate drops by `fraction` once every
    /// `interval_years`
    pub fn with_step_discount(fraction: f64, interval_years: u32) -> Self {
        Self {
            discount_fraction: fraction,
            discount_interval_years: interval_years,
            ..Self::flat()
        }
    }

    /// Check the schedule invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.annual_price_change_rate.is_finite()
            || !self.annual_volume_change_rate.is_finite()
        {
            return Err(EngineError::InvalidInput(
                "non-finite drift rate".to_string(),
            ));
        }
        if !self.discount_fraction.is_finite() || !(0.0..1.0).contains(&self.discount_fraction) {
            return Err(EngineError::InvalidInput(format!(
                "discount fraction {} outside [0, 1)",
                self.discount_fraction
            )));
        }
        if self.discount_interval_years == 0 && self.discount_fraction != 0.0 {
            return Err(EngineError::InvalidInput(
                "discount fraction set but interval disabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Compounded price multiplier for projection year `year` (1-indexed).
    pub fn price_factor(&self, year: u32) -> f64 {
        (1.0 + self.annual_price_change_rate).powi(year.saturating_sub(1) as i32)
    }

    /// Discount multiplier for projection year `year`.
    ///
    /// Years 1 through `interval` use the undiscounted rate; the first
    /// step lands at the start of year `interval + 1`, the second at
    /// `2 * interval + 1`, and so on.
    pub fn discount_factor(&self, year: u32) -> f64 {
        if self.discount_interval_years == 0 {
            return 1.0;
        }
        let steps = year.saturating_sub(1) / self.discount_interval_years;
        (1.0 - self.discount_fraction).powi(steps as i32)
    }

    /// True when `year` is the first year of a new discount step.
    pub fn is_discount_year(&self, year: u32) -> bool {
        self.discount_interval_years != 0
            && year > 1
            && (year - 1) % self.discount_interval_years == 0
    }

    /// Compounded volume multiplier for projection year `year`.
    pub fn volume_factor(&self, year: u32) -> f64 {
        (1.0 - self.annual_volume_change_rate).powi(year.saturating_sub(1) as i32)
    }
}

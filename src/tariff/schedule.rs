//! Tariff schedule configuration
//!
//! A schedule is either progressive (ordered slab bands, each block of
//! consumption charged at its own rate) or flat (one rate for every unit),
//! plus a duty fraction on the variable charge and a fixed monthly charge.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Default flat rate charged by the competitor supplier (per unit)
pub const DEFAULT_COMPETITOR_RATE: f64 = 7.50;

/// Default flat rate charged by the alternative provider (per unit)
pub const DEFAULT_ALTERNATIVE_RATE: f64 = 5.50;

/// Default fixed monthly surcharge of the alternative provider
pub const DEFAULT_ALTERNATIVE_FIXED_MONTHLY: f64 = 200.0;

/// One progressive pricing tier.
///
/// `upper` is the cumulative unit bound of the band, inclusive; `None`
/// marks the unbounded final band. Band widths follow from consecutive
/// bounds, so `[100, 300, 500, None]` prices units 1-100, 101-300,
/// 301-500, and 501+.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffBand {
    /// Cumulative inclusive upper unit bound; `None` for the final band
    pub upper: Option<u64>,
    /// Charge per unit inside this band
    pub rate: f64,
}

impl TariffBand {
    /// Band covering units up to `upper` (cumulative, inclusive)
    pub fn bounded(upper: u64, rate: f64) -> Self {
        Self {
            upper: Some(upper),
            rate,
        }
    }

    /// Unbounded final band
    pub fn open(rate: f64) -> Self {
        Self { upper: None, rate }
    }
}

/// Variable-charge pricing model for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pricing {
    /// Progressive slab bands, ordered by upper bound ascending
    Slabbed(Vec<TariffBand>),
    /// Single rate applied to every unit
    Flat(f64),
}

/// Configuration for one pricing scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffSchedule {
    /// Progressive bands or a flat rate
    pub pricing: Pricing,
    /// Duty fraction applied to the variable charge only (0 if none)
    pub duty_rate: f64,
    /// Fixed charge added to every monthly bill (0 if none)
    pub fixed_monthly_charge: f64,
}

impl TariffSchedule {
    /// Progressive schedule from an ordered band list
    pub fn slabbed(
        bands: Vec<TariffBand>,
        duty_rate: f64,
        fixed_monthly_charge: f64,
    ) -> Result<Self, EngineError> {
        let schedule = Self {
            pricing: Pricing::Slabbed(bands),
            duty_rate,
            fixed_monthly_charge,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Flat schedule with no duty and no fixed charge
    pub fn flat(rate: f64) -> Result<Self, EngineError> {
        Self::flat_with_fixed(rate, 0.0)
    }

    /// Flat schedule with a fixed monthly charge
    pub fn flat_with_fixed(rate: f64, fixed_monthly_charge: f64) -> Result<Self, EngineError> {
        let schedule = Self {
            pricing: Pricing::Flat(rate),
            duty_rate: 0.0,
            fixed_monthly_charge,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// The progressive utility tariff: four bands with a 16% duty on the
    /// variable charge and a fixed monthly charge of 130.
    pub fn default_utility_slab() -> Self {
        Self {
            pricing: Pricing::Slabbed(vec![
                TariffBand::bounded(100, 6.25),
                TariffBand::bounded(300, 13.07),
                TariffBand::bounded(500, 17.35),
                TariffBand::open(19.65),
            ]),
            duty_rate: 0.16,            // 16% duty on variable charge
            fixed_monthly_charge: 130.0,
        }
    }

    /// Default competitor schedule: flat rate, no duty, no fixed charge
    pub fn default_competitor() -> Self {
        Self {
            pricing: Pricing::Flat(DEFAULT_COMPETITOR_RATE),
            duty_rate: 0.0,
            fixed_monthly_charge: 0.0,
        }
    }

    /// Default alternative-provider schedule: flat rate plus fixed monthly
    pub fn default_alternative() -> Self {
        Self {
            pricing: Pricing::Flat(DEFAULT_ALTERNATIVE_RATE),
            duty_rate: 0.0,
            fixed_monthly_charge: DEFAULT_ALTERNATIVE_FIXED_MONTHLY,
        }
    }

    /// Check the schedule invariants.
    ///
    /// Bands must be strictly ascending with exactly one unbounded band in
    /// last position; duty must lie in [0, 1); all amounts must be finite
    /// and non-negative.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.duty_rate.is_finite() || !(0.0..1.0).contains(&self.duty_rate) {
            return Err(EngineError::InvalidInput(format!(
                "duty rate {} outside [0, 1)",
                self.duty_rate
            )));
        }
        if !self.fixed_monthly_charge.is_finite() || self.fixed_monthly_charge < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "fixed monthly charge {} is negative",
                self.fixed_monthly_charge
            )));
        }

        match &self.pricing {
            Pricing::Flat(rate) => {
                if !rate.is_finite() || *rate < 0.0 {
                    return Err(EngineError::InvalidInput(format!(
                        "flat rate {rate} is negative"
                    )));
                }
            }
            Pricing::Slabbed(bands) => validate_bands(bands)?,
        }

        Ok(())
    }
}

fn validate_bands(bands: &[TariffBand]) -> Result<(), EngineError> {
    if bands.is_empty() {
        return Err(EngineError::InvalidInput("empty band list".to_string()));
    }

    let mut prev_upper = 0u64;
    for (idx, band) in bands.iter().enumerate() {
        if !band.rate.is_finite() || band.rate < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "band {idx} rate {} is negative",
                band.rate
            )));
        }
        match band.upper {
            Some(upper) => {
                // A bounded band anywhere but the tail must keep bounds ascending
                if idx == bands.len() - 1 {
                    return Err(EngineError::InvalidInput(
                        "final band must be unbounded".to_string(),
                    ));
                }
                if upper <= prev_upper {
                    return Err(EngineError::InvalidInput(format!(
                        "band {idx} upper bound {upper} does not ascend past {prev_upper}"
                    )));
                }
                prev_upper = upper;
            }
            None => {
                if idx != bands.len() - 1 {
                    return Err(EngineError::InvalidInput(format!(
                        "unbounded band at position {idx} is not last"
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_utility_slab_is_valid() {
        let schedule = TariffSchedule::default_utility_slab();
        assert!(schedule.validate().is_ok());
        assert_eq!(schedule.duty_rate, 0.16);
        assert_eq!(schedule.fixed_monthly_charge, 130.0);

        match &schedule.pricing {
            Pricing::Slabbed(bands) => {
                assert_eq!(bands.len(), 4);
                assert_eq!(bands[0].upper, Some(100));
                assert_eq!(bands[3].upper, None);
            }
            Pricing::Flat(_) => panic!("utility preset must be slabbed"),
        }
    }

    #[test]
    fn test_flat_presets() {
        let competitor = TariffSchedule::default_competitor();
        assert_eq!(competitor.pricing, Pricing::Flat(7.50));
        assert_eq!(competitor.fixed_monthly_charge, 0.0);

        let alternative = TariffSchedule::default_alternative();
        assert_eq!(alternative.pricing, Pricing::Flat(5.50));
        assert_eq!(alternative.fixed_monthly_charge, 200.0);
    }

    #[test]
    fn test_rejects_non_ascending_bands() {
        let result = TariffSchedule::slabbed(
            vec![
                TariffBand::bounded(300, 6.25),
                TariffBand::bounded(100, 13.07),
                TariffBand::open(19.65),
            ],
            0.0,
            0.0,
        );
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bounded_final_band() {
        let result = TariffSchedule::slabbed(
            vec![TariffBand::bounded(100, 6.25), TariffBand::bounded(300, 13.07)],
            0.0,
            0.0,
        );
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_misplaced_open_band() {
        let result = TariffSchedule::slabbed(
            vec![TariffBand::open(6.25), TariffBand::open(13.07)],
            0.0,
            0.0,
        );
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bad_duty_and_fixed() {
        let bands = vec![TariffBand::open(5.0)];
        assert!(TariffSchedule::slabbed(bands.clone(), 1.0, 0.0).is_err());
        assert!(TariffSchedule::slabbed(bands.clone(), -0.1, 0.0).is_err());
        assert!(TariffSchedule::slabbed(bands, 0.16, -5.0).is_err());
        assert!(TariffSchedule::flat(-1.0).is_err());
    }
}

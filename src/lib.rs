//! Electricity tariff comparison and savings projection engine
//!
//! Compares a progressive slab utility tariff, a flat-rate competitor,
//! and a flat-rate alternative provider with a fixed monthly surcharge
//! for a given consumption volume, and projects the comparison over a
//! multi-year horizon under compounding rate-drift assumptions.
//!
//! Everything here is a pure function over value types: no I/O, no shared
//! state, no rounding. Formatting and rendering belong to the callers.

pub mod comparison;
pub mod error;
pub mod input;
pub mod projection;
pub mod scenario;
pub mod tariff;

pub use comparison::{compare, ComparisonResult, Period};
pub use error::EngineError;
pub use scenario::ScenarioParams;
pub use tariff::{compute_slab_bill, BillingResult, TariffBand, TariffSchedule};

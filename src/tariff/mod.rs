//! Tariff schedules and slab billing

mod billing;
mod schedule;

pub use billing::{band_consumption, compute_slab_bill, BillingResult};
pub use schedule::{
    Pricing, TariffBand, TariffSchedule, DEFAULT_ALTERNATIVE_FIXED_MONTHLY,
    DEFAULT_ALTERNATIVE_RATE, DEFAULT_COMPETITOR_RATE,
};

//! Projection output rows

use serde::Serialize;

/// One year's entry in the projection table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    /// Projection year, 1-indexed
    pub year: u32,
    /// Utility cost for this year (inflated aggregate annual bill)
    pub utility_cost: f64,
    /// Alternative-provider unit rate in effect this year
    pub effective_alternative_rate: f64,
    /// Annual consumption volume after degradation
    pub effective_volume: f64,
    /// Alternative-provider cost for this year
    pub alternative_cost: f64,
    /// `utility_cost - alternative_cost`
    pub annual_savings: f64,
    /// True when this year begins a new discount step
    pub is_discount_year: bool,
}

/// Ordered year-by-year rows plus the accumulated total.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSeries {
    /// One row per projection year, in year order
    pub rows: Vec<ProjectionRow>,
    /// Sum of every row's annual savings
    pub cumulative_savings: f64,
    /// Competitor annual cost at its year-1 rate, for report context
    pub competitor_year1_cost: f64,
}

impl ProjectionSeries {
    /// Number of projected years
    pub fn horizon_years(&self) -> usize {
        self.rows.len()
    }
}

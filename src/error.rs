//! Engine error types
//!
//! Every fallible operation reports at its own boundary; nothing here is
//! retryable and no error is fatal to the caller.

use thiserror::Error;

/// Errors surfaced by the tariff and projection engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input outside the documented domain: out-of-range consumption,
    /// a zero projection horizon, or a malformed tariff schedule.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Savings percentage requested against a zero utility baseline.
    #[error("savings percent undefined: utility cost baseline is zero")]
    DivisionUndefined,
}

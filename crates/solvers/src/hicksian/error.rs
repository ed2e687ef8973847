use demand_core::{DomainError, MarketError};
use thiserror::Error;

use crate::intersection;

/// Errors that can occur while solving for Hicksian demand.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("target utility must be finite and positive, got {value}")]
    InvalidUtility { value: f64 },

    #[error("intersection search failed: {0}")]
    Intersection(#[from] intersection::Error),

    #[error("re-anchoring left the curve domain: {0}")]
    Domain(#[from] DomainError),

    #[error("re-anchored budget is invalid: {0}")]
    Market(#[from] MarketError),
}

use demand_core::DomainError;
use thiserror::Error;

use crate::intersection;

/// Errors that can occur while solving for Marshallian demand.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("intersection search failed: {0}")]
    Intersection(#[from] intersection::Error),

    #[error("re-anchoring left the utility domain: {0}")]
    Domain(#[from] DomainError),
}

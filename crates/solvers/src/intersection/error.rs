use demand_core::DomainError;
use thiserror::Error;

/// Errors that can occur while bracketing a crossing.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("budget buys only {max_x1} units of good 1; the search grid needs at least one")]
    EmptyGrid { max_x1: f64 },

    #[error("no candidates to scan")]
    NoCandidates,

    #[error("curve evaluation failed: {0}")]
    Domain(#[from] DomainError),
}

use demand_core::DomainError;
use thiserror::Error;

use crate::{hicksian, iteration::Status};

/// Errors that can occur during a Hicksian/Marshallian round trip.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("hicksian solve failed: {0}")]
    Hicksian(#[from] hicksian::Error),

    #[error("hicksian solve in round {round} finished with {status:?}")]
    Unconverged { round: usize, status: Status },

    #[error("budget-line bundle left the utility domain: {0}")]
    Domain(#[from] DomainError),
}

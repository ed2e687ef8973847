//! Settings and outcomes shared by the fixed-point demand loops.

use thiserror::Error;

use crate::intersection;

/// Configuration for an outer fixed-point loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    intersection: intersection::Config,
}

/// Errors that can occur when validating an outer loop config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iters: 100,
            intersection: intersection::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(
        tolerance: f64,
        max_iters: usize,
        intersection: intersection::Config,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
            intersection,
        })
    }

    /// Returns the bracket width at or below which the loop has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of re-anchoring steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the config used for each intersection search.
    #[must_use]
    pub fn intersection(&self) -> &intersection::Config {
        &self.intersection
    }
}

/// Indicates how an outer loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The crossing bracket is no wider than the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Control actions an observer can return from an outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and report the current bracket.
    StopEarly,
}

impl Status {
    /// Decides whether the loop should finish at the current bracket width.
    pub(crate) fn check(
        action: Option<Action>,
        width: f64,
        iter: usize,
        config: &Config,
    ) -> Option<Self> {
        if let Some(Action::StopEarly) = action {
            return Some(Self::StoppedByObserver);
        }
        if width <= config.tolerance {
            return Some(Self::Converged);
        }
        if iter >= config.max_iters {
            return Some(Self::MaxIters);
        }
        None
    }
}

use thiserror::Error;

use crate::hicksian;

/// Configuration for the Hicksian/Marshallian round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    gap: f64,
    max_rounds: usize,
    dual: hicksian::Config,
}

/// Errors that can occur when validating a round-trip config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("gap tolerance must be finite and positive")]
    Gap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap: 1e-5,
            max_rounds: 100,
            dual: hicksian::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated gap tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `gap` is not finite and positive.
    pub fn new(
        gap: f64,
        max_rounds: usize,
        dual: hicksian::Config,
    ) -> Result<Self, ConfigError> {
        if !gap.is_finite() || gap <= 0.0 {
            return Err(ConfigError::Gap);
        }

        Ok(Self {
            gap,
            max_rounds,
            dual,
        })
    }

    /// Returns how far below the budget the expenditure may stay at convergence.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Returns the config used for each Hicksian solve.
    #[must_use]
    pub fn dual(&self) -> &hicksian::Config {
        &self.dual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gap_is_tight() {
        let config = Config::default();
        assert!((config.gap() - 1e-5).abs() < f64::EPSILON);
        assert_eq!(config.max_rounds(), 100);
        assert_eq!(config.dual(), &hicksian::Config::default());
    }

    #[test]
    fn rejects_invalid_gap() {
        let dual = hicksian::Config::default();
        assert_eq!(Config::new(0.0, 10, dual), Err(ConfigError::Gap));
        assert_eq!(Config::new(-1.0, 10, dual), Err(ConfigError::Gap));
        assert_eq!(Config::new(f64::INFINITY, 10, dual), Err(ConfigError::Gap));
    }
}

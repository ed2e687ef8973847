use thiserror::Error;

use crate::{Bundle, DomainError};

/// Errors that can occur when constructing preferences.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PreferenceError {
    #[error("exponent of good {good} must be finite and positive, got {value}")]
    Exponent { good: usize, value: f64 },
}

/// Cobb-Douglas preferences, `U(x1, x2) = x1^t1 * x2^t2`.
///
/// The exponents are usually chosen to sum to one, but nothing here
/// requires it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CobbDouglas {
    t1: f64,
    t2: f64,
}

impl CobbDouglas {
    /// Creates preferences with validated exponents.
    ///
    /// # Errors
    ///
    /// Returns an error if either exponent is non-finite or not positive.
    pub fn new(t1: f64, t2: f64) -> Result<Self, PreferenceError> {
        for (good, value) in [(1, t1), (2, t2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PreferenceError::Exponent { good, value });
            }
        }
        Ok(Self { t1, t2 })
    }

    #[must_use]
    pub fn t1(&self) -> f64 {
        self.t1
    }

    #[must_use]
    pub fn t2(&self) -> f64 {
        self.t2
    }

    /// Returns `t1 + t2`, the degree of homogeneity of the utility function.
    #[must_use]
    pub fn degree(&self) -> f64 {
        self.t1 + self.t2
    }

    /// Evaluates the utility of a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveBundle`] unless both quantities are
    /// strictly positive.
    pub fn utility(&self, bundle: Bundle) -> Result<f64, DomainError> {
        let Bundle { x1, x2 } = bundle;
        if !(x1 > 0.0 && x2 > 0.0) {
            return Err(DomainError::NonPositiveBundle { x1, x2 });
        }

        let u = x1.powf(self.t1) * x2.powf(self.t2);
        if u.is_finite() {
            Ok(u)
        } else {
            Err(DomainError::NonFinite { x1 })
        }
    }

    /// Returns the marginal utilities `(dU/dx1, dU/dx2)` at a bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle is outside the utility domain.
    pub fn marginal_utilities(&self, bundle: Bundle) -> Result<[f64; 2], DomainError> {
        let u = self.utility(bundle)?;
        Ok([self.t1 * u / bundle.x1, self.t2 * u / bundle.x2])
    }
}

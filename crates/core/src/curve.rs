use thiserror::Error;

use crate::{CobbDouglas, Market};

/// Errors raised when a curve or utility function is evaluated outside its domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("quantity of good 1 must be positive, got {x1}")]
    NonPositiveQuantity { x1: f64 },

    #[error("bundle ({x1}, {x2}) has a non-positive quantity")]
    NonPositiveBundle { x1: f64, x2: f64 },

    #[error("evaluation at x1 = {x1} is not finite")]
    NonFinite { x1: f64 },
}

/// A curve in the goods plane, expressed as `x2` as a function of `x1`.
pub trait Curve {
    /// Returns the quantity of good 2 on the curve at `x1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x1` is outside the curve's domain.
    fn x2(&self, x1: f64) -> Result<f64, DomainError>;
}

/// The bundles that cost exactly the budget: `p1*x1 + p2*x2 = m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetLine {
    market: Market,
}

impl BudgetLine {
    #[must_use]
    pub fn new(market: Market) -> Self {
        Self { market }
    }

    #[must_use]
    pub fn market(&self) -> Market {
        self.market
    }

    /// Returns `x2 = (m - p1*x1) / p2`.
    ///
    /// Defined for every `x1`. Past `m / p1` the result is negative, which is
    /// not an affordable bundle; callers keep `x1` within [`Self::max_x1`].
    #[must_use]
    pub fn x2_at(&self, x1: f64) -> f64 {
        let prices = self.market.prices();
        (self.market.budget() - prices.p1() * x1) / prices.p2()
    }

    /// Returns the quantity of good 1 the whole budget buys, `m / p1`.
    #[must_use]
    pub fn max_x1(&self) -> f64 {
        self.market.budget() / self.market.prices().p1()
    }
}

impl Curve for BudgetLine {
    fn x2(&self, x1: f64) -> Result<f64, DomainError> {
        Ok(self.x2_at(x1))
    }
}

/// The bundles that reach a fixed utility level: `x1^t1 * x2^t2 = u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndifferenceCurve {
    utility: f64,
    preferences: CobbDouglas,
}

impl IndifferenceCurve {
    #[must_use]
    pub fn new(utility: f64, preferences: CobbDouglas) -> Self {
        Self {
            utility,
            preferences,
        }
    }

    #[must_use]
    pub fn utility(&self) -> f64 {
        self.utility
    }

    #[must_use]
    pub fn preferences(&self) -> CobbDouglas {
        self.preferences
    }
}

impl Curve for IndifferenceCurve {
    /// Returns `x2 = (u / x1^t1)^(1/t2)`.
    fn x2(&self, x1: f64) -> Result<f64, DomainError> {
        if !(x1 > 0.0) {
            return Err(DomainError::NonPositiveQuantity { x1 });
        }

        let t1 = self.preferences.t1();
        let t2 = self.preferences.t2();
        let x2 = (self.utility / x1.powf(t1)).powf(t2.recip());
        if x2.is_finite() {
            Ok(x2)
        } else {
            Err(DomainError::NonFinite { x1 })
        }
    }
}

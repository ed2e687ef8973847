use thiserror::Error;

/// Errors that can occur when constructing prices or a market.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MarketError {
    #[error("price of good {good} must be finite and positive, got {value}")]
    Price { good: usize, value: f64 },

    #[error("budget must be finite and positive, got {value}")]
    Budget { value: f64 },
}

/// Unit prices of good 1 and good 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prices {
    p1: f64,
    p2: f64,
}

impl Prices {
    /// Creates validated prices.
    ///
    /// # Errors
    ///
    /// Returns an error if either price is non-finite or not positive.
    pub fn new(p1: f64, p2: f64) -> Result<Self, MarketError> {
        for (good, value) in [(1, p1), (2, p2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MarketError::Price { good, value });
            }
        }
        Ok(Self { p1, p2 })
    }

    #[must_use]
    pub fn p1(&self) -> f64 {
        self.p1
    }

    #[must_use]
    pub fn p2(&self) -> f64 {
        self.p2
    }

    /// Returns the cost of a bundle at these prices.
    #[must_use]
    pub fn cost(&self, x1: f64, x2: f64) -> f64 {
        self.p1 * x1 + self.p2 * x2
    }
}

/// A consumer's budget together with the prices it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Market {
    budget: f64,
    prices: Prices,
}

impl Market {
    /// Creates a market with a validated budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is non-finite or not positive.
    pub fn new(budget: f64, prices: Prices) -> Result<Self, MarketError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(MarketError::Budget { value: budget });
        }
        Ok(Self { budget, prices })
    }

    #[must_use]
    pub fn budget(&self) -> f64 {
        self.budget
    }

    #[must_use]
    pub fn prices(&self) -> Prices {
        self.prices
    }

    /// Returns a copy of this market with a different budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is non-finite or not positive.
    pub fn with_budget(&self, budget: f64) -> Result<Self, MarketError> {
        Self::new(budget, self.prices)
    }
}

use demand_core::{BudgetLine, Bundle};

use crate::{intersection::Bracket, iteration::Status};

/// The result of a Marshallian demand solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Demanded bundle: the lower bracket bound on the budget line.
    pub bundle: Bundle,

    /// Final crossing bracket.
    pub bracket: Bracket,

    /// Utility level of the last indifference curve searched.
    pub utility: f64,

    /// Number of re-anchoring steps taken.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        budget: &BudgetLine,
        bracket: Bracket,
        utility: f64,
        iters: usize,
    ) -> Self {
        let x1 = bracket.lower();
        Self {
            status,
            bundle: Bundle::new(x1, budget.x2_at(x1)),
            bracket,
            utility,
            iters,
        }
    }
}

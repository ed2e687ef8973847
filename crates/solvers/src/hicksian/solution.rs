use demand_core::{BudgetLine, Bundle, Market};

use crate::{intersection::Bracket, iteration::Status};

/// The result of a Hicksian demand solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Demanded bundle: the lower bracket bound on the final budget line.
    pub bundle: Bundle,

    /// Final crossing bracket.
    pub bracket: Bracket,

    /// Budget of the last line searched.
    pub expenditure: f64,

    /// Number of re-anchoring steps taken.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, market: &Market, bracket: Bracket, iters: usize) -> Self {
        let x1 = bracket.lower();
        Self {
            status,
            bundle: Bundle::new(x1, BudgetLine::new(*market).x2_at(x1)),
            bracket,
            expenditure: market.budget(),
            iters,
        }
    }
}

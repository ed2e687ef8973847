use demand_core::Bundle;

use crate::iteration::Status;

/// The result of a Hicksian/Marshallian round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final status.
    pub status: Status,

    /// Hicksian bundle at the final target utility.
    pub bundle: Bundle,

    /// Final target utility.
    pub utility: f64,

    /// Minimum expenditure that reaches `utility`.
    pub expenditure: f64,

    /// Number of rounds that raised the target utility.
    pub rounds: usize,
}

/// Event emitted after each Hicksian solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of completed rounds (0 for the half-budget utility).
    pub round: usize,

    /// Target utility of the Hicksian solve.
    pub utility: f64,

    /// Minimum expenditure that reaches `utility`.
    pub expenditure: f64,
}

use crate::intersection::Bracket;

/// Event emitted after each intersection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of re-anchoring steps so far (0 for the initial budget).
    pub iter: usize,

    /// Budget of the line that was searched.
    pub expenditure: f64,

    /// Bracket on its crossing with the indifference curve.
    pub bracket: Bracket,
}

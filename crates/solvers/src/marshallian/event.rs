use crate::intersection::Bracket;

/// Event emitted after each intersection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of re-anchoring steps so far (0 for the initial curve).
    pub iter: usize,

    /// Utility level of the indifference curve that was searched.
    pub utility: f64,

    /// Bracket on its crossing with the budget line.
    pub bracket: Bracket,
}

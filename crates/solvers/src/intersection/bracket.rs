/// Bounds on the `x1` coordinate of a curve crossing.
///
/// The search aims for `lower <= crossing <= upper` but does not enforce
/// `lower <= upper`; a collapsed or inverted bracket has a width at or
/// below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
}

impl Bracket {
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns true if `x` lies within the bracket widened by `slack` on each side.
    #[must_use]
    pub fn contains(&self, x: f64, slack: f64) -> bool {
        self.lower - slack <= x && x <= self.upper + slack
    }
}

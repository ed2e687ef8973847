/// A pair of quantities of good 1 and good 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bundle {
    pub x1: f64,
    pub x2: f64,
}

impl Bundle {
    /// Creates a bundle from its two quantities.
    #[must_use]
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Returns the bundle as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.x1, self.x2]
    }
}

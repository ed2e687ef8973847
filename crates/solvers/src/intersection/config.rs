use thiserror::Error;

/// The finest supported level; beyond it the grid spacing is below `f64` resolution
/// for typical quantities.
const MAX_LEVELS: usize = 12;

/// How a scan decides that a candidate is closer to the crossing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Comparison {
    /// Compare the signed difference against the smallest magnitude so far.
    #[default]
    Signed,

    /// Compare magnitudes on both sides.
    Magnitude,
}

/// Configuration for the multi-resolution intersection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    levels: usize,
    window: usize,
    comparison: Comparison,
}

/// Errors that can occur when validating an intersection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("levels must be at most 12")]
    Levels,

    #[error("window must hold at least one candidate")]
    Window,

    #[error("precision must be finite and in (0, 1]")]
    Precision,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            levels: 4,
            window: 20,
            comparison: Comparison::Signed,
        }
    }
}

impl Config {
    /// Creates a config with a fixed number of refinement levels.
    ///
    /// # Errors
    ///
    /// Returns an error if `levels` exceeds the supported depth or `window` is zero.
    pub fn new(levels: usize, window: usize, comparison: Comparison) -> Result<Self, ConfigError> {
        if levels > MAX_LEVELS {
            return Err(ConfigError::Levels);
        }
        if window == 0 {
            return Err(ConfigError::Window);
        }

        Ok(Self {
            levels,
            window,
            comparison,
        })
    }

    /// Creates a config with enough levels to resolve `precision`,
    /// `ceil(log10(1/precision))`.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is outside `(0, 1]`, would need more
    /// than the supported depth, or `window` is zero.
    pub fn with_precision(
        precision: f64,
        window: usize,
        comparison: Comparison,
    ) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision <= 0.0 || precision > 1.0 {
            return Err(ConfigError::Precision);
        }

        // Absorb rounding in log10 so exact powers of ten do not gain a level.
        let levels = (-precision.log10() - 1e-9).ceil().max(0.0);
        if levels > 1e3 {
            return Err(ConfigError::Levels);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let levels = levels as usize;
        Self::new(levels, window, comparison)
    }

    /// Returns the number of refinement levels after the integer grid.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Returns the number of candidates scanned per refinement level.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    #[must_use]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Returns the grid spacing at the finest level, `10^-levels`.
    #[must_use]
    pub fn precision(&self) -> f64 {
        // `levels` is capped well below `i32::MAX`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let exponent = self.levels as i32;
        10_f64.powi(-exponent)
    }
}

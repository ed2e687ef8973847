//! Bracketing where an indifference curve crosses a budget line.
//!
//! # Algorithm
//!
//! Let `diff(x) = curve.x2(x) - budget.x2(x)`. The search starts from the
//! integer grid `1, 2, ..., floor(m/p1)` and runs two scans:
//!
//! - [`find_lower`] walks the candidates left to right
//! - [`find_upper`] walks them right to left
//!
//! Each scan tracks the smallest `|diff|` seen, records the location one
//! `step` below the improving candidate, and stops once the neighbour in the
//! scan direction is no closer to the crossing.
//!
//! Every further level multiplies the resolution by ten: the scans are
//! repeated over a window of evenly spaced candidates starting at the previous
//! level's result, with the step set to the new spacing. After `levels`
//! refinements the bracket is accurate to `10^-levels`.
//!
//! # Comparison
//!
//! By default a candidate improves on the running minimum when its *signed*
//! difference is below the smallest magnitude seen so far, so any candidate
//! past the crossing counts as an improvement. [`Comparison::Magnitude`]
//! compares magnitudes instead. The two agree near a simple crossing but can
//! disagree on coarse grids; see the tests in this module.

mod bracket;
mod config;
mod error;
mod scan;

pub use bracket::Bracket;
pub use config::{Comparison, Config, ConfigError};
pub use error::Error;
pub use scan::{Crossing, find_lower, find_upper};

use demand_core::{BudgetLine, Curve};
use tracing::trace;

use scan::scan;

/// Finds the bracket on the crossing of `curve` and `budget` at the finest
/// configured resolution.
///
/// # Errors
///
/// Returns an error if the budget cannot buy one unit of good 1 or if the
/// curve cannot be evaluated at a positive candidate.
pub fn find_intersection<C: Curve>(
    curve: &C,
    budget: &BudgetLine,
    config: &Config,
) -> Result<Bracket, Error> {
    refine_with(curve, budget, config, |_, _| {})
}

/// Returns the bracket found at every resolution level, coarsest first.
///
/// The result has `config.levels() + 1` entries; the last one is what
/// [`find_intersection`] returns.
///
/// # Errors
///
/// Returns an error if the budget cannot buy one unit of good 1 or if the
/// curve cannot be evaluated at a positive candidate.
pub fn refine<C: Curve>(
    curve: &C,
    budget: &BudgetLine,
    config: &Config,
) -> Result<Vec<Bracket>, Error> {
    let mut levels = Vec::with_capacity(config.levels() + 1);
    refine_with(curve, budget, config, |_, bracket| levels.push(bracket))?;
    Ok(levels)
}

fn refine_with<C, F>(
    curve: &C,
    budget: &BudgetLine,
    config: &Config,
    mut on_level: F,
) -> Result<Bracket, Error>
where
    C: Curve,
    F: FnMut(usize, Bracket),
{
    let crossing = Crossing::new(curve, budget);
    let comparison = config.comparison();

    let count = grid_len(budget)?;
    #[allow(clippy::cast_precision_loss)]
    let grid = (1..=count).map(|i| i as f64);
    #[allow(clippy::cast_precision_loss)]
    let last = count as f64;

    let mut lower = scan(&crossing, 1.0, grid.clone(), 1.0, 1.0, comparison)?;
    let mut upper = scan(&crossing, last, grid.rev(), -1.0, 1.0, comparison)?;
    trace!(level = 0, lower, upper, "bracketed crossing");
    on_level(0, Bracket::new(lower, upper));

    for level in 1..=config.levels() {
        // Config caps `levels`, so the exponent fits.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let scale = 10_f64.powi(level as i32);
        let step = scale.recip();

        let below = window(lower, scale, config.window());
        let above = window(upper, scale, config.window());

        lower = find_lower(&crossing, &below, step, comparison)?;
        upper = find_upper(&crossing, &above, step, comparison)?;
        trace!(level, lower, upper, "bracketed crossing");
        on_level(level, Bracket::new(lower, upper));
    }

    Ok(Bracket::new(lower, upper))
}

/// Returns the number of whole units of good 1 the budget buys.
fn grid_len(budget: &BudgetLine) -> Result<usize, Error> {
    let max_x1 = budget.max_x1();
    let count = max_x1.floor();
    if !(count >= 1.0) {
        return Err(Error::EmptyGrid { max_x1 });
    }

    // Budget and prices are finite and positive, so `count` is a finite whole number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as usize;
    Ok(count)
}

/// Builds `size` candidates `anchor + j/scale`, each rounded to the grid of spacing `1/scale`.
fn window(anchor: f64, scale: f64, size: usize) -> Vec<f64> {
    (0..size)
        .map(|j| {
            #[allow(clippy::cast_precision_loss)]
            let offset = j as f64 / scale;
            ((anchor + offset) * scale).round() / scale
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use demand_core::{CobbDouglas, IndifferenceCurve, Market, Prices};

    fn budget(m: f64) -> BudgetLine {
        let prices = Prices::new(3.0, 2.0).expect("valid prices");
        BudgetLine::new(Market::new(m, prices).expect("valid market"))
    }

    /// Indifference curve through the bundle that splits the budget evenly.
    fn initial_curve() -> IndifferenceCurve {
        let prefs = CobbDouglas::new(0.3, 0.7).expect("valid exponents");
        let u = (50.0_f64 / 3.0).powf(0.3) * 25.0_f64.powf(0.7);
        IndifferenceCurve::new(u, prefs)
    }

    /// Crossing found by plain bisection on a sign change.
    fn bisect(crossing: &Crossing<'_, IndifferenceCurve>, mut lo: f64, mut hi: f64) -> f64 {
        let lo_sign = crossing.diff(lo).expect("in domain").signum();
        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            if crossing.diff(mid).expect("in domain").signum() == lo_sign {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    #[test]
    fn pins_every_level_of_the_reference_scenario() {
        let levels = refine(&initial_curve(), &budget(100.0), &Config::default())
            .expect("should bracket");

        let expected = [
            (4.0, 16.0),
            (4.6, 16.6),
            (4.71, 16.66),
            (4.723, 16.666),
            (4.7239, 16.6666),
        ];
        assert_eq!(levels.len(), expected.len());
        for (bracket, (lower, upper)) in levels.iter().zip(expected) {
            assert_relative_eq!(bracket.lower(), lower, epsilon = 1e-9);
            assert_relative_eq!(bracket.upper(), upper, epsilon = 1e-9);
        }
    }

    #[test]
    fn bracket_contains_both_analytic_crossings() {
        let curve = initial_curve();
        let line = budget(100.0);
        let crossing = Crossing::new(&curve, &line);

        let bracket =
            find_intersection(&curve, &line, &Config::default()).expect("should bracket");
        assert!(bracket.lower() <= bracket.upper());

        // The curve cuts the line twice: near 4.72 and at 50/3.
        let left = bisect(&crossing, 1.0, 10.0);
        let right = bisect(&crossing, 10.0, 33.0);
        assert!(bracket.contains(left, 1e-4));
        assert!(bracket.contains(right, 1e-4));
    }

    #[test]
    fn fewer_levels_give_coarser_brackets() {
        let config = Config::new(2, 20, Comparison::Signed).expect("valid config");
        let bracket = find_intersection(&initial_curve(), &budget(100.0), &config)
            .expect("should bracket");

        assert_relative_eq!(bracket.lower(), 4.71, epsilon = 1e-9);
        assert_relative_eq!(bracket.upper(), 16.66, epsilon = 1e-9);
    }

    #[test]
    fn magnitude_comparison_agrees_on_the_reference_scenario() {
        let config = Config::new(4, 20, Comparison::Magnitude).expect("valid config");
        let bracket = find_intersection(&initial_curve(), &budget(100.0), &config)
            .expect("should bracket");

        assert_relative_eq!(bracket.lower(), 4.7239, epsilon = 1e-9);
        assert_relative_eq!(bracket.upper(), 16.6666, epsilon = 1e-9);
    }

    #[test]
    fn errors_when_budget_buys_less_than_one_unit() {
        let result = find_intersection(&initial_curve(), &budget(2.0), &Config::default());
        assert!(matches!(result, Err(Error::EmptyGrid { .. })));
    }

    #[test]
    fn window_rounds_to_level_precision() {
        let candidates = window(4.6000000000000005, 100.0, 3);
        assert_eq!(candidates.len(), 3);
        assert_relative_eq!(candidates[0], 4.6, epsilon = 1e-12);
        assert_relative_eq!(candidates[1], 4.61, epsilon = 1e-12);
        assert_relative_eq!(candidates[2], 4.62, epsilon = 1e-12);
    }

    #[test]
    fn grid_spans_whole_units_of_good_one() {
        assert_eq!(grid_len(&budget(100.0)).expect("non-empty"), 33);
        assert_eq!(grid_len(&budget(3.0)).expect("non-empty"), 1);
        assert!(grid_len(&budget(2.9)).is_err());
    }
}

use demand_core::{BudgetLine, Curve, DomainError};

use super::{Comparison, Error};

/// A curve paired with a budget line, compared pointwise.
#[derive(Debug, Clone, Copy)]
pub struct Crossing<'a, C> {
    curve: &'a C,
    budget: &'a BudgetLine,
}

impl<'a, C: Curve> Crossing<'a, C> {
    #[must_use]
    pub fn new(curve: &'a C, budget: &'a BudgetLine) -> Self {
        Self { curve, budget }
    }

    /// Returns `curve.x2(x1) - budget.x2(x1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x1` is outside the curve's domain.
    pub fn diff(&self, x1: f64) -> Result<f64, DomainError> {
        Ok(self.curve.x2(x1)? - self.budget.x2_at(x1))
    }

    /// Distance from the crossing at a look-ahead point.
    ///
    /// A point outside the curve's domain is treated as infinitely far away.
    fn distance(&self, x1: f64) -> f64 {
        self.diff(x1).map_or(f64::INFINITY, f64::abs)
    }

    /// Difference at a scanned candidate, or `None` if `x1` is not positive.
    ///
    /// Any other domain error is returned.
    fn candidate(&self, x1: f64) -> Result<Option<f64>, DomainError> {
        match self.diff(x1) {
            Ok(diff) => Ok(Some(diff)),
            Err(DomainError::NonPositiveQuantity { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl Comparison {
    fn improves(self, diff: f64, best: f64) -> bool {
        match self {
            Self::Signed => diff < best,
            Self::Magnitude => diff.abs() < best,
        }
    }
}

/// Scans ascending `candidates` for the lower side of the crossing.
///
/// `step` is the spacing between consecutive candidates. The result sits one
/// step below the best candidate found, or is the first candidate if none
/// improved on it.
///
/// # Errors
///
/// Returns an error if `candidates` is empty or the curve cannot be evaluated
/// at a positive candidate.
pub fn find_lower<C: Curve>(
    crossing: &Crossing<'_, C>,
    candidates: &[f64],
    step: f64,
    comparison: Comparison,
) -> Result<f64, Error> {
    let &first = candidates.first().ok_or(Error::NoCandidates)?;
    scan(
        crossing,
        first,
        candidates.iter().copied(),
        step,
        step,
        comparison,
    )
}

/// Scans ascending `candidates` from the end for the upper side of the crossing.
///
/// Like [`find_lower`], the result sits one step below the best candidate
/// found, or is the last candidate if none improved on it.
///
/// # Errors
///
/// Returns an error if `candidates` is empty or the curve cannot be evaluated
/// at a positive candidate.
pub fn find_upper<C: Curve>(
    crossing: &Crossing<'_, C>,
    candidates: &[f64],
    step: f64,
    comparison: Comparison,
) -> Result<f64, Error> {
    let &last = candidates.last().ok_or(Error::NoCandidates)?;
    scan(
        crossing,
        last,
        candidates.iter().rev().copied(),
        -step,
        step,
        comparison,
    )
}

/// Walks `candidates` in order, starting the running minimum at `start`.
///
/// `look_ahead` is the signed offset of the neighbour checked after each
/// candidate; `step` is the offset subtracted from an improving candidate.
/// Candidates at `x1 <= 0` never improve and are skipped.
pub(super) fn scan<C, I>(
    crossing: &Crossing<'_, C>,
    start: f64,
    candidates: I,
    look_ahead: f64,
    step: f64,
    comparison: Comparison,
) -> Result<f64, Error>
where
    C: Curve,
    I: Iterator<Item = f64>,
{
    let mut best_diff = crossing.candidate(start)?.map_or(f64::INFINITY, f64::abs);
    let mut best_x = start;

    for x in candidates {
        let Some(diff) = crossing.candidate(x)? else {
            continue;
        };
        let next = crossing.distance(x + look_ahead);

        if comparison.improves(diff, best_diff) {
            best_diff = diff.abs();
            best_x = x - step;

            if diff.abs() <= next {
                break;
            }
        }
    }

    Ok(best_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use demand_core::{CobbDouglas, IndifferenceCurve, Market, Prices};

    fn fixtures() -> (IndifferenceCurve, BudgetLine) {
        let prefs = CobbDouglas::new(0.3, 0.7).expect("valid exponents");
        let u = (50.0_f64 / 3.0).powf(0.3) * 25.0_f64.powf(0.7);
        let prices = Prices::new(3.0, 2.0).expect("valid prices");
        let market = Market::new(100.0, prices).expect("valid market");
        (IndifferenceCurve::new(u, prefs), BudgetLine::new(market))
    }

    #[test]
    fn lower_scan_stops_one_step_below_the_crossing() {
        let (curve, line) = fixtures();
        let crossing = Crossing::new(&curve, &line);
        let grid: Vec<f64> = (1..=33_i32).map(f64::from).collect();

        let lower = find_lower(&crossing, &grid, 1.0, Comparison::Signed).expect("in domain");
        assert_relative_eq!(lower, 4.0);
    }

    #[test]
    fn upper_scan_stops_one_step_below_the_crossing() {
        let (curve, line) = fixtures();
        let crossing = Crossing::new(&curve, &line);
        let grid: Vec<f64> = (1..=33_i32).map(f64::from).collect();

        let upper = find_upper(&crossing, &grid, 1.0, Comparison::Signed).expect("in domain");
        assert_relative_eq!(upper, 16.0);
    }

    #[test]
    fn signed_and_magnitude_disagree_across_the_crossing() {
        let (curve, line) = fixtures();
        let crossing = Crossing::new(&curve, &line);

        // diff(4) is about +2.1 and diff(8) about -3.8.
        let signed = find_lower(&crossing, &[4.0, 8.0], 1.0, Comparison::Signed).expect("ok");
        let magnitude =
            find_lower(&crossing, &[4.0, 8.0], 1.0, Comparison::Magnitude).expect("ok");

        assert_relative_eq!(signed, 7.0);
        assert_relative_eq!(magnitude, 4.0);
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let (curve, line) = fixtures();
        let crossing = Crossing::new(&curve, &line);

        assert!(matches!(
            find_lower(&crossing, &[], 1.0, Comparison::Signed),
            Err(Error::NoCandidates)
        ));
        assert!(matches!(
            find_upper(&crossing, &[], 1.0, Comparison::Signed),
            Err(Error::NoCandidates)
        ));
    }

    #[test]
    fn non_positive_candidates_are_skipped() {
        let (curve, line) = fixtures();
        let crossing = Crossing::new(&curve, &line);

        // x = 0 is skipped and x = 0.1 improves on the infinite seed.
        let lower = find_lower(&crossing, &[0.0, 0.1], 0.1, Comparison::Signed).expect("skips 0");
        assert_relative_eq!(lower, 0.0);

        let lower = find_lower(&crossing, &[-0.1, 0.0], 0.1, Comparison::Signed).expect("skips");
        assert_relative_eq!(lower, -0.1);
    }

    struct Overflowing;

    impl Curve for Overflowing {
        fn x2(&self, x1: f64) -> Result<f64, DomainError> {
            Err(DomainError::NonFinite { x1 })
        }
    }

    #[test]
    fn non_finite_candidate_is_an_error() {
        let (_, line) = fixtures();
        let crossing = Crossing::new(&Overflowing, &line);

        let result = find_upper(&crossing, &[1.0, 2.0], 1.0, Comparison::Signed);
        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::NonFinite { x1 })) if x1 == 2.0
        ));
    }

    #[test]
    fn look_ahead_outside_domain_is_not_an_error() {
        let (curve, line) = fixtures();
        let crossing = Crossing::new(&curve, &line);

        // Scanning down from x = 1 looks ahead to x = 0.
        let upper = find_upper(&crossing, &[1.0], 1.0, Comparison::Signed).expect("in domain");
        assert_relative_eq!(upper, 1.0);
    }
}

//! Hicksian demand: the cheapest bundle that reaches a target utility.
//!
//! # Algorithm
//!
//! This is the dual of [`marshallian`](crate::marshallian). The indifference
//! curve stays fixed and the budget line moves. The loop starts from the
//! budget that buys `x1 = x2 = u^(1/(t1+t2))`. Each iteration:
//!
//! 1. Brackets where the indifference curve crosses the current budget line.
//! 2. Stops if the bracket is no wider than the tolerance.
//! 3. Otherwise sets the budget to the cost of the indifference-curve bundle
//!    above the bracket midpoint, and repeats.
//!
//! A budget above the minimum expenditure cuts the curve twice; re-anchoring
//! lowers it until the line is tangent to the curve.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted after every intersection search, starting at
//! `iter == 0`. Observers can return [`Action::StopEarly`].

mod error;
mod event;
mod solution;


pub use crate::iteration::{Action, Config, ConfigError, Status};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use demand_core::{BudgetLine, CobbDouglas, Curve, IndifferenceCurve, Market, Observer, Prices};
use tracing::debug;

use crate::intersection::{Bracket, find_intersection};

/// Finds the expenditure-minimizing bundle that reaches `utility`.
///
/// See the [module docs](self) for the iteration and observer events.
///
/// # Errors
///
/// Returns an error if `utility` is not finite and positive, an intersection
/// search fails, or the re-anchored budget is invalid.
pub fn solve<Obs>(
    prices: &Prices,
    preferences: &CobbDouglas,
    utility: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    if !utility.is_finite() || utility <= 0.0 {
        return Err(Error::InvalidUtility { value: utility });
    }

    let curve = IndifferenceCurve::new(utility, *preferences);
    let mut market = initial_market(prices, preferences, utility)?;
    let mut bracket = search(&curve, &market, config)?;
    let mut iter = 0;

    loop {
        let action = observer.observe(&Event {
            iter,
            expenditure: market.budget(),
            bracket,
        });

        if let Some(status) = Status::check(action, bracket.width(), iter, config) {
            debug!(?status, iter, expenditure = market.budget(), "hicksian demand finished");
            return Ok(Solution::new(status, &market, bracket, iter));
        }

        iter += 1;
        market = adjust(&curve, &market, &bracket)?;
        bracket = search(&curve, &market, config)?;
        debug!(
            iter,
            expenditure = market.budget(),
            lower = bracket.lower(),
            upper = bracket.upper(),
            "re-anchored budget line"
        );
    }
}

/// Finds the expenditure-minimizing bundle without observer support.
///
/// # Errors
///
/// Returns an error if `utility` is not finite and positive, an intersection
/// search fails, or the re-anchored budget is invalid.
pub fn solve_unobserved(
    prices: &Prices,
    preferences: &CobbDouglas,
    utility: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(prices, preferences, utility, config, ())
}

/// Market whose budget buys equal quantities `u^(1/(t1+t2))` of both goods.
fn initial_market(
    prices: &Prices,
    preferences: &CobbDouglas,
    utility: f64,
) -> Result<Market, Error> {
    let x = utility.powf(preferences.degree().recip());
    Ok(Market::new(prices.cost(x, x), *prices)?)
}

/// Market whose budget buys the curve bundle above the bracket midpoint.
fn adjust(
    curve: &IndifferenceCurve,
    market: &Market,
    bracket: &Bracket,
) -> Result<Market, Error> {
    let x1 = bracket.midpoint();
    let x2 = curve.x2(x1)?;
    Ok(market.with_budget(market.prices().cost(x1, x2))?)
}

fn search(curve: &IndifferenceCurve, market: &Market, config: &Config) -> Result<Bracket, Error> {
    let budget = BudgetLine::new(*market);
    Ok(find_intersection(curve, &budget, config.intersection())?)
}

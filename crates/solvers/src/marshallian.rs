//! Marshallian demand: the bundle a utility-maximizing consumer buys.
//!
//! # Algorithm
//!
//! The loop starts from the indifference curve through the bundle that
//! spends half the budget on each good. Each iteration:
//!
//! 1. Brackets where the current indifference curve crosses the budget line
//!    (see [`intersection`]).
//! 2. Stops if the bracket is no wider than the tolerance.
//! 3. Otherwise moves to the indifference curve through the budget-line
//!    bundle above the bracket midpoint, and repeats.
//!
//! A curve below the optimum cuts the budget line twice; re-anchoring raises
//! the utility level and pulls the two crossings together until they meet at
//! the tangency. The reported bundle is the lower bracket bound on the budget
//! line, so it always spends the whole budget.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every intersection search, starting
//! with the initial one at `iter == 0`. Observers can return
//! [`Action::StopEarly`] to stop at the current bracket.

mod error;
mod event;
mod solution;


pub use crate::iteration::{Action, Config, ConfigError, Status};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use demand_core::{
    BudgetLine, Bundle, CobbDouglas, DomainError, IndifferenceCurve, Market, Observer,
};
use tracing::debug;

use crate::intersection::{Bracket, find_intersection};

/// Finds the utility-maximizing bundle for `preferences` in `market`.
///
/// See the [module docs](self) for the iteration and observer events.
///
/// # Errors
///
/// Returns an error if an intersection search fails or the bracket midpoint
/// leaves the utility domain.
pub fn solve<Obs>(
    market: &Market,
    preferences: &CobbDouglas,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let budget = BudgetLine::new(*market);
    let mut utility = initial_utility(market, preferences)?;
    let mut bracket = search(&budget, preferences, utility, config)?;
    let mut iter = 0;

    loop {
        let action = observer.observe(&Event {
            iter,
            utility,
            bracket,
        });

        if let Some(status) = Status::check(action, bracket.width(), iter, config) {
            debug!(?status, iter, utility, "marshallian demand finished");
            return Ok(Solution::new(status, &budget, bracket, utility, iter));
        }

        iter += 1;
        utility = adjust(&budget, preferences, &bracket)?;
        bracket = search(&budget, preferences, utility, config)?;
        debug!(
            iter,
            utility,
            lower = bracket.lower(),
            upper = bracket.upper(),
            "re-anchored indifference curve"
        );
    }
}

/// Finds the utility-maximizing bundle without observer support.
///
/// # Errors
///
/// Returns an error if an intersection search fails or the bracket midpoint
/// leaves the utility domain.
pub fn solve_unobserved(
    market: &Market,
    preferences: &CobbDouglas,
    config: &Config,
) -> Result<Solution, Error> {
    solve(market, preferences, config, ())
}

/// Utility of the bundle that spends half the budget on each good.
pub(crate) fn initial_utility(
    market: &Market,
    preferences: &CobbDouglas,
) -> Result<f64, DomainError> {
    let half = 0.5 * market.budget();
    let prices = market.prices();
    preferences.utility(Bundle::new(half / prices.p1(), half / prices.p2()))
}

/// Utility of the budget-line bundle above the bracket midpoint.
fn adjust(budget: &BudgetLine, preferences: &CobbDouglas, bracket: &Bracket) -> Result<f64, Error> {
    let x1 = bracket.midpoint();
    let bundle = Bundle::new(x1, budget.x2_at(x1));
    Ok(preferences.utility(bundle)?)
}

fn search(
    budget: &BudgetLine,
    preferences: &CobbDouglas,
    utility: f64,
    config: &Config,
) -> Result<Bracket, Error> {
    let curve = IndifferenceCurve::new(utility, *preferences);
    Ok(find_intersection(&curve, budget, config.intersection())?)
}

//! Marshallian demand recovered through repeated Hicksian solves.
//!
//! # Algorithm
//!
//! The round trip starts from the utility of the bundle that spends half the
//! budget on each good. Each round:
//!
//! 1. Solves for the Hicksian demand at the current target utility.
//! 2. Stops if the budget exceeds that expenditure by less than the gap
//!    tolerance.
//! 3. Otherwise raises the target to the utility of the budget-line bundle
//!    with the same `x1` as the Hicksian bundle, and repeats.
//!
//! While the expenditure is below the budget, the budget-line bundle buys more
//! of good 2 than the Hicksian one, so the target utility keeps rising until
//! the cheapest way to reach it costs the whole budget.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted after every Hicksian solve, starting at
//! `round == 0`. Observers can return [`Action::StopEarly`].

mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use crate::iteration::{Action, Status};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use demand_core::{BudgetLine, Bundle, CobbDouglas, Market, Observer};
use tracing::debug;

use crate::{hicksian, marshallian};

/// Finds the utility-maximizing bundle for `preferences` in `market` by
/// alternating Hicksian solves with steps along the budget line.
///
/// See the [module docs](self) for the rounds and observer events.
///
/// # Errors
///
/// Returns an error if a Hicksian solve fails or stops without converging, or
/// if a budget-line bundle leaves the utility domain.
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
    let mut utility = marshallian::initial_utility(market, preferences)?;
    let mut round = 0;

    loop {
        let dual =
            hicksian::solve_unobserved(&market.prices(), preferences, utility, config.dual())?;
        if dual.status != Status::Converged {
            return Err(Error::Unconverged {
                round,
                status: dual.status,
            });
        }

        let action = observer.observe(&Event {
            round,
            utility,
            expenditure: dual.expenditure,
        });

        let gap = market.budget() - dual.expenditure;
        if let Some(status) = check(action, gap, round, config) {
            debug!(?status, round, utility, gap, "round trip finished");
            return Ok(Solution {
                status,
                bundle: dual.bundle,
                utility,
                expenditure: dual.expenditure,
                rounds: round,
            });
        }

        round += 1;
        let x1 = dual.bundle.x1;
        utility = preferences.utility(Bundle::new(x1, budget.x2_at(x1)))?;
        debug!(round, utility, gap, "raised target utility");
    }
}

/// Runs the round trip without observer support.
///
/// # Errors
///
/// Returns an error if a Hicksian solve fails or stops without converging, or
/// if a budget-line bundle leaves the utility domain.
pub fn solve_unobserved(
    market: &Market,
    preferences: &CobbDouglas,
    config: &Config,
) -> Result<Solution, Error> {
    solve(market, preferences, config, ())
}

fn check(action: Option<Action>, gap: f64, round: usize, config: &Config) -> Option<Status> {
    if let Some(Action::StopEarly) = action {
        return Some(Status::StoppedByObserver);
    }
    if gap < config.gap() {
        return Some(Status::Converged);
    }
    if round >= config.max_rounds() {
        return Some(Status::MaxIters);
    }
    None
}

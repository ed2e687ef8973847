//! Computes the Marshallian demand of a fixed Cobb-Douglas consumer.
//!
//! Prints the demanded bundle as two tab-separated quantities, then the
//! elapsed time. Set `RUST_LOG=debug` to also log each re-anchoring step, the
//! closed-form bundle, the Hicksian expenditure at the achieved utility, and
//! the bundle reached by alternating Hicksian solves.

use std::time::Instant;

use demand_core::{CobbDouglas, Market, Prices, closed_form};
use demand_solvers::{hicksian, intersection, marshallian, round_trip};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

const BUDGET: f64 = 100.0;
const PRICES: [f64; 2] = [3.0, 2.0];
const EXPONENTS: [f64; 2] = [0.3, 0.7];
const TOLERANCE: f64 = 0.001;
const MAX_ITERS: usize = 100;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let start = Instant::now();

    let market = Market::new(BUDGET, Prices::new(PRICES[0], PRICES[1])?)?;
    let preferences = CobbDouglas::new(EXPONENTS[0], EXPONENTS[1])?;
    let config = marshallian::Config::new(TOLERANCE, MAX_ITERS, intersection::Config::default())?;
    let solution = marshallian::solve_unobserved(&market, &preferences, &config)?;

    let elapsed = start.elapsed();

    if solution.status != marshallian::Status::Converged {
        return Err(format!(
            "did not converge: {:?} after {} iterations, bracket width {}",
            solution.status,
            solution.iters,
            solution.bracket.width()
        )
        .into());
    }

    println!("{:.3}\t{:.3}", solution.bundle.x1, solution.bundle.x2);
    println!("time: {elapsed:?}");

    if tracing::enabled!(Level::DEBUG) {
        log_checks(&market, &preferences, &solution)?;
    }

    Ok(())
}

/// Logs the closed-form bundle, the Hicksian expenditure at the achieved
/// utility, and the round-trip bundle.
fn log_checks(
    market: &Market,
    preferences: &CobbDouglas,
    solution: &marshallian::Solution,
) -> CliResult<()> {
    let expected = closed_form::marshallian_demand(market, preferences);
    debug!(x1 = expected.x1, x2 = expected.x2, "closed-form demand");

    let dual = hicksian::solve_unobserved(
        &market.prices(),
        preferences,
        solution.utility,
        &hicksian::Config::default(),
    )?;
    debug!(
        status = ?dual.status,
        expenditure = dual.expenditure,
        budget = market.budget(),
        "hicksian expenditure at achieved utility"
    );

    let trip = round_trip::solve_unobserved(market, preferences, &round_trip::Config::default())?;
    debug!(
        status = ?trip.status,
        rounds = trip.rounds,
        x1 = trip.bundle.x1,
        x2 = trip.bundle.x2,
        "round-trip demand"
    );

    Ok(())
}

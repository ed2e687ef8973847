use approx::assert_relative_eq;
use demand_core::{CobbDouglas, Market, Prices, closed_form};

use crate::{hicksian, intersection, marshallian};

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

fn market(m: f64, p1: f64, p2: f64) -> Market {
    Market::new(m, Prices::new(p1, p2).expect("valid prices")).expect("valid market")
}

fn prefs(t1: f64, t2: f64) -> CobbDouglas {
    CobbDouglas::new(t1, t2).expect("valid exponents")
}

#[test]
fn reference_scenario_matches_marshallian_demand() {
    let market = market(100.0, 3.0, 2.0);
    let prefs = prefs(0.3, 0.7);

    let solution = solve_unobserved(&market, &prefs, &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.rounds, 3);
    assert_relative_eq!(solution.bundle.x1, 9.9998, epsilon = 1e-9);
    assert_relative_eq!(solution.expenditure, 100.0, epsilon = 1e-6);
    assert_eq!(format!("{:.3}", solution.bundle.x1), "10.000");
    assert_eq!(format!("{:.3}", solution.bundle.x2), "35.000");

    let direct = marshallian::solve_unobserved(&market, &prefs, &marshallian::Config::default())
        .expect("should solve");
    assert_relative_eq!(solution.utility, direct.utility, max_relative = 1e-6);

    let expected = closed_form::marshallian_demand(&market, &prefs);
    assert_relative_eq!(solution.bundle.x1, expected.x1, max_relative = 0.01);
    assert_relative_eq!(solution.bundle.x2, expected.x2, max_relative = 0.01);
}

#[test]
fn target_utility_and_expenditure_rise_each_round() {
    let market = market(100.0, 3.0, 2.0);
    let mut events: Vec<Event> = Vec::new();

    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };
    let solution =
        solve(&market, &prefs(0.3, 0.7), &Config::default(), observer).expect("should solve");

    assert_eq!(events.len(), solution.rounds + 1);
    assert_relative_eq!(events[0].utility, 22.136_687_332_388_9, epsilon = 1e-9);
    assert_relative_eq!(events[0].expenditure, 92.1011, epsilon = 1e-3);

    for pair in events.windows(2) {
        assert_eq!(pair[1].round, pair[0].round + 1);
        assert!(pair[1].utility > pair[0].utility);
        assert!(pair[1].expenditure > pair[0].expenditure);
    }
}

#[test]
fn balanced_start_needs_no_rounds() {
    // With equal prices and exponents the half-budget bundle is already optimal.
    let market = market(100.0, 1.0, 1.0);
    let solution =
        solve_unobserved(&market, &prefs(0.5, 0.5), &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.rounds, 0);
    assert_relative_eq!(solution.utility, 50.0, epsilon = 1e-9);
    assert_relative_eq!(solution.bundle.x1, 49.9999, epsilon = 1e-9);
}

#[test]
fn observer_can_stop_rounds() {
    let market = market(100.0, 3.0, 2.0);
    let observer = |event: &Event| (event.round >= 2).then_some(Action::StopEarly);

    let solution =
        solve(&market, &prefs(0.3, 0.7), &Config::default(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.rounds, 2);
    assert_relative_eq!(solution.utility, 24.035_183_853, epsilon = 1e-6);
}

#[test]
fn round_cap_reports_max_iters() {
    let market = market(100.0, 3.0, 2.0);
    let config = Config::new(1e-5, 1, hicksian::Config::default()).expect("valid config");

    let solution = solve_unobserved(&market, &prefs(0.3, 0.7), &config).expect("should stop");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.rounds, 1);
    assert_relative_eq!(solution.expenditure, 99.862, epsilon = 1e-3);
}

#[test]
fn unconverged_dual_is_an_error() {
    let market = market(100.0, 3.0, 2.0);
    let dual =
        hicksian::Config::new(1e-3, 0, intersection::Config::default()).expect("valid config");
    let config = Config::new(1e-5, 100, dual).expect("valid config");

    let result = solve_unobserved(&market, &prefs(0.3, 0.7), &config);

    assert_eq!(
        result,
        Err(Error::Unconverged {
            round: 0,
            status: Status::MaxIters,
        })
    );
}

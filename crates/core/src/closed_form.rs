//! Analytic Cobb-Douglas demands.
//!
//! With `U = x1^t1 * x2^t2`, the tangency condition `MU1/p1 = MU2/p2` gives
//! `p1*x1/t1 = p2*x2/t2`. Combined with the budget this yields Marshallian
//! demand; combined with a utility level it yields Hicksian demand. The
//! solvers never call these; they are the reference the solvers are checked
//! against.

use crate::{Bundle, CobbDouglas, Market, Prices};

/// Returns the utility-maximizing bundle, `x_i = t_i/(t1+t2) * m/p_i`.
#[must_use]
pub fn marshallian_demand(market: &Market, preferences: &CobbDouglas) -> Bundle {
    let m = market.budget();
    let prices = market.prices();
    let degree = preferences.degree();

    Bundle::new(
        preferences.t1() / degree * m / prices.p1(),
        preferences.t2() / degree * m / prices.p2(),
    )
}

/// Returns the expenditure-minimizing bundle that reaches `utility`.
#[must_use]
pub fn hicksian_demand(prices: &Prices, preferences: &CobbDouglas, utility: f64) -> Bundle {
    let (t1, t2) = (preferences.t1(), preferences.t2());
    let (p1, p2) = (prices.p1(), prices.p2());

    // Ratio x2/x1 along the expansion path.
    let ratio = (t2 * p1) / (t1 * p2);
    let x1 = (utility / ratio.powf(t2)).powf(preferences.degree().recip());

    Bundle::new(x1, ratio * x1)
}

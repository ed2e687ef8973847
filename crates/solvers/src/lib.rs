//! Iterative demand solvers for two-good Cobb-Douglas consumers.
//!
//! - [`intersection`] — brackets where an indifference curve crosses a budget
//!   line by scanning a grid and zooming in one decimal digit per level
//! - [`marshallian`] — utility maximization: re-anchors the indifference curve
//!   on the budget line until the crossing bracket collapses
//! - [`hicksian`] — expenditure minimization: re-anchors the budget line on a
//!   fixed indifference curve until the crossing bracket collapses
//! - [`round_trip`] — utility maximization through repeated Hicksian solves,
//!   raising the target utility until its expenditure uses the whole budget
//!
//! Every outer loop reports an [`iteration::Status`] and accepts an
//! [`iteration::Action`]; the two bracket loops also share
//! [`iteration::Config`].

pub mod hicksian;
pub mod intersection;
pub mod iteration;
pub mod marshallian;
pub mod round_trip;

//! Core types for two-good consumer demand.
//!
//! This crate defines the values that the demand solvers work with:
//!
//! - [`Prices`] and [`Market`] — validated prices and budget
//! - [`CobbDouglas`] — preferences `U(x1, x2) = x1^t1 * x2^t2`
//! - [`Curve`] — a curve in the goods plane, implemented by [`BudgetLine`]
//!   and [`IndifferenceCurve`]
//! - [`Bundle`] — a pair of demanded quantities
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! The [`closed_form`] module holds the analytic Cobb-Douglas demands, which
//! serve as an oracle for the iterative solvers.

pub mod closed_form;

mod bundle;
mod curve;
mod market;
mod observer;
mod preferences;

pub use bundle::Bundle;
pub use curve::{BudgetLine, Curve, DomainError, IndifferenceCurve};
pub use market::{Market, MarketError, Prices};
pub use observer::Observer;
pub use preferences::{CobbDouglas, PreferenceError};

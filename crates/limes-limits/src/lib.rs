//! Limits at +∞ from lazy multiseries expansions.
//!
//! This crate reads limit verdicts off multiseries built with
//! `limes-series`, given an asymptotic basis and a sign oracle.
//!
//! # Algorithm Overview
//!
//! 1. Validate the basis and the expansion (depth, ordering)
//! 2. Trim vanishing leading terms within a fuel budget
//! 3. Extract the leading monomial
//! 4. Decide the limit from the first non-zero exponent and the sign of
//!    the leading coefficient
//!
//! # Example
//!
//! ```
//! use limes_limits::{find_limit, Basis, LimitConfig, LimitResult};
//! use limes_series::{ExactSign, Multiseries};
//!
//! // lim (x→∞) (x + 1)/x = 1 + 1/x → 1
//! let ms = Multiseries::from_scalars(vec![(0.0, 1.0), (-1.0, 1.0)]);
//! let result = find_limit(&ms, &Basis::standard(1), &ExactSign, &LimitConfig::default());
//! assert_eq!(result, Ok(LimitResult::Finite(1.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod comparison;
pub mod limit;
pub mod resolve;

#[cfg(test)]
mod proptests;

pub use basis::{Basis, BasisFunction};
pub use comparison::{ComparisonClass, GrowthRate};
pub use limit::{find_limit, LimitConfig, LimitError, LimitResult};
pub use resolve::resolve_limit;

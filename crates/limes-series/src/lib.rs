//! # limes-series
//!
//! Lazy multiseries for the limes limit engine.
//!
//! This crate provides:
//! - [`Multiseries`]: nested lazy series over an ordered asymptotic basis
//! - Structural predicates (flat zero, trimmed, well ordered)
//! - [`Trimmer`]: fuel-bounded removal of vanishing leading terms, backed
//!   by an injected [`SignOracle`]
//! - [`leading_term`]: the dominant [`Monomial`] of a trimmed multiseries
//!
//! ## Example
//!
//! ```
//! use limes_series::{trim, ExactSign, Monomial, Multiseries};
//!
//! // 0·x^5 + 2·x^3
//! let ms = Multiseries::from_scalars(vec![(5.0, 0.0), (3.0, 2.0)]);
//! let trimmed = trim(&ms, &ExactSign, 16).unwrap();
//! assert_eq!(trimmed.leading_term(), Monomial::new(2.0, [3.0]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod leading;
pub mod multiseries;
pub mod oracle;
pub mod predicates;
pub mod scalar;
pub mod trim;

#[cfg(test)]
mod proptests;

pub use leading::{leading_term, Exponents, Monomial};
pub use multiseries::{Multiseries, Series, Term};
pub use oracle::{ExactSign, Sign, SignOracle, ToleranceSign};
pub use predicates::OrderViolation;
pub use scalar::Scalar;
pub use trim::{trim, TrimError, Trimmed, Trimmer};

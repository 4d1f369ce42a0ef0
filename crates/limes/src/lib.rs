//! # Limes
//!
//! Limits at +∞ computed from lazy multiseries expansions.
//!
//! ## Features
//!
//! - **Lazy Sequences**: memoized, thread-safe, possibly infinite streams
//!   with corecursion and bisimulation proofs
//! - **Multiseries**: nested expansions over an ordered asymptotic basis
//! - **Trimming**: fuel-bounded removal of cancelled leading terms
//! - **Limit Verdicts**: `+∞`, `-∞` or a finite value from the leading term
//!
//! ## Quick Start
//!
//! ```rust
//! use limes::prelude::*;
//!
//! // x^2 - x^2 + 3 + 1/x → 3
//! let a = Multiseries::from_scalars(vec![(2.0, 1.0), (0.0, 3.0), (-1.0, 1.0)]);
//! let b = Multiseries::from_scalars(vec![(2.0, 1.0)]);
//! let result = find_limit(&a.sub(&b), &Basis::standard(1), &ExactSign, &LimitConfig::default());
//! assert_eq!(result, Ok(LimitResult::Finite(3.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use limes_lazy as lazy;
pub use limes_limits as limits;
pub use limes_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use limes_lazy::{coinduct, Bisimulation, Emission, LazySeq};
    pub use limes_limits::{
        find_limit, resolve_limit, Basis, BasisFunction, GrowthRate, LimitConfig, LimitError,
        LimitResult,
    };
    pub use limes_series::{
        leading_term, trim, ExactSign, Monomial, Multiseries, Scalar, Sign, SignOracle, Term,
        ToleranceSign, TrimError, Trimmed, Trimmer,
    };
}

//! Limits at +∞ of multiseries expansions.
//!
//! Computing the limit of an expansion over an asymptotic basis works by:
//! 1. Checking that the expansion and the basis agree on depth, and that
//!    the basis is ordered by dominance
//! 2. Checking that exponents strictly decrease on a prefix of each
//!    sequence along the leading chain
//! 3. Trimming vanishing leading terms within a fuel budget, checking the
//!    order of every term forced on the way
//! 4. Reading the limit off the leading monomial

use crate::basis::Basis;
use crate::resolve::{check_depth, resolve_with_sign};
use limes_series::{
    leading_term, Multiseries, OrderViolation, Scalar, Sign, SignOracle, TrimError, Trimmer,
};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// The result of a limit computation.
#[derive(Clone, Debug, PartialEq)]
pub enum LimitResult<S> {
    /// A finite limit value.
    Finite(S),
    /// The limit is +∞.
    PosInfinity,
    /// The limit is -∞.
    NegInfinity,
}

impl<S> LimitResult<S> {
    /// Returns true if the limit is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, LimitResult::Finite(_))
    }

    /// Returns true if the limit is +∞ or -∞.
    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns the finite value if present.
    pub fn finite_value(&self) -> Option<&S> {
        match self {
            LimitResult::Finite(v) => Some(v),
            _ => None,
        }
    }
}

impl<S: fmt::Debug> fmt::Display for LimitResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitResult::Finite(v) => write!(f, "{v:?}"),
            LimitResult::PosInfinity => write!(f, "+∞"),
            LimitResult::NegInfinity => write!(f, "-∞"),
        }
    }
}

/// Errors that can occur during limit computation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Trimming used up its fuel before a non-vanishing term appeared.
    #[error("no non-vanishing leading term found within {fuel} trimming steps")]
    OutOfFuel {
        /// The configured budget.
        fuel: usize,
    },

    /// The sign oracle contradicted itself.
    #[error("sign oracle answered {first:?} and later {second:?} for {value}")]
    OracleInconsistency {
        /// Debug rendering of the scalar.
        value: String,
        /// The verdict recorded first.
        first: Sign,
        /// The conflicting verdict.
        second: Sign,
    },

    /// Exponents fail to strictly decrease among the inspected terms.
    #[error("multiseries is not well ordered: {0}")]
    NotWellOrdered(#[from] OrderViolation),

    /// The multiseries depth differs from the basis length.
    #[error("multiseries has depth {found} but the basis has {expected} functions")]
    DepthMismatch {
        /// Number of basis functions.
        expected: usize,
        /// Depth of the expansion.
        found: usize,
    },

    /// A basis function does not tend to +∞ or fails to dominate its successor.
    #[error("basis function {index} is out of order")]
    BasisNotOrdered {
        /// Position of the offending function.
        index: usize,
    },
}

impl From<TrimError> for LimitError {
    fn from(err: TrimError) -> Self {
        match err {
            TrimError::OutOfFuel { fuel } => LimitError::OutOfFuel { fuel },
            TrimError::OracleInconsistency {
                value,
                first,
                second,
            } => LimitError::OracleInconsistency {
                value,
                first,
                second,
            },
            TrimError::NotWellOrdered(violation) => LimitError::NotWellOrdered(violation),
        }
    }
}

/// Knobs for [`find_limit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimitConfig {
    /// Budget of recursive trimming steps.
    pub fuel: usize,
    /// Number of terms per sequence inspected by the well-ordering pre-check.
    pub well_order_window: usize,
    /// Whether to validate the basis ordering.
    pub check_basis: bool,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            fuel: 256,
            well_order_window: 16,
            check_basis: true,
        }
    }
}

impl LimitConfig {
    /// Sets the trimming fuel.
    #[must_use]
    pub fn with_fuel(mut self, fuel: usize) -> Self {
        self.fuel = fuel;
        self
    }

    /// Sets the well-ordering window.
    #[must_use]
    pub fn with_well_order_window(mut self, window: usize) -> Self {
        self.well_order_window = window;
        self
    }

    /// Enables or disables basis validation.
    #[must_use]
    pub fn with_basis_check(mut self, check: bool) -> Self {
        self.check_basis = check;
        self
    }
}

/// Computes the limit at +∞ of a multiseries expansion.
///
/// # Arguments
/// * `ms` - The expansion, of depth `basis.len()`
/// * `basis` - The asymptotic basis, dominant function first
/// * `oracle` - Decides the sign of scalar coefficients
/// * `config` - Fuel and validation settings
///
/// # Errors
///
/// See [`LimitError`] for the failure modes.
pub fn find_limit<S, O>(
    ms: &Multiseries<S>,
    basis: &Basis,
    oracle: &O,
    config: &LimitConfig,
) -> Result<LimitResult<S>, LimitError>
where
    S: Scalar,
    O: SignOracle<S> + ?Sized,
{
    debug!(depth = ms.depth(), %basis, fuel = config.fuel, "computing limit");

    if ms.depth() != basis.len() {
        return Err(LimitError::DepthMismatch {
            expected: basis.len(),
            found: ms.depth(),
        });
    }
    if config.check_basis {
        basis.check_ordering()?;
    }
    ms.check_well_ordered(config.well_order_window)?;

    let mut trimmer = Trimmer::new(oracle, config.fuel);
    let trimmed = trimmer.trim(ms)?;
    let leading = leading_term(&trimmed);
    check_depth(&leading, basis)?;
    // Goes through the trimmer so the verdict agrees with those seen while trimming.
    let coeff_sign = trimmer.sign(&leading.coeff)?;
    let result = resolve_with_sign(&leading, basis, coeff_sign);

    debug!(
        %leading,
        %result,
        fuel_used = trimmer.fuel_used(),
        "limit computed"
    );
    Ok(result)
}

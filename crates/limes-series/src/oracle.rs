//! Sign decisions for scalar coefficients.
//!
//! Whether a coefficient vanishes is not always decidable from its
//! representation, so the trimmer asks an injected [`SignOracle`]. The
//! engine assumes only that the oracle is total, deterministic and pure.

use crate::scalar::Scalar;
use num_traits::Float;
use std::cmp::Ordering;

/// The three-way verdict of a sign oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The value is zero.
    Zero,
    /// The value is strictly positive.
    Positive,
    /// The value is strictly negative.
    Negative,
}

impl Sign {
    /// Returns true for [`Sign::Zero`].
    #[must_use]
    pub fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }

    /// The sign of the negated value.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// The sign of a product.
    #[must_use]
    pub fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl From<Ordering> for Sign {
    /// Interprets the ordering of a value against zero.
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

/// An external decision procedure for the sign of a scalar.
///
/// Repeated queries on equal inputs must return equal verdicts.
pub trait SignOracle<S> {
    /// Decides the sign of `value`.
    fn sign(&self, value: &S) -> Sign;
}

impl<S, F> SignOracle<S> for F
where
    F: Fn(&S) -> Sign,
{
    fn sign(&self, value: &S) -> Sign {
        self(value)
    }
}

/// Decides signs by comparing the scalar with zero.
///
/// Exact for rational scalars. For floats it treats every nonzero bit
/// pattern as nonzero, so rounding residue is never absorbed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactSign;

impl<S: Scalar> SignOracle<S> for ExactSign {
    fn sign(&self, value: &S) -> Sign {
        if value.is_zero() {
            Sign::Zero
        } else if *value > S::zero() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Treats floats within `epsilon` of zero as zero.
#[derive(Clone, Copy, Debug)]
pub struct ToleranceSign<F> {
    epsilon: F,
}

impl<F: Float> ToleranceSign<F> {
    /// Creates an oracle with the given absolute tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is negative or NaN.
    #[must_use]
    pub fn new(epsilon: F) -> Self {
        assert!(epsilon >= F::zero(), "tolerance must be non-negative");
        Self { epsilon }
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn epsilon(&self) -> F {
        self.epsilon
    }
}

impl<F: Float + Scalar> SignOracle<F> for ToleranceSign<F> {
    fn sign(&self, value: &F) -> Sign {
        if value.abs() <= self.epsilon {
            Sign::Zero
        } else if value.is_sign_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

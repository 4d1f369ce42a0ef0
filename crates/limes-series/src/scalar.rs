//! Scalar coefficients and exponents.
//!
//! Multiseries coefficients at depth zero and the exponents at every depth
//! live in the same ordered field. Floating point scalars are convenient for
//! experiments; exact rationals avoid spurious cancellation failures.

use dashu::rational::RBig;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// An ordered field element usable as a coefficient or exponent.
///
/// # Laws
///
/// - `zero()` and `one()` are the additive and multiplicative identities
/// - `is_zero` is structural: it never consults a sign oracle
pub trait Scalar:
    Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is exactly the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is exactly the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                #[allow(clippy::float_cmp)]
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);

impl Scalar for RBig {
    fn zero() -> Self {
        RBig::ZERO
    }

    fn one() -> Self {
        RBig::ONE
    }

    fn is_zero(&self) -> bool {
        *self == RBig::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashu::integer::{IBig, UBig};

    fn q(n: i64, d: u64) -> RBig {
        RBig::from_parts(IBig::from(n), UBig::from(d))
    }

    #[test]
    fn test_float_identities() {
        assert!(<f64 as Scalar>::zero().is_zero());
        assert!(<f64 as Scalar>::one().is_one());
        assert!(!(-0.5f64).is_zero());
        assert!(Scalar::is_zero(&-0.0f64));
    }

    #[test]
    fn test_rational_identities() {
        assert!(<RBig as Scalar>::zero().is_zero());
        assert!(q(3, 3).is_one());
        assert!((q(1, 2) - q(2, 4)).is_zero());
        assert!(q(1, 3) > q(1, 4));
    }
}

//! Turning a leading monomial into a limit verdict.

use crate::basis::Basis;
use crate::limit::{LimitError, LimitResult};
use limes_series::{ExactSign, Monomial, Scalar, Sign, SignOracle};
use tracing::trace;

/// Decides the limit at +∞ of `coeff · b₁^e₁ · ... · b_d^e_d`.
///
/// Each basis function tends to +∞ and dominates every later one, so the
/// first non-zero exponent settles the behaviour: a positive one sends the
/// monomial to ±∞ with the sign of the coefficient, a negative one sends it
/// to zero. With all exponents zero the monomial is the constant `coeff`.
///
/// The coefficient's sign comes from `oracle`. Exponents are compared with
/// zero structurally.
///
/// # Errors
///
/// Returns [`LimitError::DepthMismatch`] if the monomial and the basis
/// disagree on the number of basis functions.
pub fn resolve_limit<S, O>(
    monomial: &Monomial<S>,
    basis: &Basis,
    oracle: &O,
) -> Result<LimitResult<S>, LimitError>
where
    S: Scalar,
    O: SignOracle<S> + ?Sized,
{
    check_depth(monomial, basis)?;
    Ok(resolve_with_sign(monomial, basis, oracle.sign(&monomial.coeff)))
}

/// Fails with [`LimitError::DepthMismatch`] unless the monomial has one
/// exponent per basis function.
pub(crate) fn check_depth<S>(monomial: &Monomial<S>, basis: &Basis) -> Result<(), LimitError> {
    if monomial.exponents.len() == basis.len() {
        Ok(())
    } else {
        Err(LimitError::DepthMismatch {
            expected: basis.len(),
            found: monomial.exponents.len(),
        })
    }
}

/// Decides the limit once the sign of the coefficient is known.
pub(crate) fn resolve_with_sign<S: Scalar>(
    monomial: &Monomial<S>,
    basis: &Basis,
    coeff_sign: Sign,
) -> LimitResult<S> {
    if coeff_sign.is_zero() {
        return LimitResult::Finite(S::zero());
    }

    let deciding = monomial
        .exponents
        .iter()
        .zip(basis)
        .map(|(e, function)| (ExactSign.sign(e), function))
        .find(|(sign, _)| !sign.is_zero());

    match deciding {
        None => LimitResult::Finite(monomial.coeff.clone()),
        Some((Sign::Negative, function)) => {
            trace!(%function, "decaying leading term");
            LimitResult::Finite(S::zero())
        }
        Some((_, function)) => {
            trace!(%function, "growing leading term");
            if coeff_sign == Sign::Positive {
                LimitResult::PosInfinity
            } else {
                LimitResult::NegInfinity
            }
        }
    }
}

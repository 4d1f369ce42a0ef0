//! Leading term extraction.

use crate::multiseries::Multiseries;
use crate::scalar::Scalar;
use crate::trim::Trimmed;
use smallvec::SmallVec;
use std::fmt;

/// Exponent vector, one entry per basis function.
pub type Exponents<S> = SmallVec<[S; 4]>;

/// A single dominant term `coeff · b₁^e₁ · ... · b_d^e_d`.
#[derive(Clone, Debug, PartialEq)]
pub struct Monomial<S> {
    /// The scalar coefficient.
    pub coeff: S,
    /// One exponent per basis function, dominant basis function first.
    pub exponents: Exponents<S>,
}

impl<S: Scalar> Monomial<S> {
    /// Creates a monomial.
    pub fn new(coeff: S, exponents: impl IntoIterator<Item = S>) -> Self {
        Self {
            coeff,
            exponents: exponents.into_iter().collect(),
        }
    }

    /// Returns the number of basis functions covered.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.exponents.len()
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exponents.iter().all(Scalar::is_zero)
    }
}

impl<S: fmt::Debug> fmt::Display for Monomial<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.coeff)?;
        for (i, e) in self.exponents.iter().enumerate() {
            write!(f, " * b{}^{:?}", i + 1, e)?;
        }
        Ok(())
    }
}

/// Extracts the leading monomial of a trimmed multiseries.
///
/// The empty series yields the zero coefficient with all-zero exponents.
#[must_use]
pub fn leading_term<S: Scalar>(trimmed: &Trimmed<S>) -> Monomial<S> {
    let mut exponents = Exponents::new();
    let mut current = trimmed.as_multiseries().clone();

    loop {
        let head = match &current {
            Multiseries::Const(c) => {
                return Monomial {
                    coeff: c.clone(),
                    exponents,
                }
            }
            Multiseries::Series(series) => series.terms().head(),
        };
        match head {
            Some(term) => {
                exponents.push(term.exponent);
                current = term.coeff;
            }
            None => {
                exponents.extend(std::iter::repeat_with(S::zero).take(current.depth()));
                return Monomial {
                    coeff: S::zero(),
                    exponents,
                };
            }
        }
    }
}

impl<S: Scalar> Trimmed<S> {
    /// Extracts the leading monomial.
    #[must_use]
    pub fn leading_term(&self) -> Monomial<S> {
        leading_term(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ExactSign;
    use crate::trim::trim;

    #[test]
    fn test_constant() {
        let t = trim(&Multiseries::constant(7.0, 2), &ExactSign, 10).unwrap();
        let m = t.leading_term();
        assert_eq!(m, Monomial::new(7.0, [0.0, 0.0]));
        assert!(m.is_constant());
    }

    #[test]
    fn test_scalar() {
        let t = trim(&Multiseries::Const(-2.0), &ExactSign, 0).unwrap();
        assert_eq!(leading_term(&t), Monomial::new(-2.0, []));
    }

    #[test]
    fn test_empty_is_degenerate_zero() {
        let t = trim(&Multiseries::<f64>::zero(3), &ExactSign, 0).unwrap();
        assert_eq!(leading_term(&t), Monomial::new(0.0, [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_after_absorption() {
        let inner = Multiseries::from_scalars(vec![(0.5, 0.0), (-1.0, 4.0)]);
        let ms = Multiseries::from_terms(2, vec![(2.0, inner), (1.0, Multiseries::constant(9.0, 1))]);
        let t = trim(&ms, &ExactSign, 20).unwrap();
        assert_eq!(leading_term(&t), Monomial::new(4.0, [2.0, -1.0]));
    }

    #[test]
    fn test_display() {
        let m = Monomial::new(3.0, [1.0, -0.5]);
        assert_eq!(m.to_string(), "3.0 * b1^1.0 * b2^-0.5");
    }
}

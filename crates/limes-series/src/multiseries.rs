//! Multiseries over an asymptotic basis.
//!
//! A multiseries of depth 0 is a scalar. A multiseries of depth `d > 0` is a
//! lazy sequence of terms `(exponent, coefficient)` where every coefficient
//! is a multiseries of depth `d - 1`:
//!
//! f ≈ Σᵢ cᵢ · b₁^eᵢ,   with each cᵢ expanded over b₂, ..., b_d
//!
//! Exponents must strictly decrease along every sequence, so the first term
//! is the dominant one.

use crate::scalar::Scalar;
use limes_lazy::{Emission, LazySeq};
use std::cmp::Ordering;

/// A single term `coeff · b^exponent` of a depth-`d` multiseries.
#[derive(Clone, Debug)]
pub struct Term<S> {
    /// Exponent of the basis function at this depth.
    pub exponent: S,
    /// Coefficient, a multiseries of depth `d - 1`.
    pub coeff: Multiseries<S>,
}

impl<S> Term<S> {
    /// Creates a term.
    pub fn new(exponent: S, coeff: Multiseries<S>) -> Self {
        Self { exponent, coeff }
    }
}

/// The term sequence of a multiseries of positive depth.
#[derive(Clone, Debug)]
pub struct Series<S> {
    depth: usize,
    terms: LazySeq<Term<S>>,
}

impl<S> Series<S> {
    /// Wraps a term sequence.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero; depth-zero values are scalars.
    #[must_use]
    pub fn new(depth: usize, terms: LazySeq<Term<S>>) -> Self {
        assert!(depth > 0, "a term sequence needs positive depth");
        Self { depth, terms }
    }

    /// Returns the depth (number of basis functions covered).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the term sequence.
    #[must_use]
    pub fn terms(&self) -> &LazySeq<Term<S>> {
        &self.terms
    }
}

/// A possibly infinite nested series.
#[derive(Clone, Debug)]
pub enum Multiseries<S> {
    /// Depth 0: a plain scalar.
    Const(S),
    /// Depth > 0: a lazy sequence of terms.
    Series(Series<S>),
}

impl<S> Multiseries<S> {
    /// Returns the depth of the multiseries.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Multiseries::Const(_) => 0,
            Multiseries::Series(series) => series.depth(),
        }
    }

    /// Returns the scalar if this has depth 0.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&S> {
        match self {
            Multiseries::Const(c) => Some(c),
            Multiseries::Series(_) => None,
        }
    }

    /// Returns the term sequence if this has positive depth.
    #[must_use]
    pub fn terms(&self) -> Option<&LazySeq<Term<S>>> {
        match self {
            Multiseries::Const(_) => None,
            Multiseries::Series(series) => Some(series.terms()),
        }
    }
}

impl<S: Scalar> Multiseries<S> {
    /// Wraps a lazily produced term sequence.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    #[must_use]
    pub fn from_seq(depth: usize, terms: LazySeq<Term<S>>) -> Self {
        Multiseries::Series(Series::new(depth, terms))
    }

    /// Builds a finite multiseries from `(exponent, coefficient)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero or a coefficient has the wrong depth.
    #[must_use]
    pub fn from_terms(depth: usize, terms: Vec<(S, Multiseries<S>)>) -> Self {
        for (_, coeff) in &terms {
            assert_eq!(coeff.depth() + 1, depth, "coefficient depth mismatch");
        }
        let terms = terms
            .into_iter()
            .map(|(exponent, coeff)| Term::new(exponent, coeff))
            .collect();
        Self::from_seq(depth, terms)
    }

    /// Builds a depth-1 multiseries from `(exponent, scalar)` pairs.
    #[must_use]
    pub fn from_scalars(terms: Vec<(S, S)>) -> Self {
        Self::from_terms(
            1,
            terms
                .into_iter()
                .map(|(exponent, c)| (exponent, Multiseries::Const(c)))
                .collect(),
        )
    }

    /// The zero multiseries of the given depth.
    #[must_use]
    pub fn zero(depth: usize) -> Self {
        if depth == 0 {
            Multiseries::Const(S::zero())
        } else {
            Self::from_seq(depth, LazySeq::empty())
        }
    }

    /// The constant `c`: a single term with exponent 0 at every depth.
    #[must_use]
    pub fn constant(c: S, depth: usize) -> Self {
        if depth == 0 {
            return Multiseries::Const(c);
        }
        let inner = Self::constant(c, depth - 1);
        Self::from_seq(
            depth,
            LazySeq::cons(Term::new(S::zero(), inner), LazySeq::empty()),
        )
    }

    /// The single monomial `c · b₁^e₁ · ... · b_d^e_d`.
    ///
    /// The depth is the number of exponents.
    #[must_use]
    pub fn monomial(c: S, exponents: &[S]) -> Self {
        match exponents.split_first() {
            None => Multiseries::Const(c),
            Some((first, rest)) => Self::from_seq(
                exponents.len(),
                LazySeq::cons(
                    Term::new(first.clone(), Self::monomial(c, rest)),
                    LazySeq::empty(),
                ),
            ),
        }
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Multiseries::Const(c) => Multiseries::Const(-c.clone()),
            Multiseries::Series(series) => Self::from_seq(
                series.depth(),
                series
                    .terms()
                    .map(|term| Term::new(term.exponent, term.coeff.negate())),
            ),
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &S) -> Self {
        match self {
            Multiseries::Const(v) => Multiseries::Const(v.clone() * c.clone()),
            Multiseries::Series(series) => {
                let c = c.clone();
                Self::from_seq(
                    series.depth(),
                    series
                        .terms()
                        .map(move |term| Term::new(term.exponent, term.coeff.scale(&c))),
                )
            }
        }
    }

    /// Multiplies by `b₁^shift`, the basis function at this depth.
    ///
    /// Depth-0 values are returned unchanged.
    #[must_use]
    pub fn shift(&self, shift: &S) -> Self {
        match self {
            Multiseries::Const(_) => self.clone(),
            Multiseries::Series(series) => {
                let shift = shift.clone();
                Self::from_seq(
                    series.depth(),
                    series
                        .terms()
                        .map(move |term| Term::new(term.exponent + shift.clone(), term.coeff)),
                )
            }
        }
    }

    /// Multiplies by the monomial `c · b₁^e₁ · ... · b_d^e_d`.
    ///
    /// # Panics
    ///
    /// Panics if the number of exponents differs from the depth.
    #[must_use]
    pub fn mul_monomial(&self, c: &S, exponents: &[S]) -> Self {
        assert_eq!(exponents.len(), self.depth(), "monomial depth mismatch");
        match (self, exponents.split_first()) {
            (Multiseries::Series(series), Some((first, rest))) => {
                let c = c.clone();
                let first = first.clone();
                let rest = rest.to_vec();
                Self::from_seq(
                    series.depth(),
                    series.terms().map(move |term| {
                        Term::new(
                            term.exponent + first.clone(),
                            term.coeff.mul_monomial(&c, &rest),
                        )
                    }),
                )
            }
            _ => self.scale(c),
        }
    }

    /// Adds two multiseries of the same depth.
    ///
    /// Terms are merged by exponent; equal exponents add their coefficients.
    /// Cancellation can leave zero coefficients behind, which trimming
    /// removes later.
    ///
    /// # Panics
    ///
    /// Panics if the depths differ.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.depth(), other.depth(), "cannot add multiseries of different depth");
        match (self, other) {
            (Multiseries::Const(a), Multiseries::Const(b)) => Multiseries::Const(a.clone() + b.clone()),
            (Multiseries::Series(a), Multiseries::Series(b)) => {
                Self::from_seq(a.depth(), merge(a.terms(), b.terms()))
            }
            _ => unreachable!("depths were checked above"),
        }
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Panics
    ///
    /// Panics if the depths differ.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }
}

/// Merges two exponent-descending term sequences.
fn merge<S: Scalar>(left: &LazySeq<Term<S>>, right: &LazySeq<Term<S>>) -> LazySeq<Term<S>> {
    LazySeq::corecurse(
        (left.clone(), right.clone()),
        |(left, right): (LazySeq<Term<S>>, LazySeq<Term<S>>)| match (left.uncons(), right.uncons()) {
            (None, None) => Emission::Done,
            (Some((a, a_rest)), None) => Emission::Next(a, (a_rest, right)),
            (None, Some((b, b_rest))) => Emission::Next(b, (left, b_rest)),
            (Some((a, a_rest)), Some((b, b_rest))) => match a.exponent.partial_cmp(&b.exponent) {
                Some(Ordering::Greater) => Emission::Next(a, (a_rest, right)),
                Some(Ordering::Less) => Emission::Next(b, (left, b_rest)),
                _ => Emission::Next(Term::new(a.exponent, a.coeff.add(&b.coeff)), (a_rest, b_rest)),
            },
        },
    )
}

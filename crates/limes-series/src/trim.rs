//! Trimming: removal of vanishing leading terms.
//!
//! A multiseries is trimmed when its leading coefficient, at every depth,
//! is not zero. Trimming walks the chain of leading terms only:
//!
//! 1. an empty sequence is already trimmed;
//! 2. otherwise the head coefficient is trimmed first (one unit of fuel);
//! 3. at depth 1 the oracle decides whether that scalar vanishes, deeper
//!    down an empty trimmed coefficient vanishes;
//! 4. a vanishing head is dropped and the tail is trimmed in its place
//!    (one unit of fuel), a surviving head is kept and its tail is left
//!    untouched.
//!
//! Exponent ordering is checked on every term the pass forces, including
//! the one term just past a surviving head, and a violation is reported
//! as [`TrimError::NotWellOrdered`].
//!
//! Whether a run of cancelling terms ever ends is undecidable in general,
//! so every trimming pass draws from a finite fuel budget and reports
//! [`TrimError::OutOfFuel`] when the budget runs dry.

use crate::multiseries::{Multiseries, Series, Term};
use crate::oracle::{Sign, SignOracle};
use crate::predicates::OrderViolation;
use crate::scalar::Scalar;
use limes_lazy::LazySeq;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while trimming.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrimError {
    /// The fuel budget was exhausted before a non-vanishing head was found.
    #[error("trimming did not finish within {fuel} steps")]
    OutOfFuel {
        /// The budget the pass started with.
        fuel: usize,
    },

    /// The oracle gave two different verdicts for equal scalars.
    #[error("sign oracle answered {first:?} and later {second:?} for {value}")]
    OracleInconsistency {
        /// Debug rendering of the scalar.
        value: String,
        /// The verdict recorded first.
        first: Sign,
        /// The conflicting verdict.
        second: Sign,
    },

    /// A forced term's exponent is not below its predecessor's.
    #[error("multiseries is not well ordered: {0}")]
    NotWellOrdered(#[from] OrderViolation),
}

/// A multiseries with no vanishing leading coefficient at any depth.
///
/// Only a [`Trimmer`] constructs values of this type.
#[derive(Clone, Debug)]
pub struct Trimmed<S>(Multiseries<S>);

impl<S> Trimmed<S> {
    /// Returns the normalized multiseries.
    #[must_use]
    pub fn as_multiseries(&self) -> &Multiseries<S> {
        &self.0
    }

    /// Unwraps the normalized multiseries.
    #[must_use]
    pub fn into_inner(self) -> Multiseries<S> {
        self.0
    }

    /// Returns the depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.depth()
    }
}

/// A fuel-bounded trimming pass.
///
/// The fuel budget and the record of oracle verdicts span every call to
/// [`trim`](Self::trim) on the same trimmer.
pub struct Trimmer<'o, S, O: ?Sized> {
    oracle: &'o O,
    fuel: usize,
    remaining: usize,
    verdicts: Vec<(S, Sign)>,
}

impl<'o, S, O> Trimmer<'o, S, O>
where
    S: Scalar,
    O: SignOracle<S> + ?Sized,
{
    /// Creates a trimming pass with the given fuel budget.
    pub fn new(oracle: &'o O, fuel: usize) -> Self {
        Self {
            oracle,
            fuel,
            remaining: fuel,
            verdicts: Vec::new(),
        }
    }

    /// Returns the budget the pass started with.
    pub fn fuel(&self) -> usize {
        self.fuel
    }

    /// Returns the fuel spent so far.
    pub fn fuel_used(&self) -> usize {
        self.fuel - self.remaining
    }

    /// Returns the fuel still available.
    pub fn remaining_fuel(&self) -> usize {
        self.remaining
    }

    /// Trims `ms`.
    ///
    /// # Errors
    ///
    /// Returns [`TrimError::OutOfFuel`] if the budget runs out,
    /// [`TrimError::OracleInconsistency`] if the oracle contradicts itself
    /// and [`TrimError::NotWellOrdered`] if a forced exponent is out of order.
    pub fn trim(&mut self, ms: &Multiseries<S>) -> Result<Trimmed<S>, TrimError> {
        let result = self.trim_inner(ms);
        match &result {
            Ok(_) => debug!(depth = ms.depth(), fuel_used = self.fuel_used(), "trimmed multiseries"),
            Err(err) => debug!(depth = ms.depth(), %err, "trimming failed"),
        }
        result.map(Trimmed)
    }

    /// Asks the oracle for the sign of `value`, checked against every
    /// verdict this pass has recorded.
    ///
    /// # Errors
    ///
    /// Returns [`TrimError::OracleInconsistency`] if an equal scalar was
    /// given a different verdict earlier.
    pub fn sign(&mut self, value: &S) -> Result<Sign, TrimError> {
        self.query(value)
    }

    fn spend(&mut self) -> Result<(), TrimError> {
        if self.remaining == 0 {
            return Err(TrimError::OutOfFuel { fuel: self.fuel });
        }
        self.remaining -= 1;
        Ok(())
    }

    fn query(&mut self, value: &S) -> Result<Sign, TrimError> {
        let sign = self.oracle.sign(value);
        match self.verdicts.iter().find(|(seen, _)| seen == value) {
            Some((_, first)) if *first != sign => Err(TrimError::OracleInconsistency {
                value: format!("{value:?}"),
                first: *first,
                second: sign,
            }),
            Some(_) => Ok(sign),
            None => {
                self.verdicts.push((value.clone(), sign));
                Ok(sign)
            }
        }
    }

    fn trim_inner(&mut self, ms: &Multiseries<S>) -> Result<Multiseries<S>, TrimError> {
        let Multiseries::Series(series) = ms else {
            return Ok(ms.clone());
        };
        let depth = series.depth();
        let mut cursor = series.terms().clone();
        let mut previous: Option<S> = None;
        let mut position = 0;

        loop {
            let Some((term, tail)) = cursor.uncons() else {
                return Ok(Multiseries::Series(Series::new(depth, cursor)));
            };
            if let Some(prev) = &previous {
                check_descending(prev, &term.exponent, depth, position)?;
            }

            self.spend()?;
            let coeff = self.trim_inner(&term.coeff)?;
            let vanishes = match &coeff {
                Multiseries::Const(c) => self.query(c)?.is_zero(),
                Multiseries::Series(inner) => inner.terms().is_empty(),
            };

            if !vanishes {
                if let Some(next) = tail.head() {
                    check_descending(&term.exponent, &next.exponent, depth, position + 1)?;
                }
                let head = Term::new(term.exponent, coeff);
                return Ok(Multiseries::Series(Series::new(
                    depth,
                    LazySeq::cons(head, tail),
                )));
            }

            trace!(depth, exponent = ?term.exponent, "absorbed vanishing term");
            self.spend()?;
            previous = Some(term.exponent);
            cursor = tail;
            position += 1;
        }
    }
}

fn check_descending<S: Scalar>(
    previous: &S,
    exponent: &S,
    depth: usize,
    position: usize,
) -> Result<(), OrderViolation> {
    if exponent.partial_cmp(previous) == Some(Ordering::Less) {
        Ok(())
    } else {
        Err(OrderViolation { depth, position })
    }
}

/// Trims `ms` with a fresh pass.
///
/// # Errors
///
/// See [`Trimmer::trim`].
pub fn trim<S, O>(ms: &Multiseries<S>, oracle: &O, fuel: usize) -> Result<Trimmed<S>, TrimError>
where
    S: Scalar,
    O: SignOracle<S> + ?Sized,
{
    Trimmer::new(oracle, fuel).trim(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{ExactSign, ToleranceSign};
    use limes_lazy::Emission;
    use std::cell::Cell;

    fn top_terms(ms: &Multiseries<f64>, n: usize) -> Vec<(f64, f64)> {
        ms.terms()
            .unwrap()
            .take(n)
            .into_iter()
            .map(|t| (t.exponent, *t.coeff.as_scalar().unwrap()))
            .collect()
    }

    /// Σ c(n) · x^(-n) for n = 0, 1, 2, ...
    fn infinite(c: fn(u32) -> f64) -> Multiseries<f64> {
        Multiseries::from_seq(
            1,
            LazySeq::corecurse(0u32, move |n| {
                Emission::Next(Term::new(-f64::from(n), Multiseries::Const(c(n))), n + 1)
            }),
        )
    }

    #[test]
    fn test_scalar_is_trimmed() {
        let t = trim(&Multiseries::Const(0.0), &ExactSign, 0).unwrap();
        assert_eq!(t.as_multiseries().as_scalar(), Some(&0.0));
    }

    #[test]
    fn test_empty_needs_no_fuel() {
        let t = trim(&Multiseries::<f64>::zero(3), &ExactSign, 0).unwrap();
        assert!(t.as_multiseries().is_flat_zero());
        assert_eq!(t.depth(), 3);
    }

    #[test]
    fn test_absorbs_zero_head() {
        let ms = Multiseries::from_scalars(vec![(5.0, 0.0), (3.0, 2.0), (1.0, 0.0)]);
        let t = trim(&ms, &ExactSign, 10).unwrap();
        // Only the head is normalized; later zeros stay.
        assert_eq!(top_terms(t.as_multiseries(), 10), vec![(3.0, 2.0), (1.0, 0.0)]);
        assert!(t.as_multiseries().is_trimmed());
    }

    #[test]
    fn test_all_zero_finite_becomes_empty() {
        let ms = Multiseries::from_scalars(vec![(2.0, 0.0), (1.0, 0.0)]);
        let t = trim(&ms, &ExactSign, 10).unwrap();
        assert!(t.as_multiseries().is_flat_zero());
    }

    #[test]
    fn test_fuel_accounting() {
        // Two absorbed heads and one kept head: 3 coefficient calls + 2 tail calls.
        let ms = Multiseries::from_scalars(vec![(5.0, 0.0), (4.0, 0.0), (3.0, 2.0)]);
        let mut trimmer = Trimmer::new(&ExactSign, 100);
        trimmer.trim(&ms).unwrap();
        assert_eq!(trimmer.fuel_used(), 5);
        assert_eq!(trimmer.remaining_fuel(), 95);

        assert!(trim(&ms, &ExactSign, 5).is_ok());
        assert_eq!(trim(&ms, &ExactSign, 4).unwrap_err(), TrimError::OutOfFuel { fuel: 4 });
    }

    #[test]
    fn test_zero_fuel_fails_when_work_remains() {
        let ms = Multiseries::from_scalars(vec![(5.0, 0.0), (3.0, 2.0)]);
        assert_eq!(trim(&ms, &ExactSign, 0).unwrap_err(), TrimError::OutOfFuel { fuel: 0 });
    }

    #[test]
    fn test_infinite_cancellation_runs_out_of_fuel() {
        let ones = infinite(|_| 1.0);
        let difference = ones.sub(&ones);
        assert_eq!(
            trim(&difference, &ExactSign, 1000).unwrap_err(),
            TrimError::OutOfFuel { fuel: 1000 }
        );
    }

    #[test]
    fn test_infinite_series_with_late_nonzero() {
        let late = infinite(|n| if n < 10 { 0.0 } else { f64::from(n) });
        let t = trim(&late, &ExactSign, 100).unwrap();
        let head = t.as_multiseries().terms().unwrap().head().unwrap();
        assert_eq!(head.exponent, -10.0);
        assert_eq!(head.coeff.as_scalar(), Some(&10.0));
    }

    #[test]
    fn test_tolerance_oracle_absorbs_rounding() {
        let ms = Multiseries::from_scalars(vec![(1.0, 0.1 + 0.2 - 0.3), (0.0, 4.0)]);
        let t = trim(&ms, &ToleranceSign::new(1e-12), 10).unwrap();
        assert_eq!(top_terms(t.as_multiseries(), 10), vec![(0.0, 4.0)]);

        let exact = trim(&ms, &ExactSign, 10).unwrap();
        assert_eq!(exact.as_multiseries().terms().unwrap().head().unwrap().exponent, 1.0);
    }

    #[test]
    fn test_nested_absorption() {
        // Depth 2: the first coefficient trims to empty, so its term vanishes.
        let vanishing = Multiseries::from_scalars(vec![(1.0, 0.0), (0.0, 0.0)]);
        let surviving = Multiseries::from_scalars(vec![(2.0, 0.0), (1.0, -3.0)]);
        let ms = Multiseries::from_terms(2, vec![(4.0, vanishing), (2.0, surviving)]);

        let t = trim(&ms, &ExactSign, 100).unwrap();
        let head = t.as_multiseries().terms().unwrap().head().unwrap();
        assert_eq!(head.exponent, 2.0);
        assert_eq!(top_terms(&head.coeff, 10), vec![(1.0, -3.0)]);
        assert!(t.as_multiseries().is_trimmed());
    }

    #[test]
    fn test_idempotent() {
        let ms = Multiseries::from_scalars(vec![(5.0, 0.0), (3.0, 2.0), (2.0, 0.0), (1.0, 1.0)]);
        let once = trim(&ms, &ExactSign, 50).unwrap();
        let twice = trim(once.as_multiseries(), &ExactSign, 50).unwrap();
        assert_eq!(
            top_terms(once.as_multiseries(), 10),
            top_terms(twice.as_multiseries(), 10)
        );
    }

    #[test]
    fn test_inconsistent_oracle() {
        let calls = Cell::new(0u32);
        let flaky = |_: &f64| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Sign::Zero
            } else {
                Sign::Positive
            }
        };
        let ms = Multiseries::from_scalars(vec![(2.0, 1.0), (1.0, 1.0)]);
        let err = trim(&ms, &flaky, 10).unwrap_err();
        assert_eq!(
            err,
            TrimError::OracleInconsistency {
                value: "1.0".to_string(),
                first: Sign::Zero,
                second: Sign::Positive,
            }
        );
    }

    #[test]
    fn test_tail_forced_one_cell_past_head() {
        let ms = infinite(|n| f64::from(n + 1));
        let t = trim(&ms, &ExactSign, 10).unwrap();
        let tail = t.as_multiseries().terms().unwrap().tail();
        // The successor of the head is forced to check its exponent, nothing beyond.
        assert!(tail.is_forced());
        assert!(!tail.tail().is_forced());
    }

    #[test]
    fn test_order_violation_beyond_any_prefix_check() {
        // 18 cancelled terms, then x^-1, then an out-of-order x^5.
        let mut terms: Vec<(f64, f64)> = (0..18).map(|i| (40.0 - f64::from(i), 0.0)).collect();
        terms.push((-1.0, 1.0));
        terms.push((5.0, 1.0));
        let ms = Multiseries::from_scalars(terms);

        assert_eq!(
            trim(&ms, &ExactSign, 100).unwrap_err(),
            TrimError::NotWellOrdered(OrderViolation { depth: 1, position: 19 })
        );
    }

    #[test]
    fn test_order_violation_among_absorbed_terms() {
        let ms = Multiseries::from_scalars(vec![(3.0, 0.0), (4.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            trim(&ms, &ExactSign, 100).unwrap_err(),
            TrimError::NotWellOrdered(OrderViolation { depth: 1, position: 1 })
        );
    }

    #[test]
    fn test_order_violation_inside_head_coefficient() {
        let bad = Multiseries::from_scalars(vec![(0.0, 0.0), (2.0, 1.0)]);
        let ms = Multiseries::from_terms(2, vec![(1.0, bad)]);
        assert_eq!(
            trim(&ms, &ExactSign, 100).unwrap_err(),
            TrimError::NotWellOrdered(OrderViolation { depth: 1, position: 1 })
        );
    }

    #[test]
    fn test_sign_uses_verdict_log() {
        let calls = Cell::new(0u32);
        let flaky = |_: &f64| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Sign::Positive
            } else {
                Sign::Zero
            }
        };
        let ms = Multiseries::from_scalars(vec![(2.0, 1.0)]);
        let mut trimmer = Trimmer::new(&flaky, 10);
        trimmer.trim(&ms).unwrap();
        assert_eq!(
            trimmer.sign(&1.0),
            Err(TrimError::OracleInconsistency {
                value: "1.0".to_string(),
                first: Sign::Positive,
                second: Sign::Zero,
            })
        );
    }

    #[test]
    fn test_fuel_accounting_depth_three() {
        // The first depth-2 coefficient trims to empty through two levels of
        // absorption; the second survives after one absorption at depth 1.
        let vanishing = Multiseries::from_terms(2, vec![(1.0, Multiseries::from_scalars(vec![(0.0, 0.0)]))]);
        let surviving = Multiseries::from_terms(
            2,
            vec![(0.0, Multiseries::from_scalars(vec![(3.0, 0.0), (2.0, 5.0)]))],
        );
        let ms = Multiseries::from_terms(3, vec![(2.0, vanishing), (1.0, surviving)]);

        let mut trimmer = Trimmer::new(&ExactSign, 100);
        let t = trimmer.trim(&ms).unwrap();
        assert_eq!(trimmer.fuel_used(), 11);
        assert_eq!(t.leading_term().exponents.as_slice(), &[1.0, 0.0, 2.0]);
        assert_eq!(t.leading_term().coeff, 5.0);

        assert!(trim(&ms, &ExactSign, 11).is_ok());
        assert_eq!(trim(&ms, &ExactSign, 10).unwrap_err(), TrimError::OutOfFuel { fuel: 10 });
    }
}

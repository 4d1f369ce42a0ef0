//! Structural predicates on multiseries.
//!
//! These never consult a sign oracle: a coefficient is zero here only if
//! it is structurally the zero scalar or an empty sequence.

use crate::multiseries::Multiseries;
use crate::scalar::Scalar;
use std::cmp::Ordering;
use thiserror::Error;

/// The first place where exponents fail to strictly decrease.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("exponents do not strictly decrease at depth {depth}, term {position}")]
pub struct OrderViolation {
    /// Depth of the offending sequence.
    pub depth: usize,
    /// Index of the term whose exponent is not below its predecessor's.
    pub position: usize,
}

impl<S: Scalar> Multiseries<S> {
    /// Returns true for the zero scalar and for the empty sequence.
    ///
    /// Forces at most the first term.
    #[must_use]
    pub fn is_flat_zero(&self) -> bool {
        match self {
            Multiseries::Const(c) => c.is_zero(),
            Multiseries::Series(series) => series.terms().is_empty(),
        }
    }

    /// Returns true if no leading coefficient, at any depth, is flat zero.
    ///
    /// Only the chain of leading terms is inspected.
    #[must_use]
    pub fn is_trimmed(&self) -> bool {
        let mut current = self.clone();
        loop {
            let head = match &current {
                Multiseries::Const(_) => return true,
                Multiseries::Series(series) => series.terms().head(),
            };
            match head {
                None => return true,
                Some(term) if term.coeff.is_flat_zero() => return false,
                Some(term) => current = term.coeff,
            }
        }
    }

    /// Checks that exponents strictly decrease on the first `window` terms
    /// of each sequence along the chain of leading coefficients.
    ///
    /// This is a cheap pre-check forcing at most `window` terms per depth.
    /// Trimming checks the ordering of every term it forces on its own.
    ///
    /// # Errors
    ///
    /// Returns the depth and position of the first violation found.
    pub fn check_well_ordered(&self, window: usize) -> Result<(), OrderViolation> {
        let mut current = self.clone();
        loop {
            let Multiseries::Series(series) = &current else {
                return Ok(());
            };

            let mut previous: Option<S> = None;
            for (position, term) in series.terms().iter().take(window).enumerate() {
                if let Some(prev) = &previous {
                    if term.exponent.partial_cmp(prev) != Some(Ordering::Less) {
                        return Err(OrderViolation {
                            depth: series.depth(),
                            position,
                        });
                    }
                }
                previous = Some(term.exponent);
            }

            let next = match series.terms().head() {
                Some(head) if window > 0 => head.coeff,
                _ => return Ok(()),
            };
            current = next;
        }
    }

    /// Returns true if [`check_well_ordered`](Self::check_well_ordered) passes.
    #[must_use]
    pub fn is_well_ordered(&self, window: usize) -> bool {
        self.check_well_ordered(window).is_ok()
    }
}

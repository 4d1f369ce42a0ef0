//! Bisimulation checking.
//!
//! A relation `R` on pairs of sequences is a bisimulation when, for every
//! related pair, either both sides are exhausted, or both heads are equal
//! and the tails are again related. Any bisimulation containing `(a, b)`
//! shows that `a` and `b` are equal without ever forcing their whole
//! (possibly infinite) contents.
//!
//! [`coinduct`] unfolds a pair step by step and checks the step condition
//! of a candidate relation at each unfolding, up to a caller-chosen bound.

use crate::seq::LazySeq;
use thiserror::Error;

/// A candidate relation on pairs of sequences.
pub trait Bisimulation<T> {
    /// Returns true if the pair is in the relation.
    fn relates(&self, left: &LazySeq<T>, right: &LazySeq<T>) -> bool;
}

impl<T, F> Bisimulation<T> for F
where
    F: Fn(&LazySeq<T>, &LazySeq<T>) -> bool,
{
    fn relates(&self, left: &LazySeq<T>, right: &LazySeq<T>) -> bool {
        self(left, right)
    }
}

/// The relation that holds for every pair.
///
/// Checking it with [`coinduct`] reduces to comparing prefixes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Universal;

impl<T> Bisimulation<T> for Universal {
    fn relates(&self, _left: &LazySeq<T>, _right: &LazySeq<T>) -> bool {
        true
    }
}

/// Evidence that the step condition held along every checked unfolding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BisimulationWitness {
    /// Number of unfoldings that satisfied the step condition.
    pub steps_checked: usize,
    /// True if both sides ran out together, so the check is complete.
    pub exhausted: bool,
}

/// The step condition failed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BisimulationFailure {
    /// The pair reached after `step` unfoldings is not in the relation.
    #[error("pair reached after {step} unfoldings is not related")]
    NotRelated {
        /// Unfolding index.
        step: usize,
    },
    /// One side is exhausted and the other is not.
    #[error("one side ended after {step} elements and the other did not")]
    LengthMismatch {
        /// Unfolding index.
        step: usize,
    },
    /// Both sides have a head, but the heads differ.
    #[error("heads differ at position {step}")]
    HeadMismatch {
        /// Unfolding index.
        step: usize,
    },
}

/// Checks that `relation` satisfies the bisimulation step condition along
/// the first `steps` unfoldings of `(left, right)`.
///
/// # Errors
///
/// Returns the first unfolding at which the relation fails to hold or the
/// pair fails the step condition.
pub fn coinduct<T, R>(
    relation: &R,
    left: &LazySeq<T>,
    right: &LazySeq<T>,
    steps: usize,
) -> Result<BisimulationWitness, BisimulationFailure>
where
    T: Clone + PartialEq + Send + 'static,
    R: Bisimulation<T> + ?Sized,
{
    let mut left = left.clone();
    let mut right = right.clone();

    for step in 0..steps {
        if !relation.relates(&left, &right) {
            return Err(BisimulationFailure::NotRelated { step });
        }
        match (left.uncons(), right.uncons()) {
            (None, None) => {
                return Ok(BisimulationWitness {
                    steps_checked: step,
                    exhausted: true,
                })
            }
            (Some((a, a_rest)), Some((b, b_rest))) => {
                if a != b {
                    return Err(BisimulationFailure::HeadMismatch { step });
                }
                left = a_rest;
                right = b_rest;
            }
            _ => return Err(BisimulationFailure::LengthMismatch { step }),
        }
    }

    Ok(BisimulationWitness {
        steps_checked: steps,
        exhausted: false,
    })
}

//! Combinators on lazy sequences.
//!
//! Every combinator is a single [`LazySeq::corecurse`] over a seed that
//! carries the unconsumed inputs, so nothing upstream is forced until the
//! corresponding output cell is.

use crate::seq::{Emission, LazySeq};

impl<T: Clone + Send + 'static> LazySeq<T> {
    /// Applies `f` to every element.
    ///
    /// Forcing output position `n` forces exactly input positions `0..=n`.
    pub fn map<U, F>(&self, f: F) -> LazySeq<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        LazySeq::corecurse(self.clone(), move |seq: LazySeq<T>| match seq.uncons() {
            Some((head, tail)) => Emission::Next(f(head), tail),
            None => Emission::Done,
        })
    }

    /// Pairs up elements; ends as soon as either input ends.
    pub fn zip<U>(&self, other: &LazySeq<U>) -> LazySeq<(T, U)>
    where
        U: Clone + Send + 'static,
    {
        LazySeq::corecurse(
            (self.clone(), other.clone()),
            |(left, right): (LazySeq<T>, LazySeq<U>)| match (left.uncons(), right.uncons()) {
                (Some((a, a_rest)), Some((b, b_rest))) => Emission::Next((a, b), (a_rest, b_rest)),
                _ => Emission::Done,
            },
        )
    }

    /// Running accumulation: `init, f(init, x0), f(f(init, x0), x1), ...`.
    ///
    /// The result has one more element than a finite input and is infinite
    /// on infinite input. Forcing output position `n` forces exactly input
    /// positions `0..=n`.
    pub fn fold<A, F>(&self, init: A, f: F) -> LazySeq<A>
    where
        A: Clone + Send + 'static,
        F: Fn(&A, T) -> A + Send + Sync + 'static,
    {
        LazySeq::corecurse(
            Some((init, self.clone())),
            move |state: Option<(A, LazySeq<T>)>| match state {
                None => Emission::Done,
                Some((acc, seq)) => {
                    let next = seq.uncons().map(|(head, tail)| (f(&acc, head), tail));
                    Emission::Next(acc, next)
                }
            },
        )
    }

    /// Concatenates `other` after `self`.
    ///
    /// If `self` is infinite, `other` is never reached.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        LazySeq::corecurse(
            (true, self.clone(), other.clone()),
            |(in_left, left, right): (bool, LazySeq<T>, LazySeq<T>)| {
                if in_left {
                    if let Some((head, tail)) = left.uncons() {
                        return Emission::Next(head, (true, tail, right));
                    }
                }
                match right.uncons() {
                    Some((head, tail)) => Emission::Next(head, (false, LazySeq::empty(), tail)),
                    None => Emission::Done,
                }
            },
        )
    }

    /// Pairs every element with its position.
    #[must_use]
    pub fn enumerate(&self) -> LazySeq<(usize, T)> {
        LazySeq::corecurse(
            (0usize, self.clone()),
            |(index, seq): (usize, LazySeq<T>)| match seq.uncons() {
                Some((head, tail)) => Emission::Next((index, head), (index + 1, tail)),
                None => Emission::Done,
            },
        )
    }
}

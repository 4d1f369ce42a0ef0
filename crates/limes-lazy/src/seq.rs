//! Memoized, corecursively produced sequences.
//!
//! A [`LazySeq`] is a chain of shared cells. Each cell is either pending
//! (it holds the thunk that produces it) or forced (it holds either the
//! end of the sequence or a value together with the next cell). Forcing
//! runs the thunk exactly once; every later observer reads the memoized
//! step.
//!
//! The only way to end a sequence is the `Nil` step, which has no tail,
//! so once a position is absent every later position is absent too.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// One emission of a corecursive step function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emission<T, S> {
    /// The sequence ends here.
    Done,
    /// Emit a value and continue from the next seed.
    Next(T, S),
}

/// The forced shape of a single cell.
enum Step<T> {
    Nil,
    Cons(T, LazySeq<T>),
}

type Thunk<T> = Box<dyn FnOnce() -> Step<T> + Send>;

enum CellState<T> {
    Pending(Thunk<T>),
    Forced(Step<T>),
    /// The step function panicked; the cell has no value to offer.
    Poisoned,
}

struct Cell<T> {
    state: Mutex<CellState<T>>,
}

/// A possibly infinite, lazily produced sequence.
///
/// Cloning is cheap: clones share the same cells, so a prefix forced
/// through one clone is visible through every other.
///
/// A step function must not force the sequence it is currently producing.
/// If a step function panics, the cell it was producing stays poisoned and
/// every later attempt to force it panics as well.
pub struct LazySeq<T> {
    cell: Arc<Cell<T>>,
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> LazySeq<T> {
    fn from_state(state: CellState<T>) -> Self {
        Self {
            cell: Arc::new(Cell {
                state: Mutex::new(state),
            }),
        }
    }

    /// Creates the exhausted sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_state(CellState::Forced(Step::Nil))
    }

    /// Prepends `head` to `tail`.
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self::from_state(CellState::Forced(Step::Cons(head, tail)))
    }

    /// Returns true if the first cell has already been forced.
    ///
    /// Never forces anything.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        matches!(*self.cell.state.lock(), CellState::Forced(_))
    }

    /// Counts the cells that are already forced, without forcing more.
    ///
    /// The terminating `Nil` step is not counted.
    #[must_use]
    pub fn forced_len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.clone();
        loop {
            let next = match &*cursor.cell.state.lock() {
                CellState::Forced(Step::Cons(_, tail)) => tail.clone(),
                _ => return count,
            };
            count += 1;
            cursor = next;
        }
    }

    /// Forces the first cell and hands its step to `f`.
    ///
    /// # Panics
    ///
    /// Panics if the cell's step function panicked on an earlier force.
    fn with_step<R>(&self, f: impl FnOnce(&Step<T>) -> R) -> R {
        let mut guard = self.cell.state.lock();
        if matches!(*guard, CellState::Pending(_)) {
            // Left poisoned if the thunk unwinds.
            if let CellState::Pending(thunk) = std::mem::replace(&mut *guard, CellState::Poisoned) {
                *guard = CellState::Forced(thunk());
            }
        }
        match &*guard {
            CellState::Forced(step) => f(step),
            _ => panic!("lazy sequence cell panicked while being forced"),
        }
    }

    /// Returns true if the sequence has no elements.
    ///
    /// Forces the first cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_step(|step| matches!(step, Step::Nil))
    }

    /// Returns the sequence without its first element.
    ///
    /// The tail of the empty sequence is empty.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.with_step(|step| match step {
            Step::Nil => None,
            Step::Cons(_, tail) => Some(tail.clone()),
        })
        .unwrap_or_else(Self::empty)
    }

    /// Forces the first `n` cells and returns how many of them hold a value.
    ///
    /// This is the only operation whose purpose is its effect: after it
    /// returns, the first `n` positions are memoized.
    pub fn force(&self, n: usize) -> usize {
        let mut cursor = self.clone();
        for forced in 0..n {
            let next = cursor.with_step(|step| match step {
                Step::Nil => None,
                Step::Cons(_, tail) => Some(tail.clone()),
            });
            match next {
                Some(tail) => cursor = tail,
                None => return forced,
            }
        }
        n
    }

    /// Detaches the forced tail if this handle is the last owner of its cell.
    fn detach_tail(&mut self) -> Option<Self> {
        let cell = Arc::get_mut(&mut self.cell)?;
        match std::mem::replace(cell.state.get_mut(), CellState::Forced(Step::Nil)) {
            CellState::Forced(Step::Cons(_, tail)) => Some(tail),
            _ => None,
        }
    }
}

impl<T> Drop for LazySeq<T> {
    fn drop(&mut self) {
        // Unlink forced chains iteratively so long prefixes do not recurse.
        let mut next = self.detach_tail();
        while let Some(mut seq) = next {
            next = seq.detach_tail();
        }
    }
}

impl<T: Send + 'static> LazySeq<T> {
    /// Creates a sequence whose first cell is produced on demand.
    fn pending(thunk: impl FnOnce() -> Step<T> + Send + 'static) -> Self {
        Self::from_state(CellState::Pending(Box::new(thunk)))
    }

    /// Builds a sequence by repeatedly applying `step` to a seed.
    ///
    /// Position `n` holds the value of the `n`-th emission; the first
    /// [`Emission::Done`] ends the sequence.
    pub fn corecurse<S, F>(seed: S, step: F) -> Self
    where
        S: Send + 'static,
        F: Fn(S) -> Emission<T, S> + Send + Sync + 'static,
    {
        Self::unfold_shared(seed, Arc::new(step))
    }

    fn unfold_shared<S, F>(seed: S, step: Arc<F>) -> Self
    where
        S: Send + 'static,
        F: Fn(S) -> Emission<T, S> + Send + Sync + 'static,
    {
        Self::pending(move || match (*step)(seed) {
            Emission::Done => Step::Nil,
            Emission::Next(value, next) => Step::Cons(value, Self::unfold_shared(next, step)),
        })
    }

    /// Creates a finite sequence from a vector.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::corecurse(items.into_iter(), |mut iter| match iter.next() {
            Some(value) => Emission::Next(value, iter),
            None => Emission::Done,
        })
    }

    /// The infinite sequence `init, f(init), f(f(init)), ...`.
    pub fn iterate<F>(init: T, f: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self::corecurse(init, move |current| {
            let next = f(&current);
            Emission::Next(current, next)
        })
    }
}

impl<T: Clone + Send + 'static> LazySeq<T> {
    /// Rebuilds the forced first step of `self` as an owned step.
    fn take_first_step(&self) -> Step<T> {
        self.with_step(|step| match step {
            Step::Nil => Step::Nil,
            Step::Cons(head, tail) => Step::Cons(head.clone(), tail.clone()),
        })
    }

    /// Defers construction of a whole sequence until it is first forced.
    pub fn defer<F>(make: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self::pending(move || make().take_first_step())
    }

    /// The infinite constant sequence.
    #[must_use]
    pub fn repeat(value: T) -> Self {
        Self::corecurse(value, |value: T| Emission::Next(value.clone(), value))
    }

    /// Splits off the first element, forcing exactly one cell.
    #[must_use]
    pub fn uncons(&self) -> Option<(T, Self)> {
        self.with_step(|step| match step {
            Step::Nil => None,
            Step::Cons(head, tail) => Some((head.clone(), tail.clone())),
        })
    }

    /// Returns the first element, if any.
    #[must_use]
    pub fn head(&self) -> Option<T> {
        self.with_step(|step| match step {
            Step::Nil => None,
            Step::Cons(head, _) => Some(head.clone()),
        })
    }

    /// Returns the element at position `n`, forcing the first `n + 1` cells.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<T> {
        self.skip(n).head()
    }

    /// Drops the first `n` elements.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        let mut cursor = self.clone();
        for _ in 0..n {
            match cursor.uncons() {
                Some((_, tail)) => cursor = tail,
                None => return cursor,
            }
        }
        cursor
    }

    /// Collects at most `n` leading elements.
    #[must_use]
    pub fn take(&self, n: usize) -> Vec<T> {
        self.iter().take(n).collect()
    }

    /// Iterates over the elements, forcing one cell per item.
    #[must_use]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            cursor: self.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> LazySeq<T> {
    /// Compares the first `n` positions of two sequences.
    ///
    /// This is the observable notion of equality: two sequences that agree
    /// on every finite prefix are indistinguishable.
    #[must_use]
    pub fn eq_up_to(&self, other: &Self, n: usize) -> bool {
        let mut left = self.clone();
        let mut right = other.clone();
        for _ in 0..n {
            match (left.uncons(), right.uncons()) {
                (None, None) => return true,
                (Some((a, a_rest)), Some((b, b_rest))) if a == b => {
                    left = a_rest;
                    right = b_rest;
                }
                _ => return false,
            }
        }
        true
    }
}

/// Iterator over a [`LazySeq`].
pub struct Iter<T> {
    cursor: LazySeq<T>,
}

impl<T: Clone + Send + 'static> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (head, tail) = self.cursor.uncons()?;
        self.cursor = tail;
        Some(head)
    }
}

impl<T: Send + 'static> From<Vec<T>> for LazySeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Send + 'static> FromIterator<T> for LazySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySeq<T> {
    /// Shows the forced prefix only; an unforced remainder prints as `..`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = self.clone();
        loop {
            let next = match &*cursor.cell.state.lock() {
                CellState::Forced(Step::Nil) => None,
                CellState::Forced(Step::Cons(head, tail)) => {
                    list.entry(head);
                    Some(tail.clone())
                }
                CellState::Pending(_) => {
                    list.entry(&format_args!(".."));
                    None
                }
                CellState::Poisoned => {
                    list.entry(&format_args!("<poisoned>"));
                    None
                }
            };
            match next {
                Some(tail) => cursor = tail,
                None => return list.finish(),
            }
        }
    }
}

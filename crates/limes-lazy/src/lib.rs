//! # limes-lazy
//!
//! Lazy, possibly infinite sequences for the limes limit engine.
//!
//! This crate provides:
//! - [`LazySeq`]: memoized cells produced by corecursion
//! - Combinators (`map`, `zip`, `fold`, `append`, `enumerate`)
//! - [`coinduct`]: bisimulation checking for sequence equality
//!
//! ## Design Principles
//!
//! - **Productive by construction**: a sequence is described by a step
//!   function over a seed, never by a finished collection
//! - **Force once**: each position is computed at most once and shared by
//!   every clone
//! - **No error states**: absence of an element is an ordinary value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bisim;
pub mod ops;
pub mod seq;

#[cfg(test)]
mod proptests;

pub use bisim::{coinduct, Bisimulation, BisimulationFailure, BisimulationWitness, Universal};
pub use seq::{Emission, Iter, LazySeq};

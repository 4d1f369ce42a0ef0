//! Asymptotic bases.
//!
//! A basis is a finite list of functions tending to +∞, each growing
//! faster in log-scale than the next. A multiseries of depth `d` is an
//! expansion over a basis of `d` functions: its outer exponents belong to
//! `basis[0]`, the exponents one level down to `basis[1]`, and so on.

use crate::comparison::{ComparisonClass, GrowthRate};
use crate::limit::LimitError;
use smallvec::SmallVec;
use std::fmt;

/// A named function tending to +∞.
#[derive(Clone, Debug, PartialEq)]
pub struct BasisFunction {
    name: String,
    growth: GrowthRate,
}

impl BasisFunction {
    /// Creates a basis function.
    pub fn new(name: impl Into<String>, growth: GrowthRate) -> Self {
        Self {
            name: name.into(),
            growth,
        }
    }

    /// The identity `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::new("x", GrowthRate::Polynomial(1))
    }

    /// `log x`.
    #[must_use]
    pub fn log_x() -> Self {
        Self::iterated_log(1)
    }

    /// `exp(x)`.
    #[must_use]
    pub fn exp_x() -> Self {
        Self::iterated_exp(1)
    }

    /// `exp(exp(...exp(x)))` with `k` exponentials.
    #[must_use]
    pub fn iterated_exp(k: u32) -> Self {
        Self::new(wrap("exp", k), GrowthRate::iterated_exp(k))
    }

    /// `log(log(...log(x)))` with `k` logarithms.
    #[must_use]
    pub fn iterated_log(k: u32) -> Self {
        Self::new(wrap("log", k), GrowthRate::iterated_log(k))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the growth classification.
    #[must_use]
    pub fn growth(&self) -> &GrowthRate {
        &self.growth
    }

    /// Compares growth with another basis function in log-scale.
    #[must_use]
    pub fn compare(&self, other: &Self) -> ComparisonClass {
        self.growth.compare(&other.growth)
    }
}

fn wrap(function: &str, k: u32) -> String {
    let mut name = "x".to_string();
    for _ in 0..k {
        name = format!("{function}({name})");
    }
    name
}

impl fmt::Display for BasisFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An ordered asymptotic basis, dominant function first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Basis {
    functions: SmallVec<[BasisFunction; 4]>,
}

impl Basis {
    /// Creates a basis from functions listed from most to least dominant.
    ///
    /// The ordering is not validated here, see [`check_ordering`](Self::check_ordering).
    #[must_use]
    pub fn new(functions: Vec<BasisFunction>) -> Self {
        Self {
            functions: functions.into(),
        }
    }

    /// `[exp^(k-1)(x), ..., exp(x), x]`.
    #[must_use]
    pub fn standard(k: u32) -> Self {
        Self {
            functions: (0..k).rev().map(BasisFunction::iterated_exp).collect(),
        }
    }

    /// `[x, log x, ..., log^(k-1)(x)]`.
    #[must_use]
    pub fn logarithmic(k: u32) -> Self {
        Self {
            functions: (0..k).map(BasisFunction::iterated_log).collect(),
        }
    }

    /// Returns the number of basis functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true for the empty basis (scalar expansions only).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns the function at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BasisFunction> {
        self.functions.get(index)
    }

    /// Returns the most rapidly growing function.
    #[must_use]
    pub fn dominant(&self) -> Option<&BasisFunction> {
        self.functions.first()
    }

    /// Iterates from the dominant function down.
    pub fn iter(&self) -> std::slice::Iter<'_, BasisFunction> {
        self.functions.iter()
    }

    /// Checks that every function tends to +∞ and strictly dominates its
    /// successor in log-scale.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::BasisNotOrdered`] with the index of the first
    /// offending function.
    pub fn check_ordering(&self) -> Result<(), LimitError> {
        for (index, function) in self.functions.iter().enumerate() {
            if !function.growth.tends_to_infinity() {
                return Err(LimitError::BasisNotOrdered { index });
            }
            if let Some(next) = self.functions.get(index + 1) {
                if !function.compare(next).is_greater() {
                    return Err(LimitError::BasisNotOrdered { index });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Basis {
    type Item = &'a BasisFunction;
    type IntoIter = std::slice::Iter<'a, BasisFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<BasisFunction> for Basis {
    fn from_iter<I: IntoIterator<Item = BasisFunction>>(iter: I) -> Self {
        Self {
            functions: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{function}")?;
        }
        write!(f, "]")
    }
}

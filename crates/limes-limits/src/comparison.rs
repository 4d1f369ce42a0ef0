//! Asymptotic comparison classes for basis functions.
//!
//! A multiseries basis must be ordered by growth in log-scale: each basis
//! function must dominate every later one even after taking logarithms,
//! so that a power of a later function can never catch up with a power of
//! an earlier one. This module classifies functions tending to +∞ and
//! compares them in that sense.

use std::cmp::Ordering;

/// Asymptotic comparison result between two functions as x → ∞.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonClass {
    /// log f / log g → 0 (f grows slower than every power of g)
    LessThan,
    /// log f / log g → c ≠ 0, ∞ (f and g are powers of each other up to lower order)
    Comparable,
    /// log f / log g → ∞ (f grows faster than every power of g)
    GreaterThan,
    /// Cannot determine the comparison
    Unknown,
}

impl ComparisonClass {
    /// Returns true if self represents "less than" (slower growth).
    #[must_use]
    pub fn is_less(&self) -> bool {
        matches!(self, ComparisonClass::LessThan)
    }

    /// Returns true if self represents "greater than" (faster growth).
    #[must_use]
    pub fn is_greater(&self) -> bool {
        matches!(self, ComparisonClass::GreaterThan)
    }

    /// Returns true if the functions are in the same comparability class.
    #[must_use]
    pub fn is_comparable(&self) -> bool {
        matches!(self, ComparisonClass::Comparable)
    }

    /// Reverses the comparison (swaps the two functions).
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            ComparisonClass::LessThan => ComparisonClass::GreaterThan,
            ComparisonClass::GreaterThan => ComparisonClass::LessThan,
            other => other,
        }
    }
}

impl From<Ordering> for ComparisonClass {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => ComparisonClass::LessThan,
            Ordering::Equal => ComparisonClass::Comparable,
            Ordering::Greater => ComparisonClass::GreaterThan,
        }
    }
}

impl From<ComparisonClass> for Option<Ordering> {
    fn from(class: ComparisonClass) -> Self {
        match class {
            ComparisonClass::LessThan => Some(Ordering::Less),
            ComparisonClass::Comparable => Some(Ordering::Equal),
            ComparisonClass::GreaterThan => Some(Ordering::Greater),
            ComparisonClass::Unknown => None,
        }
    }
}

/// Growth classification of a basis function.
#[derive(Clone, Debug, PartialEq)]
pub enum GrowthRate {
    /// Bounded as x → ∞
    Constant,
    /// (log x)^n
    Logarithmic(i32),
    /// log(log(...log(x))) with the given number of logarithms, at least 2
    IteratedLogarithm(u32),
    /// x^n
    Polynomial(i32),
    /// exp(c * x^n)
    Exponential { coeff: f64, power: i32 },
    /// exp(exp(...exp(x))) with the given tower height, at least 2
    SuperExponential(u32),
    /// Unknown growth rate
    Unknown,
}

impl GrowthRate {
    /// Creates a polynomial growth rate.
    #[must_use]
    pub fn poly(n: i32) -> Self {
        if n == 0 {
            GrowthRate::Constant
        } else {
            GrowthRate::Polynomial(n)
        }
    }

    /// Creates an exponential growth rate.
    #[must_use]
    pub fn exp(power: i32) -> Self {
        GrowthRate::Exponential { coeff: 1.0, power }
    }

    /// Creates the growth rate of a k-fold iterated logarithm.
    #[must_use]
    pub fn iterated_log(k: u32) -> Self {
        match k {
            0 => GrowthRate::Polynomial(1),
            1 => GrowthRate::Logarithmic(1),
            k => GrowthRate::IteratedLogarithm(k),
        }
    }

    /// Creates the growth rate of a k-fold iterated exponential.
    #[must_use]
    pub fn iterated_exp(k: u32) -> Self {
        match k {
            0 => GrowthRate::Polynomial(1),
            1 => GrowthRate::exp(1),
            k => GrowthRate::SuperExponential(k),
        }
    }

    /// Returns true if the function is known to tend to +∞.
    #[must_use]
    pub fn tends_to_infinity(&self) -> bool {
        match self {
            GrowthRate::Logarithmic(n) | GrowthRate::Polynomial(n) => *n > 0,
            GrowthRate::Exponential { coeff, power } => *coeff > 0.0 && *power > 0,
            GrowthRate::IteratedLogarithm(k) | GrowthRate::SuperExponential(k) => *k >= 2,
            GrowthRate::Constant | GrowthRate::Unknown => false,
        }
    }

    /// Position on the log-scale ladder: `(tier, sub-tier)`.
    ///
    /// Equal keys are comparable; otherwise the larger key dominates.
    fn log_scale_key(&self) -> Option<(i64, i32)> {
        match self {
            GrowthRate::IteratedLogarithm(k) => Some((-i64::from(*k), 0)),
            GrowthRate::Logarithmic(_) => Some((-1, 0)),
            GrowthRate::Polynomial(_) => Some((0, 0)),
            GrowthRate::Exponential { power, .. } => Some((1, *power)),
            GrowthRate::SuperExponential(k) => Some((i64::from(*k), 0)),
            GrowthRate::Constant | GrowthRate::Unknown => None,
        }
    }

    /// Compares two growth rates in log-scale.
    ///
    /// `x` and `x^2` are comparable, `x` and `log x` are not.
    #[must_use]
    pub fn compare(&self, other: &Self) -> ComparisonClass {
        match (self, other) {
            (GrowthRate::Unknown, _) | (_, GrowthRate::Unknown) => ComparisonClass::Unknown,

            // Constants are comparable to each other, slower than everything else
            (GrowthRate::Constant, GrowthRate::Constant) => ComparisonClass::Comparable,
            (GrowthRate::Constant, _) => ComparisonClass::LessThan,
            (_, GrowthRate::Constant) => ComparisonClass::GreaterThan,

            _ => match (self.log_scale_key(), other.log_scale_key()) {
                (Some(a), Some(b)) => a.cmp(&b).into(),
                _ => ComparisonClass::Unknown,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_class() {
        assert!(ComparisonClass::LessThan.is_less());
        assert!(ComparisonClass::GreaterThan.is_greater());
        assert!(ComparisonClass::Comparable.is_comparable());

        assert_eq!(
            ComparisonClass::LessThan.reverse(),
            ComparisonClass::GreaterThan
        );
        assert_eq!(Option::<Ordering>::from(ComparisonClass::Unknown), None);
    }

    #[test]
    fn test_growth_rate_ladder() {
        // log log x < log x < x < exp(x) < exp(x^2) < exp(exp(x))
        let ladder = [
            GrowthRate::iterated_log(2),
            GrowthRate::Logarithmic(1),
            GrowthRate::Polynomial(1),
            GrowthRate::exp(1),
            GrowthRate::exp(2),
            GrowthRate::iterated_exp(2),
        ];
        for pair in ladder.windows(2) {
            assert_eq!(pair[0].compare(&pair[1]), ComparisonClass::LessThan);
            assert_eq!(pair[1].compare(&pair[0]), ComparisonClass::GreaterThan);
        }
    }

    #[test]
    fn test_powers_are_comparable() {
        assert!(GrowthRate::Polynomial(1)
            .compare(&GrowthRate::Polynomial(3))
            .is_comparable());
        assert!(GrowthRate::Logarithmic(1)
            .compare(&GrowthRate::Logarithmic(2))
            .is_comparable());
        assert!(GrowthRate::Exponential { coeff: 1.0, power: 1 }
            .compare(&GrowthRate::Exponential { coeff: 3.0, power: 1 })
            .is_comparable());
    }

    #[test]
    fn test_constant_and_unknown() {
        assert_eq!(
            GrowthRate::Constant.compare(&GrowthRate::Polynomial(1)),
            ComparisonClass::LessThan
        );
        assert_eq!(
            GrowthRate::Unknown.compare(&GrowthRate::Constant),
            ComparisonClass::Unknown
        );
    }

    #[test]
    fn test_tends_to_infinity() {
        assert!(GrowthRate::Polynomial(1).tends_to_infinity());
        assert!(GrowthRate::iterated_exp(3).tends_to_infinity());
        assert!(!GrowthRate::Polynomial(-1).tends_to_infinity());
        assert!(!GrowthRate::Constant.tends_to_infinity());
        assert!(!GrowthRate::Exponential { coeff: -1.0, power: 1 }.tends_to_infinity());
    }
}

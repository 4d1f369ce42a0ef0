//! Property-based tests for limit verdicts.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{find_limit, Basis, LimitConfig, LimitResult};
    use limes_series::{ExactSign, Multiseries};

    fn exponents() -> impl Strategy<Value = Vec<i8>> {
        prop::collection::vec(-3i8..=3, 1..4)
    }

    fn nonzero() -> impl Strategy<Value = i8> {
        prop_oneof![-5i8..=-1, 1i8..=5]
    }

    fn monomial(c: i8, es: &[i8]) -> Multiseries<f64> {
        let es: Vec<f64> = es.iter().map(|&e| f64::from(e)).collect();
        Multiseries::monomial(f64::from(c), &es)
    }

    fn limit(ms: &Multiseries<f64>) -> LimitResult<f64> {
        let basis = Basis::standard(u32::try_from(ms.depth()).unwrap());
        find_limit(ms, &basis, &ExactSign, &LimitConfig::default()).unwrap()
    }

    /// The limit of a single monomial, decided by hand.
    fn expected(c: i8, es: &[i8]) -> LimitResult<f64> {
        match es.iter().find(|&&e| e != 0) {
            None => LimitResult::Finite(f64::from(c)),
            Some(&e) if e < 0 => LimitResult::Finite(0.0),
            Some(_) if c > 0 => LimitResult::PosInfinity,
            Some(_) => LimitResult::NegInfinity,
        }
    }

    proptest! {
        #[test]
        fn monomial_limit_matches_exponents(c in nonzero(), es in exponents()) {
            prop_assert_eq!(limit(&monomial(c, &es)), expected(c, &es));
        }

        #[test]
        fn negation_flips_infinite_limits(c in nonzero(), es in exponents()) {
            let ms = monomial(c, &es);
            let flipped = match limit(&ms) {
                LimitResult::PosInfinity => LimitResult::NegInfinity,
                LimitResult::NegInfinity => LimitResult::PosInfinity,
                LimitResult::Finite(v) => LimitResult::Finite(-v),
            };
            prop_assert_eq!(limit(&ms.negate()), flipped);
        }

        #[test]
        fn cancelled_leading_term_is_invisible(
            c in nonzero(),
            es in exponents(),
            lower in nonzero(),
        ) {
            // c·m + lower·x^-1·(...) - c·m has the limit of the lower term alone
            let leading = monomial(c, &es);
            let mut lower_es = es.clone();
            lower_es[0] -= 10;
            let tail = monomial(lower, &lower_es);
            let ms = leading.add(&tail).sub(&leading);
            prop_assert_eq!(limit(&ms), limit(&tail));
        }
    }
}

//! Property-based tests for trimming and leading terms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{leading_term, trim, ExactSign, Multiseries, TrimError};

    /// Coefficients drawn from a small range so zeros are common.
    fn coeffs() -> impl Strategy<Value = Vec<i8>> {
        prop::collection::vec(-2i8..=2, 0..12)
    }

    /// A depth-1 series with exponents n-1, n-2, ..., 0.
    fn depth_one(cs: &[i8]) -> Multiseries<f64> {
        let n = cs.len();
        Multiseries::from_scalars(
            cs.iter()
                .enumerate()
                .map(|(i, &c)| ((n - i) as f64 - 1.0, f64::from(c)))
                .collect(),
        )
    }

    /// A depth-2 series whose coefficients are depth-1 chunks of `cs`.
    fn depth_two(cs: &[i8]) -> Multiseries<f64> {
        let chunks: Vec<_> = cs.chunks(3).collect();
        let n = chunks.len();
        Multiseries::from_terms(
            2,
            chunks
                .into_iter()
                .enumerate()
                .map(|(i, chunk)| ((n - i) as f64, depth_one(chunk)))
                .collect(),
        )
    }

    proptest! {
        #[test]
        fn trim_is_idempotent(cs in coeffs()) {
            for ms in [depth_one(&cs), depth_two(&cs)] {
                let once = trim(&ms, &ExactSign, 200).unwrap();
                let twice = trim(once.as_multiseries(), &ExactSign, 200).unwrap();
                prop_assert_eq!(once.leading_term(), twice.leading_term());
                prop_assert!(twice.as_multiseries().is_trimmed());
            }
        }

        #[test]
        fn trim_drops_exactly_the_leading_zeros(cs in coeffs()) {
            let ms = depth_one(&cs);
            let trimmed = trim(&ms, &ExactSign, 200).unwrap();
            let expected: Vec<i8> = cs.iter().copied().skip_while(|&c| c == 0).collect();
            let kept: Vec<f64> = trimmed
                .as_multiseries()
                .terms()
                .unwrap()
                .iter()
                .map(|t| *t.coeff.as_scalar().unwrap())
                .collect();
            prop_assert_eq!(kept, expected.iter().map(|&c| f64::from(c)).collect::<Vec<_>>());
        }

        #[test]
        fn leading_coefficient_is_nonzero_unless_all_vanish(cs in coeffs()) {
            let ms = depth_two(&cs);
            let m = leading_term(&trim(&ms, &ExactSign, 200).unwrap());
            prop_assert_eq!(m.depth(), 2);
            if cs.iter().all(|&c| c == 0) {
                prop_assert_eq!(m.coeff, 0.0);
            } else {
                prop_assert!(m.coeff != 0.0);
            }
        }

        #[test]
        fn zero_fuel_never_answers_wrongly(cs in coeffs()) {
            let ms = depth_one(&cs);
            match trim(&ms, &ExactSign, 0) {
                Ok(t) => prop_assert!(cs.is_empty() && t.as_multiseries().is_flat_zero()),
                Err(err) => prop_assert_eq!(err, TrimError::OutOfFuel { fuel: 0 }),
            }
        }

        #[test]
        fn trimmed_series_stays_well_ordered(cs in coeffs()) {
            let ms = depth_two(&cs);
            prop_assert!(ms.is_well_ordered(16));
            let trimmed = trim(&ms, &ExactSign, 200).unwrap();
            prop_assert!(trimmed.as_multiseries().is_well_ordered(16));
        }
    }
}

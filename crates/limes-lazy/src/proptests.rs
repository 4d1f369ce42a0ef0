//! Property-based tests for lazy sequences.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{coinduct, Emission, LazySeq, Universal};

    /// Collatz-style step used as an arbitrary deterministic generator.
    fn step(n: u64) -> Emission<u64, u64> {
        if n <= 1 {
            Emission::Done
        } else if n % 2 == 0 {
            Emission::Next(n, n / 2)
        } else {
            Emission::Next(n, 3 * n + 1)
        }
    }

    fn by_hand(mut seed: u64, n: usize) -> Vec<u64> {
        let mut out = Vec::new();
        while out.len() < n {
            match step(seed) {
                Emission::Done => break,
                Emission::Next(value, next) => {
                    out.push(value);
                    seed = next;
                }
            }
        }
        out
    }

    fn small_vec() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(-100i32..100, 0..20)
    }

    proptest! {
        #[test]
        fn corecurse_matches_hand_iteration(seed in 1u64..10_000, n in 0usize..200) {
            let seq = LazySeq::corecurse(seed, step);
            prop_assert_eq!(seq.take(n), by_hand(seed, n));
        }

        #[test]
        fn append_splits_at_left_length(a in small_vec(), b in small_vec(), k in 0usize..25) {
            let left = LazySeq::from_vec(a.clone());
            let right = LazySeq::from_vec(b.clone());
            let joined = left.append(&right).take(a.len() + k);

            let mut expected = left.take(a.len());
            expected.extend(right.take(k));
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn bisimilar_sequences_agree_on_prefixes(a in small_vec(), n in 0usize..30) {
            // Rebuilding through map and fold must stay bisimilar to the original.
            let original = LazySeq::from_vec(a.clone());
            let rebuilt = original
                .map(|x| x + 1)
                .map(|x| x - 1)
                .fold(None, |_, x| Some(x))
                .tail()
                .map(|x: Option<i32>| x.unwrap_or_default());

            let same_head = |l: &LazySeq<i32>, r: &LazySeq<i32>| l.head() == r.head();
            let witness = coinduct(&same_head, &original, &rebuilt, a.len() + 1);
            prop_assert!(witness.is_ok());
            prop_assert!(witness.unwrap().exhausted);
            prop_assert_eq!(original.take(n), rebuilt.take(n));
        }

        #[test]
        fn universal_relation_agrees_with_prefix_equality(a in small_vec(), b in small_vec()) {
            let left = LazySeq::from_vec(a.clone());
            let right = LazySeq::from_vec(b.clone());
            let bisimilar = coinduct(&Universal, &left, &right, 25).is_ok();
            prop_assert_eq!(bisimilar, a == b);
        }

        #[test]
        fn enumerate_then_project_is_identity(a in small_vec()) {
            let seq = LazySeq::from_vec(a.clone());
            let projected = seq.enumerate().map(|(_, x)| x);
            prop_assert!(projected.eq_up_to(&seq, a.len() + 1));
            let indices: Vec<usize> = seq.enumerate().iter().map(|(i, _)| i).collect();
            prop_assert_eq!(indices, (0..a.len()).collect::<Vec<_>>());
        }
    }
}

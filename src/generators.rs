//! Input-distribution generators.
//!
//! Five canonical input shapes exercise the interesting regimes of a
//! comparison sort: already sorted, reversed, a random permutation of unique
//! values, many duplicates, and sorted-with-a-few-swaps. Each generator
//! returns `None` for sizes ≤ 0 — the "no array" sentinel the case runner
//! treats as a skip. For a positive size the returned array always has
//! exactly `size` elements; anything else is a contract violation.
//!
//! Generation itself may copy values around, but the case runner resets the
//! counter after generation, so none of it leaks into a measurement.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::counter::CounterRef;
use crate::instrumented::Counted;

/// A generator produces an array of counted values for a requested size.
pub type GeneratorFn = fn(&CounterRef, i64) -> Option<Vec<Counted>>;

/// Payloads `0..size` in ascending order.
pub fn sorted(counter: &CounterRef, size: i64) -> Option<Vec<Counted>> {
    if size <= 0 {
        return None;
    }
    Some((0..size).map(|v| Counted::new(v, counter)).collect())
}

/// Payloads `size-1..=0` in descending order.
pub fn reversed(counter: &CounterRef, size: i64) -> Option<Vec<Counted>> {
    if size <= 0 {
        return None;
    }
    Some((0..size).rev().map(|v| Counted::new(v, counter)).collect())
}

/// A uniform random permutation of the unique payloads `0..size`.
pub fn random_unique(counter: &CounterRef, size: i64) -> Option<Vec<Counted>> {
    let mut values = sorted(counter, size)?;
    values.shuffle(&mut rand::rng());
    Some(values)
}

/// Low-cardinality payloads: roughly `size / 10` distinct values drawn
/// uniformly, at least two distinct values once `size > 1`.
pub fn few_unique(counter: &CounterRef, size: i64) -> Option<Vec<Counted>> {
    if size <= 0 {
        return None;
    }
    let mut num_unique = (size / 10).max(1);
    if num_unique <= 1 && size > 1 {
        num_unique = 2;
    }
    let mut rng = rand::rng();
    Some(
        (0..size)
            .map(|_| Counted::new(rng.random_range(0..num_unique), counter))
            .collect(),
    )
}

/// A sorted array disturbed by `size / 20` (at least one) random swaps.
pub fn nearly_sorted(counter: &CounterRef, size: i64) -> Option<Vec<Counted>> {
    let mut values = sorted(counter, size)?;
    if size < 2 {
        return Some(values);
    }
    let num_swaps = (size / 20).max(1);
    let mut rng = rand::rng();
    for _ in 0..num_swaps {
        let a = rng.random_range(0..values.len());
        let b = rng.random_range(0..values.len());
        // Raw exchange: disturbing the input is not a counted event.
        values.swap(a, b);
    }
    Some(values)
}

/// The canonical generator set in its fixed order. The analyzer's tie-breaks
/// depend on this order staying stable.
pub fn default_generators() -> Vec<(&'static str, GeneratorFn)> {
    vec![
        ("Reversed", reversed),
        ("Sorted", sorted),
        ("Random Unique", random_unique),
        ("Few Unique", few_unique),
        ("Nearly Sorted", nearly_sorted),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::OpCounter;
    use proptest::prelude::*;

    fn payloads(values: &[Counted]) -> Vec<i64> {
        values.iter().map(|v| v.value()).collect()
    }

    #[test]
    fn test_nonpositive_sizes_yield_no_array() {
        let counter = OpCounter::shared();
        for (name, generator) in default_generators() {
            for size in [0, -1, -50] {
                assert!(
                    generator(&counter, size).is_none(),
                    "{} produced an array for size {}",
                    name,
                    size
                );
            }
        }
    }

    #[test]
    fn test_sorted_and_reversed_shapes() {
        let counter = OpCounter::shared();
        let asc = sorted(&counter, 5).unwrap();
        assert_eq!(payloads(&asc), vec![0, 1, 2, 3, 4]);

        let desc = reversed(&counter, 5).unwrap();
        assert_eq!(payloads(&desc), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_random_unique_is_a_permutation() {
        let counter = OpCounter::shared();
        let values = random_unique(&counter, 32).unwrap();
        let mut seen = payloads(&values);
        seen.sort_unstable();
        assert_eq!(seen, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_few_unique_cardinality() {
        let counter = OpCounter::shared();
        let values = few_unique(&counter, 100).unwrap();
        let mut distinct = payloads(&values);
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= 10);
        assert!(distinct.iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn test_few_unique_two_values_for_small_sizes() {
        let counter = OpCounter::shared();
        let values = few_unique(&counter, 5).unwrap();
        assert!(payloads(&values).iter().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn test_nearly_sorted_is_a_permutation() {
        let counter = OpCounter::shared();
        let values = nearly_sorted(&counter, 40).unwrap();
        let mut seen = payloads(&values);
        seen.sort_unstable();
        assert_eq!(seen, (0..40).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn prop_positive_sizes_yield_exact_length(size in 1i64..200) {
            let counter = OpCounter::shared();
            for (name, generator) in default_generators() {
                let values = generator(&counter, size);
                prop_assert!(values.is_some(), "{} returned no array", name);
                prop_assert_eq!(values.unwrap().len(), size as usize);
            }
        }
    }
}

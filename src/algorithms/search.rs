//! Searches over counted slices.

use crate::instrumented::Counted;

/// Scan for the first element equal to `target`.
pub fn linear_search(values: &[Counted], target: &Counted) -> Option<usize> {
    for (index, value) in values.iter().enumerate() {
        if *value == *target {
            return Some(index);
        }
    }
    None
}

/// Halving search over a slice sorted ascending by payload. Returns the
/// index of some element equal to `target`.
pub fn binary_search(values: &[Counted], target: &Counted) -> Option<usize> {
    let mut low = 0;
    let mut high = values.len();
    while low < high {
        let middle = (low + high) / 2;
        if values[middle] == *target {
            return Some(middle);
        }
        if values[middle] < *target {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{CounterRef, OpCounter};

    fn from_payloads(payloads: &[i64], counter: &CounterRef) -> Vec<Counted> {
        payloads.iter().map(|&v| Counted::new(v, counter)).collect()
    }

    #[test]
    fn test_linear_search_finds_first_match() {
        let counter = OpCounter::shared();
        let values = from_payloads(&[4, 2, 7, 2], &counter);
        let target = Counted::new(2, &counter);
        assert_eq!(linear_search(&values, &target), Some(1));
    }

    #[test]
    fn test_linear_search_misses() {
        let counter = OpCounter::shared();
        let values = from_payloads(&[4, 2, 7], &counter);
        let target = Counted::new(9, &counter);
        assert_eq!(linear_search(&values, &target), None);
    }

    #[test]
    fn test_binary_search_hits_every_element() {
        let counter = OpCounter::shared();
        let values = from_payloads(&[1, 3, 5, 7, 9, 11], &counter);
        for (index, payload) in [1, 3, 5, 7, 9, 11].iter().enumerate() {
            let target = Counted::new(*payload, &counter);
            assert_eq!(binary_search(&values, &target), Some(index));
        }
    }

    #[test]
    fn test_binary_search_misses_and_handles_empty() {
        let counter = OpCounter::shared();
        let values = from_payloads(&[1, 3, 5], &counter);
        let target = Counted::new(4, &counter);
        assert_eq!(binary_search(&values, &target), None);
        assert_eq!(binary_search(&[], &target), None);
    }

    #[test]
    fn test_searches_count_their_comparisons() {
        let counter = OpCounter::shared();
        let values = from_payloads(&[1, 2, 3, 4], &counter);
        let target = Counted::new(4, &counter);
        counter.reset();

        linear_search(&values, &target);
        let snapshot = counter.snapshot_and_reset();
        assert_eq!(snapshot.equal, 4);

        binary_search(&values, &target);
        let snapshot = counter.snapshot_and_reset();
        assert_eq!(snapshot.equal + snapshot.less_than, snapshot.total_comparisons());
        assert!(snapshot.total_comparisons() > 0);
    }
}

//! Comparison sorts over counted slices.

use crate::instrumented::{self, Counted};

/// Repeatedly select the minimum of the unsorted tail. Always performs
/// n(n-1)/2 comparisons regardless of input order.
pub fn selection_sort(values: &mut [Counted]) {
    let len = values.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if values[j] < values[min] {
                min = j;
            }
        }
        instrumented::swap(values, i, min);
    }
}

/// Grow a sorted prefix by shifting each element into place. Linear on
/// already-sorted input, quadratic on reversed input.
pub fn insertion_sort(values: &mut [Counted]) {
    for i in 1..values.len() {
        let key = values[i].clone();
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            instrumented::copy_within(values, j - 1, j);
            j -= 1;
        }
        values[j].clone_from(&key);
    }
}

fn merge(values: &mut [Counted], left: &[Counted], right: &[Counted]) {
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while j < left.len() && k < right.len() {
        if left[j] <= right[k] {
            values[i].clone_from(&left[j]);
            j += 1;
        } else {
            values[i].clone_from(&right[k]);
            k += 1;
        }
        i += 1;
    }
    while j < left.len() {
        values[i].clone_from(&left[j]);
        i += 1;
        j += 1;
    }
    while k < right.len() {
        values[i].clone_from(&right[k]);
        i += 1;
        k += 1;
    }
}

/// Top-down merge sort copying both halves into scratch buffers.
pub fn merge_sort(values: &mut [Counted]) {
    if values.len() <= 1 {
        return;
    }
    let mid = values.len() / 2;
    let mut left = values[..mid].to_vec();
    let mut right = values[mid..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);
    merge(values, &left, &right);
}

fn sift_down(values: &mut [Counted], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child > end {
            return;
        }
        if child < end && values[child] < values[child + 1] {
            child += 1;
        }
        if values[root] < values[child] {
            instrumented::swap(values, root, child);
            root = child;
        } else {
            return;
        }
    }
}

/// In-place heapsort: build a max-heap, then repeatedly move the root past
/// the shrinking heap boundary.
pub fn heap_sort(values: &mut [Counted]) {
    let len = values.len();
    if len < 2 {
        return;
    }
    for start in (0..len / 2).rev() {
        sift_down(values, start, len - 1);
    }
    for end in (1..len).rev() {
        instrumented::swap(values, 0, end);
        sift_down(values, 0, end - 1);
    }
}

fn partition_lomuto(values: &mut [Counted], start: usize, end: usize) -> usize {
    let pivot = values[end].clone();
    let mut i = start;
    for j in start..end {
        if values[j] <= pivot {
            instrumented::swap(values, i, j);
            i += 1;
        }
    }
    instrumented::swap(values, i, end);
    i
}

fn quicksort_lomuto_range(values: &mut [Counted], start: usize, end: usize) {
    if start >= end {
        return;
    }
    let p = partition_lomuto(values, start, end);
    if p > start {
        quicksort_lomuto_range(values, start, p - 1);
    }
    quicksort_lomuto_range(values, p + 1, end);
}

/// Quicksort with Lomuto partitioning on the last element. Degrades to
/// quadratic on sorted and reversed input.
pub fn quicksort_lomuto(values: &mut [Counted]) {
    if values.len() < 2 {
        return;
    }
    quicksort_lomuto_range(values, 0, values.len() - 1);
}

fn partition_hoare(values: &mut [Counted], start: usize, end: usize) -> usize {
    let pivot = values[start].clone();
    let mut i = start;
    let mut j = end;
    loop {
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        instrumented::swap(values, i, j);
        i += 1;
        j -= 1;
    }
}

fn quicksort_hoare_range(values: &mut [Counted], start: usize, end: usize) {
    if start >= end {
        return;
    }
    let p = partition_hoare(values, start, end);
    quicksort_hoare_range(values, start, p);
    quicksort_hoare_range(values, p + 1, end);
}

/// Quicksort with Hoare partitioning on the first element. Fewer swaps than
/// Lomuto; still quadratic on sorted input.
pub fn quicksort_hoare(values: &mut [Counted]) {
    if values.len() < 2 {
        return;
    }
    quicksort_hoare_range(values, 0, values.len() - 1);
}

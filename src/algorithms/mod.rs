//! Demo algorithms written against the instrumented element type.
//!
//! These are the built-in subjects for the suite driver and double as
//! reference implementations of the algorithm contract: every element
//! comparison goes through the counted operators and every element movement
//! through `clone`/`clone_from` or the counted slice helpers.

pub mod search;
pub mod sort;

pub use search::{binary_search, linear_search};
pub use sort::{
    heap_sort, insertion_sort, merge_sort, quicksort_hoare, quicksort_lomuto, selection_sort,
};

use crate::complexity::Complexity;
use crate::config::TestOptions;
use crate::report::AlgorithmConfig;

/// The built-in algorithm catalogue with textbook expectations, in the
/// order the suite driver runs them.
pub fn standard_configs() -> Vec<AlgorithmConfig> {
    standard_configs_with(TestOptions::default())
}

/// Catalogue variant applying shared base options (sizes, verbosity,
/// metric) to every entry; expectations are per-algorithm.
pub fn standard_configs_with(base: TestOptions) -> Vec<AlgorithmConfig> {
    vec![
        AlgorithmConfig::new(
            "selection_sort",
            sort::selection_sort,
            base.clone()
                .expect_best(Complexity::ON2)
                .expect_worst(Complexity::ON2),
        ),
        AlgorithmConfig::new(
            "insertion_sort",
            sort::insertion_sort,
            base.clone()
                .expect_best(Complexity::ON)
                .expect_worst(Complexity::ON2),
        ),
        AlgorithmConfig::new(
            "merge_sort",
            sort::merge_sort,
            base.clone()
                .expect_best(Complexity::ONLogN)
                .expect_worst(Complexity::ONLogN),
        ),
        AlgorithmConfig::new(
            "heap_sort",
            sort::heap_sort,
            base.clone()
                .expect_best(Complexity::ONLogN)
                .expect_worst(Complexity::ONLogN),
        ),
        AlgorithmConfig::new(
            "quicksort_lomuto",
            sort::quicksort_lomuto,
            base.clone()
                .expect_best(Complexity::ONLogN)
                .expect_worst(Complexity::ON2),
        ),
        AlgorithmConfig::new(
            "quicksort_hoare",
            sort::quicksort_hoare,
            base.expect_best(Complexity::ONLogN)
                .expect_worst(Complexity::ON2),
        ),
    ]
}

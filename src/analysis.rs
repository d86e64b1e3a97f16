//! Best/worst-case identification and expectation checking.
//!
//! At the largest tested size, the generator producing the fewest operations
//! is the observed best case and the one producing the most is the observed
//! worst case. Each identified generator's full size series then feeds the
//! complexity estimator, and the resulting classes are compared against any
//! declared expectations.

use crate::complexity::{self, Complexity};
use crate::config::TestOptions;
use crate::counter::CounterSnapshot;
use crate::suite::ResultsTable;

/// One identified extreme case: the generator, its operation count at the
/// largest size, the estimated class, and the declared expectation if any.
#[derive(Clone, Debug)]
pub struct ExtremeCase {
    pub generator: String,
    pub ops: u64,
    pub estimate: Complexity,
    pub expected: Option<Complexity>,
}

impl ExtremeCase {
    /// True when a declared expectation exists and the estimate differs.
    pub fn mismatch(&self) -> bool {
        matches!(self.expected, Some(expected) if expected != self.estimate)
    }
}

/// Outcome of complexity analysis for one algorithm run.
#[derive(Clone, Debug)]
pub enum ComplexityAnalysis {
    /// No positive size, no results, or no observation at the largest size.
    Skipped,
    Analyzed {
        largest_size: i64,
        best: ExtremeCase,
        worst: ExtremeCase,
    },
}

impl ComplexityAnalysis {
    /// True when any declared expectation was not met. Skipped analysis
    /// never mismatches, even if expectations were declared.
    pub fn mismatch(&self) -> bool {
        match self {
            ComplexityAnalysis::Skipped => false,
            ComplexityAnalysis::Analyzed { best, worst, .. } => {
                best.mismatch() || worst.mismatch()
            }
        }
    }
}

fn metric(snapshot: &CounterSnapshot, use_comparisons: bool) -> u64 {
    if use_comparisons {
        snapshot.total_comparisons()
    } else {
        snapshot.total_data_moves()
    }
}

fn estimate_series(table: &ResultsTable, name: &str, use_comparisons: bool) -> Complexity {
    let Some(series) = table.get(name) else {
        return Complexity::InsufficientData;
    };
    let rows: Vec<(i64, CounterSnapshot)> = series
        .rows
        .iter()
        .map(|(size, result)| (*size, result.snapshot))
        .collect();
    complexity::estimate_for_series(&rows, use_comparisons)
}

/// Identify observed best/worst generators at the largest requested size and
/// estimate their complexity classes.
///
/// The best case keeps the first minimum seen (strict `<`); the worst case
/// keeps the last maximum seen (`>=`). Buckets are scanned in the fixed
/// generator order, so both tie-breaks are deterministic.
pub fn analyze(table: &ResultsTable, options: &TestOptions) -> ComplexityAnalysis {
    let largest_size = options
        .sizes
        .iter()
        .copied()
        .filter(|&s| s >= 0)
        .max()
        .unwrap_or(0);

    if largest_size <= 0 || table.is_empty() {
        return ComplexityAnalysis::Skipped;
    }

    let mut min_ops = u64::MAX;
    let mut max_ops = 0u64;
    let mut best_name: Option<&str> = None;
    let mut worst_name: Option<&str> = None;

    for series in &table.series {
        let observed = series
            .rows
            .iter()
            .find(|&&(size, _)| size == largest_size)
            .map(|(_, result)| metric(&result.snapshot, options.use_comparisons));
        let Some(ops) = observed else {
            continue;
        };
        if ops < min_ops {
            min_ops = ops;
            best_name = Some(series.name.as_str());
        }
        if ops >= max_ops {
            max_ops = ops;
            worst_name = Some(series.name.as_str());
        }
    }

    let (Some(best_name), Some(worst_name)) = (best_name, worst_name) else {
        // Nothing was measured at the largest size.
        return ComplexityAnalysis::Skipped;
    };

    let best = ExtremeCase {
        generator: best_name.to_string(),
        ops: min_ops,
        estimate: estimate_series(table, best_name, options.use_comparisons),
        expected: options.expected_best,
    };
    let worst = ExtremeCase {
        generator: worst_name.to_string(),
        ops: max_ops,
        estimate: estimate_series(table, worst_name, options.use_comparisons),
        expected: options.expected_worst,
    };

    ComplexityAnalysis::Analyzed {
        largest_size,
        best,
        worst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseResult;
    use crate::suite::GeneratorSeries;

    fn series_with_comparisons(name: &str, rows: &[(i64, u64)]) -> GeneratorSeries {
        GeneratorSeries {
            name: name.to_string(),
            rows: rows
                .iter()
                .map(|&(size, comparisons)| {
                    (
                        size,
                        CaseResult {
                            snapshot: CounterSnapshot {
                                less_than: comparisons,
                                ..CounterSnapshot::default()
                            },
                            sorted: true,
                            case_name: name.to_string(),
                            size,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_identifies_best_and_worst_generators() {
        let table = ResultsTable {
            series: vec![
                series_with_comparisons("Reversed", &[(10, 45), (100, 4950)]),
                series_with_comparisons("Sorted", &[(10, 9), (100, 99)]),
                series_with_comparisons("Random Unique", &[(10, 25), (100, 700)]),
            ],
        };
        let options = TestOptions::default().with_sizes(vec![10, 100]);

        match analyze(&table, &options) {
            ComplexityAnalysis::Analyzed {
                largest_size,
                best,
                worst,
            } => {
                assert_eq!(largest_size, 100);
                assert_eq!(best.generator, "Sorted");
                assert_eq!(best.ops, 99);
                assert_eq!(best.estimate, Complexity::ON);
                assert_eq!(worst.generator, "Reversed");
                assert_eq!(worst.ops, 4950);
                assert_eq!(worst.estimate, Complexity::ON2);
            }
            ComplexityAnalysis::Skipped => panic!("analysis unexpectedly skipped"),
        }
    }

    #[test]
    fn test_worst_tie_goes_to_last_generator_best_to_first() {
        let table = ResultsTable {
            series: vec![
                series_with_comparisons("Reversed", &[(10, 50), (100, 500)]),
                series_with_comparisons("Sorted", &[(10, 50), (100, 500)]),
            ],
        };
        let options = TestOptions::default().with_sizes(vec![10, 100]);

        match analyze(&table, &options) {
            ComplexityAnalysis::Analyzed { best, worst, .. } => {
                // Best keeps the first minimum, worst keeps the last maximum.
                assert_eq!(best.generator, "Reversed");
                assert_eq!(worst.generator, "Sorted");
            }
            ComplexityAnalysis::Skipped => panic!("analysis unexpectedly skipped"),
        }
    }

    #[test]
    fn test_mismatch_flags_only_on_declared_expectations() {
        let table = ResultsTable {
            series: vec![series_with_comparisons("Sorted", &[(50, 49), (100, 99)])],
        };

        let neutral = TestOptions::default().with_sizes(vec![50, 100]);
        assert!(!analyze(&table, &neutral).mismatch());

        let matching = TestOptions::default()
            .with_sizes(vec![50, 100])
            .expect_best(Complexity::ON)
            .expect_worst(Complexity::ON);
        assert!(!analyze(&table, &matching).mismatch());

        let violated = TestOptions::default()
            .with_sizes(vec![50, 100])
            .expect_worst(Complexity::ONLogN);
        assert!(analyze(&table, &violated).mismatch());
    }

    #[test]
    fn test_skips_without_positive_sizes() {
        let table = ResultsTable {
            series: vec![series_with_comparisons("Sorted", &[(0, 0)])],
        };
        let options = TestOptions::default()
            .with_sizes(vec![0, -5])
            .expect_best(Complexity::O1);
        let analysis = analyze(&table, &options);
        assert!(matches!(analysis, ComplexityAnalysis::Skipped));
        assert!(!analysis.mismatch());
    }

    #[test]
    fn test_skips_on_empty_results() {
        let options = TestOptions::default().expect_worst(Complexity::ON2);
        let analysis = analyze(&ResultsTable::default(), &options);
        assert!(matches!(analysis, ComplexityAnalysis::Skipped));
        assert!(!analysis.mismatch());
    }

    #[test]
    fn test_skips_when_largest_size_was_never_observed() {
        // Sizes ask for 200 but no bucket holds a size-200 row; declared
        // expectations must not turn this into a mismatch.
        let table = ResultsTable {
            series: vec![series_with_comparisons("Sorted", &[(10, 9), (100, 99)])],
        };
        let options = TestOptions::default()
            .with_sizes(vec![10, 100, 200])
            .expect_best(Complexity::O1)
            .expect_worst(Complexity::O1);
        let analysis = analyze(&table, &options);
        assert!(matches!(analysis, ComplexityAnalysis::Skipped));
        assert!(!analysis.mismatch());
    }

    #[test]
    fn test_estimates_use_the_full_series_of_the_extreme_generator() {
        // The worst generator's series is quadratic across its two largest
        // sizes even though the size-10 row alone would look linear.
        let table = ResultsTable {
            series: vec![
                series_with_comparisons("Sorted", &[(10, 9), (50, 49), (100, 99)]),
                series_with_comparisons("Reversed", &[(10, 45), (50, 1225), (100, 4950)]),
            ],
        };
        let options = TestOptions::default().with_sizes(vec![10, 50, 100]);
        match analyze(&table, &options) {
            ComplexityAnalysis::Analyzed { best, worst, .. } => {
                assert_eq!(best.estimate, Complexity::ON);
                assert_eq!(worst.estimate, Complexity::ON2);
            }
            ComplexityAnalysis::Skipped => panic!("analysis unexpectedly skipped"),
        }
    }
}

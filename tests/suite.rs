//! End-to-end suite behavior across a batch of algorithms.

use opcount::algorithms::{insertion_sort, selection_sort};
use opcount::complexity::Complexity;
use opcount::config::TestOptions;
use opcount::instrumented::Counted;
use opcount::report::{run_suite, AlgorithmConfig, RunStatus};

fn forgets_to_sort(_values: &mut [Counted]) {}

#[test]
fn test_batch_distinguishes_failures_from_warnings() {
    // Three algorithms with deterministic outcomes:
    // - insertion sort with its true expectations passes,
    // - selection sort compares quadratically on every input, so a declared
    //   O(N log N) worst case must mismatch and downgrade to a warning,
    // - the no-op never sorts a reversed array and fails verification.
    let configs = vec![
        AlgorithmConfig::new(
            "insertion_sort",
            insertion_sort,
            TestOptions::default()
                .expect_best(Complexity::ON)
                .expect_worst(Complexity::ON2),
        ),
        AlgorithmConfig::new(
            "selection_sort",
            selection_sort,
            TestOptions::default().expect_worst(Complexity::ONLogN),
        ),
        AlgorithmConfig::new("forgets_to_sort", forgets_to_sort, TestOptions::default()),
    ];

    let summary = run_suite(&configs, None);

    assert_eq!(summary.statuses.len(), 3);
    assert_eq!(summary.statuses[0].1, RunStatus::Passed);
    assert_eq!(summary.statuses[1].1, RunStatus::PassedComplexityWarn);
    assert_eq!(summary.statuses[2].1, RunStatus::FailedVerification);

    assert_eq!(summary.passed(), 1);
    assert_eq!(summary.warned(), 1);
    assert_eq!(summary.failed(), 1);
    assert_ne!(summary.exit_code(), 0);
}

#[test]
fn test_batch_of_clean_algorithms_exits_zero() {
    let configs = vec![
        AlgorithmConfig::new("insertion_sort", insertion_sort, TestOptions::default()),
        AlgorithmConfig::new("selection_sort", selection_sort, TestOptions::default()),
    ];

    let summary = run_suite(&configs, None);
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_suite_with_only_degenerate_sizes_passes_vacuously() {
    // Every case is skipped, the complexity analysis is skipped, and the
    // declared expectation must not produce a warning.
    let configs = vec![AlgorithmConfig::new(
        "forgets_to_sort",
        forgets_to_sort,
        TestOptions::default()
            .with_sizes(vec![0, -1])
            .expect_worst(Complexity::ON2),
    )];

    let summary = run_suite(&configs, None);
    assert_eq!(summary.statuses[0].1, RunStatus::Passed);
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_csv_export_covers_every_algorithm_and_case() {
    let configs = vec![
        AlgorithmConfig::new(
            "insertion_sort",
            insertion_sort,
            TestOptions::default().with_sizes(vec![5, 10]),
        ),
        AlgorithmConfig::new(
            "selection_sort",
            selection_sort,
            TestOptions::default().with_sizes(vec![5, 10]),
        ),
    ];

    let path = std::env::temp_dir().join("opcount_suite_export.csv");
    let path_str = path.to_str().expect("temp path is valid utf-8");
    run_suite(&configs, Some(path_str));

    let contents = std::fs::read_to_string(&path).expect("csv readable");
    let lines: Vec<&str> = contents.lines().collect();
    // Header + 2 algorithms x 5 generators x 2 sizes.
    assert_eq!(lines.len(), 21);
    assert!(lines[1].starts_with("insertion_sort,Reversed,5,passed,"));
    assert!(lines[20].starts_with("selection_sort,Nearly Sorted,10,passed,"));
    let _ = std::fs::remove_file(&path);
}

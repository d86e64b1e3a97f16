//! Suite configuration.

use crate::complexity::Complexity;

/// Configuration for one algorithm's test run.
///
/// At least two distinct sizes greater than 1 are needed for a meaningful
/// complexity estimate; fewer degrades the estimate to insufficient data
/// without failing anything.
#[derive(Clone, Debug)]
pub struct TestOptions {
    /// Array sizes to test, normally pre-sorted ascending. Negative sizes
    /// are skipped by the suite runner.
    pub sizes: Vec<i64>,
    /// Log every case in full instead of only failures.
    pub verbose: bool,
    /// Classify growth using comparison counts; `false` switches the metric
    /// to copy/move counts.
    pub use_comparisons: bool,
    /// Expected best-case class, checked against the observed best-case
    /// generator when present.
    pub expected_best: Option<Complexity>,
    /// Expected worst-case class, checked against the observed worst-case
    /// generator when present.
    pub expected_worst: Option<Complexity>,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100],
            verbose: false,
            use_comparisons: true,
            expected_best: None,
            expected_worst: None,
        }
    }
}

impl TestOptions {
    pub fn with_sizes(mut self, sizes: Vec<i64>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn expect_best(mut self, complexity: Complexity) -> Self {
        self.expected_best = Some(complexity);
        self
    }

    pub fn expect_worst(mut self, complexity: Complexity) -> Self {
        self.expected_worst = Some(complexity);
        self
    }

    /// Name of the metric driving the complexity estimate.
    pub fn metric_name(&self) -> &'static str {
        if self.use_comparisons {
            "Comparisons"
        } else {
            "Data Moves"
        }
    }
}

//! Per-algorithm orchestration and the batch suite report.
//!
//! One algorithm run: execute all cases, print the summary table, analyze
//! complexity, roll up into a status. A batch run repeats this for each
//! configured algorithm and produces a summary whose exit code is zero only
//! when every algorithm passed cleanly.

use crate::analysis;
use crate::config::TestOptions;
use crate::counter::OpCounter;
use crate::generators;
use crate::instrumented::Counted;
use crate::suite;
use crate::tui;

/// Terminal state of one algorithm's run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Every case verified and no declared expectation mismatched.
    Passed,
    /// Every case verified but a declared complexity expectation mismatched.
    PassedComplexityWarn,
    /// At least one case failed verification; takes precedence over
    /// complexity status.
    FailedVerification,
}

/// A named algorithm paired with its test options.
pub struct AlgorithmConfig {
    pub name: String,
    pub algorithm: Box<dyn Fn(&mut [Counted])>,
    pub options: TestOptions,
}

impl AlgorithmConfig {
    pub fn new(
        name: &str,
        algorithm: impl Fn(&mut [Counted]) + 'static,
        options: TestOptions,
    ) -> Self {
        Self {
            name: name.to_string(),
            algorithm: Box::new(algorithm),
            options,
        }
    }
}

/// Statuses for a batch of algorithm runs, in configuration order.
#[derive(Clone, Debug, Default)]
pub struct SuiteSummary {
    pub statuses: Vec<(String, RunStatus)>,
}

impl SuiteSummary {
    pub fn passed(&self) -> usize {
        self.count(RunStatus::Passed)
    }

    pub fn warned(&self) -> usize {
        self.count(RunStatus::PassedComplexityWarn)
    }

    pub fn failed(&self) -> usize {
        self.count(RunStatus::FailedVerification)
    }

    fn count(&self, status: RunStatus) -> usize {
        self.statuses.iter().filter(|(_, s)| *s == status).count()
    }

    /// Zero only when every algorithm passed without warnings.
    pub fn exit_code(&self) -> i32 {
        if self.statuses.iter().all(|(_, s)| *s == RunStatus::Passed) {
            0
        } else {
            1
        }
    }
}

/// Test one algorithm across the canonical generators.
///
/// Returns the status together with the structured results table so callers
/// (the CSV exporter, external tooling) can consume the raw counts. Each
/// run gets a fresh counter instance, so measurements never bleed between
/// algorithms.
pub fn run_algorithm(config: &AlgorithmConfig) -> (RunStatus, suite::ResultsTable) {
    tui::print_colored_line(
        &format!("--- Testing Algorithm: {} ---", config.name),
        tui::BOLD_CYAN,
    );

    let counter = OpCounter::shared();
    let generator_set = generators::default_generators();
    let (results, all_passed) = suite::run_all_cases(
        &generator_set,
        &config.options,
        config.algorithm.as_ref(),
        &counter,
    );

    tui::print_colored_line(
        &format!("\n--- Summary Table for: {} ---", config.name),
        tui::BOLD_CYAN,
    );
    tui::print_summary_table(&results);

    let complexity_analysis = analysis::analyze(&results, &config.options);
    tui::print_analysis(&complexity_analysis, &config.options);

    tui::print_colored_line(
        &format!("--- Finished Testing: {} ---", config.name),
        tui::BOLD_CYAN,
    );

    let status = if !all_passed {
        RunStatus::FailedVerification
    } else if complexity_analysis.mismatch() {
        RunStatus::PassedComplexityWarn
    } else {
        RunStatus::Passed
    };
    (status, results)
}

/// Run a batch of algorithm configurations and print the roll-up. With a
/// CSV path, every case of every algorithm is exported as one row.
pub fn run_suite(configs: &[AlgorithmConfig], csv_path: Option<&str>) -> SuiteSummary {
    tui::print_colored_line("\n===== Running Full Algorithm Test Suite =====", tui::BOLD_CYAN);

    let mut summary = SuiteSummary::default();
    let mut rows = Vec::new();
    for config in configs {
        let (status, results) = run_algorithm(config);
        summary.statuses.push((config.name.clone(), status));
        if csv_path.is_some() {
            rows.extend(suite::csv_rows(&config.name, &results));
        }
        println!("\n----------------------------------------\n");
    }

    tui::print_suite_summary(&summary);

    if let Some(path) = csv_path {
        match suite::export_csv(path, &rows) {
            Ok(()) => println!("Results exported to {}", path),
            Err(error) => eprintln!("CSV export failed: {}", error),
        }
    }

    summary
}

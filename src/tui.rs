//! Console output: colors, TTY detection, and report tables.
//!
//! Handles formatted output for the harness. Color codes are emitted only
//! when stdout is a terminal; piped output stays plain so the tables remain
//! machine-readable.

use std::sync::OnceLock;

use terminal_size::{terminal_size, Width};

use crate::analysis::{ComplexityAnalysis, ExtremeCase};
use crate::config::TestOptions;
use crate::report::{RunStatus, SuiteSummary};
use crate::suite::ResultsTable;

pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_RED: &str = "\x1b[41m";
pub const RESET: &str = "\x1b[0m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_CYAN: &str = "\x1b[1;36m";

/// Whether stdout is attached to a terminal. Cached for the process.
pub fn is_stdout_a_tty() -> bool {
    static IS_TTY: OnceLock<bool> = OnceLock::new();
    *IS_TTY.get_or_init(|| {
        #[cfg(unix)]
        {
            // Safety: isatty only inspects the descriptor.
            unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
        }
        #[cfg(not(unix))]
        {
            false
        }
    })
}

/// Print `text` in `color` when stdout is a terminal, plain otherwise.
pub fn print_colored(text: &str, color: &str) {
    if is_stdout_a_tty() && !color.is_empty() && color != RESET {
        print!("{}{}{}", color, text, RESET);
    } else {
        print!("{}", text);
    }
}

/// Line variant of [`print_colored`].
pub fn print_colored_line(text: &str, color: &str) {
    print_colored(text, color);
    println!();
}

/// Terminal width clamped to a sane range, defaulting to 80 when piped.
fn term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate with ellipsis when a name exceeds its column (character-wise).
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

const NAME_COL: usize = 18;
const SIZE_COL: usize = 10;
const RESULT_COL: usize = 10;
const COUNT_COL: usize = 18;

/// Print the per-case summary table for one algorithm.
pub fn print_summary_table(table: &ResultsTable) {
    let table_width = (NAME_COL + SIZE_COL + RESULT_COL + 2 * COUNT_COL).min(term_width());

    println!(
        "{:<name$}{:<size$}{:<result$}{:<count$}{:<count$}",
        "Test Case",
        "Size",
        "Result",
        "Comparisons",
        "Data Moves",
        name = NAME_COL,
        size = SIZE_COL,
        result = RESULT_COL,
        count = COUNT_COL,
    );
    println!("{}", "-".repeat(table_width));

    let is_tty = is_stdout_a_tty();

    for series in &table.series {
        let mut first_line = true;
        for (size, result) in &series.rows {
            let name_cell = if first_line {
                truncate(&series.name, NAME_COL - 1)
            } else {
                String::new()
            };
            let row = format!(
                "{:<name$}{:<size$}{:<result$}{:<count$}{:<count$}",
                name_cell,
                size,
                if result.sorted { "Passed" } else { "FAILED" },
                result.snapshot.total_comparisons(),
                result.snapshot.total_data_moves(),
                name = NAME_COL,
                size = SIZE_COL,
                result = RESULT_COL,
                count = COUNT_COL,
            );
            if is_tty {
                let bg = if result.sorted { BG_GREEN } else { BG_RED };
                println!("{}{}{}", bg, row, RESET);
            } else {
                println!("{}", row);
            }
            first_line = false;
        }
    }

    println!("{}", "-".repeat(table_width));
}

fn print_extreme_case(label: &str, largest_size: i64, case: &ExtremeCase, metric_name: &str) {
    println!(
        "Observed {} Case Type (at N={}): {} ({} {})",
        label, largest_size, case.generator, case.ops, metric_name
    );
    let status = match case.expected {
        None => String::new(),
        Some(expected) if expected == case.estimate => " (Matches Expected)".to_string(),
        Some(expected) => format!(" (MISMATCH! Expected: {})", expected),
    };
    let line = format!(
        "  Estimated {} Case Complexity: {}{}",
        label, case.estimate, status
    );
    let color = if case.mismatch() { BOLD_RED } else { "" };
    print_colored_line(&line, color);
}

/// Print the complexity section of one algorithm's report.
pub fn print_analysis(analysis: &ComplexityAnalysis, options: &TestOptions) {
    match analysis {
        ComplexityAnalysis::Skipped => {
            print_colored_line("Complexity analysis skipped (no valid sizes/results).", YELLOW);
        }
        ComplexityAnalysis::Analyzed {
            largest_size,
            best,
            worst,
        } => {
            println!("Estimating complexity based on: {}", options.metric_name());
            print_colored_line("--- Empirical Complexity Estimation ---", YELLOW);
            print_extreme_case("Best", *largest_size, best, options.metric_name());
            print_extreme_case("Worst", *largest_size, worst, options.metric_name());
            print_colored_line(
                "Note: complexity estimation is empirical and based on observed ratios for tested sizes.",
                YELLOW,
            );
        }
    }
}

/// Print the final roll-up over all tested algorithms.
pub fn print_suite_summary(summary: &SuiteSummary) {
    print_colored_line("===== Full Algorithm Test Suite Summary =====", BOLD_CYAN);

    for (name, status) in &summary.statuses {
        match status {
            RunStatus::Passed => {
                print!("  [ PASS ] ");
                print_colored_line(name, BOLD_GREEN);
            }
            RunStatus::PassedComplexityWarn => {
                print!("  [ WARN ] ");
                print_colored_line(&format!("{} (Complexity Mismatch)", name), BOLD_YELLOW);
            }
            RunStatus::FailedVerification => {
                print!("  [ FAIL ] ");
                print_colored_line(&format!("{} (Verification Failed)", name), BOLD_RED);
            }
        }
    }

    println!();
    println!("Total Algorithms Tested: {}", summary.statuses.len());
    println!("  Passed:              {}", summary.passed());
    println!("  Passed (Warn):       {}", summary.warned());
    println!("  Failed Verification: {}", summary.failed());
    print_colored_line("============================================", BOLD_CYAN);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_names() {
        assert_eq!(truncate("Sorted", 17), "Sorted");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("A Very Long Generator Name", 10), "A Very ...");
    }
}

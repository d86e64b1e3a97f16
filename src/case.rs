//! Single-case execution.
//!
//! One case = one (generator, size) pair run against one algorithm. The
//! counter is reset after generation and snapshotted immediately after the
//! algorithm returns, so the snapshot attributes exactly the operations
//! performed inside the algorithm call. Verification reads raw payloads and
//! never touches the instrumented operators.

use crate::config::TestOptions;
use crate::counter::{CounterRef, CounterSnapshot};
use crate::generators::GeneratorFn;
use crate::instrumented::Counted;
use crate::tui;

/// Outcome of one (generator, size) case.
#[derive(Clone, Debug)]
pub struct CaseResult {
    pub snapshot: CounterSnapshot,
    pub sorted: bool,
    pub case_name: String,
    pub size: i64,
}

/// Non-decreasing order by payload value. Uncounted by construction.
pub fn is_sorted_by_value(values: &[Counted]) -> bool {
    values.windows(2).all(|pair| pair[0].value() <= pair[1].value())
}

fn format_values(values: &[Counted]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.value().to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

/// Run one case and classify the result.
///
/// A generator returning no array is a skip for size ≤ 0 (vacuously
/// correct) and a contract violation for positive sizes (incorrect, logged
/// distinctly). An unsorted output is a normal failed result, not an error.
pub fn run_case(
    generator: GeneratorFn,
    size: i64,
    case_name: &str,
    algorithm: &dyn Fn(&mut [Counted]),
    options: &TestOptions,
    counter: &CounterRef,
) -> CaseResult {
    println!("-- Running Case: {} (Size: {}) --", case_name, size);

    let Some(mut values) = generator(counter, size) else {
        if size <= 0 {
            println!("  Skipped (Size <= 0)");
            return CaseResult {
                snapshot: counter.snapshot_and_reset(),
                sorted: true,
                case_name: case_name.to_string(),
                size,
            };
        }
        tui::print_colored_line("  ERROR: array generator returned no data!", tui::BOLD_RED);
        return CaseResult {
            snapshot: counter.snapshot_and_reset(),
            sorted: false,
            case_name: case_name.to_string(),
            size,
        };
    };

    let mut log_buffer = String::new();
    log_buffer.push_str(&format!("  Initial array: {}\n", format_values(&values)));

    // Discard everything generation touched; measure only the algorithm.
    counter.reset();
    algorithm(&mut values);
    let snapshot = counter.snapshot_and_reset();

    log_buffer.push_str(&format!("  Sorted array:  {}\n", format_values(&values)));
    log_buffer.push_str(&format!("  Statistics:\n{}\n", snapshot));

    let sorted = is_sorted_by_value(&values);

    print!("  Verification: ");
    if sorted {
        tui::print_colored_line("Passed", tui::BOLD_GREEN);
    } else {
        tui::print_colored_line("Failed", tui::BOLD_RED);
    }

    if !sorted || options.verbose {
        let header = if sorted { "-- Verbose Log --" } else { "-- Failure Log --" };
        tui::print_colored_line(header, if sorted { tui::YELLOW } else { tui::BOLD_RED });
        print!("{}", log_buffer);
        println!("-------------------");
    }

    CaseResult {
        snapshot,
        sorted,
        case_name: case_name.to_string(),
        size,
    }
}

//! CLI for running the algorithm test suite.
//!
//! Usage:
//!   opcount-suite                    # Test all built-in algorithms
//!   opcount-suite --list             # List available algorithms
//!   opcount-suite insertion_sort     # Test a specific algorithm
//!   opcount-suite --sizes 10,100,1000 --verbose
//!   opcount-suite --help             # Show help

use std::env;

use opcount::algorithms::standard_configs_with;
use opcount::config::TestOptions;
use opcount::report::run_suite;
use opcount::tui;

fn print_help() {
    println!("opcount-suite - operation-counting algorithm test harness");
    println!();
    println!("Usage: opcount-suite [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  -l, --list          List available algorithms");
    println!("  -h, --help          Show this help");
    println!("      --sizes A,B,C   Array sizes to test (default: 10,50,100)");
    println!("  -v, --verbose       Log every case, not only failures");
    println!("      --moves         Classify by data moves instead of comparisons");
    println!("      --csv PATH      Export per-case results to a CSV file");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_list = false;
    let mut show_help = false;
    let mut verbose = false;
    let mut use_comparisons = true;
    let mut sizes: Vec<i64> = vec![10, 50, 100];
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--verbose" | "-v" => verbose = true,
            "--moves" => use_comparisons = false,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        print_help();
        return;
    }

    let base = TestOptions {
        sizes,
        verbose,
        use_comparisons,
        ..TestOptions::default()
    };
    let mut configs = standard_configs_with(base);

    if show_list {
        println!("Available algorithms:");
        for config in &configs {
            println!("  {}", config.name);
        }
        return;
    }

    if let Some(name) = algorithm_filter {
        let available: Vec<String> = configs.iter().map(|c| c.name.clone()).collect();
        configs.retain(|c| c.name == name);
        if configs.is_empty() {
            eprintln!("Algorithm '{}' not found.", name);
            eprintln!("Available: {:?}", available);
            std::process::exit(1);
        }
    }

    let summary = run_suite(&configs, csv_path.as_deref());

    print!("\nOverall Test Suite Result: ");
    if summary.exit_code() == 0 {
        tui::print_colored_line("ALL PASSED", tui::BOLD_GREEN);
    } else {
        tui::print_colored_line("SOME FAILURES", tui::BOLD_RED);
    }

    std::process::exit(summary.exit_code());
}

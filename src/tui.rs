//! Console output.
//!
//! Everything the tool reports goes through here: the boxed header, the
//! run summary line, and the fixed per-experiment report template
//! (`Result (loop) = ...` / `Result (blas) = ...` / ticks and ratio).

use crate::blas;
use crate::dot::bench::ExperimentReport;
use crate::registry::ExperimentRegistry;
use crate::utils::bench::unit_name;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Loop vs BLAS ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the run geometry and measurement configuration
pub fn print_run_info(dim: usize, repeats: usize) {
    println!("Performing {} inner products of size {}", repeats, dim);
    match blas::KERNEL_COMPILER {
        Some(compiler) => println!("(timing unit: {}, ddot kernel built by {})", unit_name(), compiler),
        None => println!("(timing unit: {})", unit_name()),
    }
    println!();
}

/// Render one experiment's report in the fixed template.
///
/// Sums are shown truncated to integers as a sanity check; the two tick
/// counts use scientific notation and the ratio plain numeric form.
pub fn format_report(report: &ExperimentReport) -> String {
    format!(
        "Result (loop) = {:.0}\nResult (blas) = {:.0}\nloop: {:e} blas: {:e};  loop/blas: {}\n",
        report.loop_sum,
        report.blas_sum,
        report.loop_ticks as f64,
        report.blas_ticks as f64,
        report.ratio()
    )
}

/// Print one experiment: narrative label, then the report block
pub fn print_report(report: &ExperimentReport) {
    println!("{}", report.pattern.label());
    println!("{}", format_report(report));
}

/// Print the list of registered experiments
pub fn print_available_experiments(registry: &ExperimentRegistry) {
    println!("Available experiments:");
    println!();
    for experiment in registry.all() {
        println!("  {:<18} - {}", experiment.name(), experiment.description());
    }
}

/// Print the help message
pub fn print_help() {
    println!("Usage: loop-vs-blas [OPTIONS] [EXPERIMENT]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all experiments");
    println!("  --help, -h     Show this help message");
    println!("  --dim N        Vector length of one dot product (default: 1024)");
    println!("  --repeats N    Dot products per experiment (default: 1e8 / DIM)");
    println!("  --seed N       Random seed for a reproducible run (default: time-based)");
    println!();
    println!("Arguments:");
    println!("  EXPERIMENT     Name of a single experiment to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  loop-vs-blas                     # Run all three experiments");
    println!("  loop-vs-blas distinct-vectors    # Run one experiment");
    println!("  loop-vs-blas --dim 256           # Smaller blocks, more repeats");
    println!("  loop-vs-blas --seed 12345        # Reproducible input");
}

//! CLI driver: fills the input buffers once, then runs the experiments.
//!
//! Usage:
//!   loop-vs-blas                    # Run all three experiments
//!   loop-vs-blas --list             # List experiments
//!   loop-vs-blas distinct-vectors   # Run a single experiment
//!   loop-vs-blas --help             # Show help

use loop_vs_blas::dot::BenchInput;
use loop_vs_blas::registry::build_registry;
use loop_vs_blas::{blas, tui, utils};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    let mut dim: usize = 1024;
    let mut repeats: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut experiment_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--dim" => {
                i += 1;
                if i < args.len() {
                    dim = args[i].parse().unwrap_or(1024);
                }
            }
            "--repeats" => {
                i += 1;
                if i < args.len() {
                    repeats = args[i].parse().ok();
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            arg if !arg.starts_with('-') => {
                experiment_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_experiments(&registry);
        return;
    }

    if !blas::KERNEL_AVAILABLE {
        eprintln!("The ddot kernel was not compiled (no GCC, Clang, or MSVC found at build time).");
        eprintln!("There is nothing to benchmark against; install a C compiler and rebuild.");
        std::process::exit(1);
    }

    let dim = dim.max(1);
    // Keep total arithmetic work roughly constant across DIM choices
    let repeats = repeats.unwrap_or_else(|| (1e8 as usize / dim).max(1));
    let seed = seed.unwrap_or_else(utils::time_seed);

    tui::print_header();
    tui::print_run_info(dim, repeats);

    // Fill both buffers completely before any timing begins
    let input = BenchInput::random(dim, repeats, seed);

    match experiment_filter {
        Some(name) => match registry.find(&name) {
            Some(experiment) => tui::print_report(&experiment.run(&input)),
            None => {
                eprintln!("Experiment '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => {
            for experiment in registry.all() {
                tui::print_report(&experiment.run(&input));
            }
        }
    }

    println!("Note: loop/blas > 1 means the library routine was faster.");
}

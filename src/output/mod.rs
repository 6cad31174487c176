//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_ladder_result, print_neighbors, print_path_result,
    print_verify_outcome,
};

//! Terminal output: tile rendering and result display

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_report, print_benchmark_report, print_precompute_report, print_solve_report,
};

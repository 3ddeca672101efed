//! Command implementations for the CLI front-ends

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod precompute;
pub mod solve;

pub use analyze::{analyze_word, AnalysisReport};
pub use assist::run_assist;
pub use benchmark::{run_benchmark, BenchmarkReport};
pub use precompute::{run_precompute, PrecomputeReport};
pub use solve::{solve_secret, SolveReport, SolveStep};

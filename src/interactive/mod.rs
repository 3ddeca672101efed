//! Interactive trainer TUI

pub mod app;
pub mod rendering;

pub use app::{run_tui, App};

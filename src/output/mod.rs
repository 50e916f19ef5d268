//! Terminal output formatting
//!
//! Display utilities for the text game, gallows drawings and command results.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{print_benchmark_result, print_categories, print_stats_report};
pub use gallows::gallows;

//! Command implementations

pub mod benchmark;
pub mod categories;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkResult, SimulatedGame, run_benchmark, simulate_game};
pub use categories::{CategorySummary, category_summaries};
pub use simple::{RoundEnd, play, run_simple};
pub use stats::run_stats;

//! Stats command

use crate::game::{GameHost, Stats};
use crate::output::print_stats_report;
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

/// Print the cumulative stats, optionally zeroing them first
///
/// # Errors
///
/// Returns an error if `reset` is set and the stats file cannot be written.
pub fn run_stats(host: &mut GameHost, reset: bool) -> Result<Stats> {
    if reset {
        host.reset_stats().context("Failed to reset stats")?;
        info!("stats reset");
        println!("{}", "Stats reset.".yellow());
    }

    print_stats_report(host.stats());
    Ok(*host.stats())
}

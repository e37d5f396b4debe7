//! Command-line interface parsing for havaplan
//!
//! The stdin payload drives all recommendation behavior; the flags only
//! select which report layout to render.

use clap::Parser;

/// Havaplan - Turkish-language activity recommendations from weather metrics
#[derive(Parser, Debug)]
#[command(name = "havaplan")]
#[command(about = "Reads a weather payload on stdin and prints an activity recommendation")]
#[command(version)]
pub struct Cli {
    /// Emit the short single-pass report instead of the detailed one
    ///
    /// The detailed report scores the day, breaks advice into time, clothing,
    /// activity, safety and health sections and carries a generation
    /// timestamp. The brief report is a flat tip list with a single verdict.
    #[arg(long)]
    pub brief: bool,
}

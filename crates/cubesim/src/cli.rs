//! Command-line arguments.

use clap::Parser;

/// Interactive 3×3×3 twisty-puzzle simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Scramble with this many random moves on startup.
    #[arg(long, value_name = "N")]
    pub scramble: Option<u32>,

    /// Seed for a reproducible startup scramble.
    #[arg(long, requires = "scramble")]
    pub seed: Option<u64>,

    /// Seconds one quarter-turn animation takes.
    #[arg(long, value_name = "SECONDS")]
    pub twist_duration: Option<f32>,
}

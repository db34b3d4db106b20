//! Interactive terminal front-end for the cube simulator.
//!
//! This binary is a thin rendering/input collaborator: all puzzle logic
//! lives in `cubesim_core` and `cubesim_view`, consumed here only through
//! the simulation's public request/tick/state interface.

use clap::Parser;

mod cli;
mod net;
mod repl;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    repl::run(&args)
}

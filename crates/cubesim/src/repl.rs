//! Read-eval loop driving the simulation from stdin.

use std::io::{self, BufRead, Write};

use cubesim_core::{DEFAULT_SCRAMBLE_LENGTH, ScrambleParams, parse_moves};
use cubesim_view::{AnimationPreferences, CubeSimulation};

use crate::cli::Args;
use crate::net;

/// Synthetic frame clock used to drain animations, in seconds.
const TICK_SECONDS: f32 = 1.0 / 60.0;

enum Outcome {
    Quit,
    Redraw,
    Quiet,
}

/// Runs the interactive session until EOF or `quit`.
pub fn run(args: &Args) -> eyre::Result<()> {
    let mut prefs = AnimationPreferences::default();
    if let Some(secs) = args.twist_duration {
        prefs.twist_duration = secs;
    }
    let mut sim = CubeSimulation::with_prefs(prefs);

    if let Some(length) = args.scramble {
        let params = match args.seed {
            Some(seed) => ScrambleParams { length, seed },
            None => ScrambleParams::new(length),
        };
        if sim.request_shuffle_with_params(params) {
            drain(&mut sim);
            println!("scrambled {length} moves (seed {})", params.seed);
        }
    }

    println!("{}", net::render(sim.state()));
    println!("type moves (F, R', U ...) or `help`");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        log::debug!("command: {input}");
        match dispatch(&mut sim, input) {
            Outcome::Quit => break,
            Outcome::Redraw => {
                drain(&mut sim);
                println!("{}", net::render(sim.state()));
                if sim.is_solved() {
                    println!("solved!");
                }
            }
            Outcome::Quiet => (),
        }
    }
    Ok(())
}

/// Ticks the simulation on the synthetic frame clock until it goes idle.
fn drain(sim: &mut CubeSimulation) {
    while sim.is_busy() {
        sim.tick(TICK_SECONDS);
    }
}

fn dispatch(sim: &mut CubeSimulation, input: &str) -> Outcome {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default();
    match command {
        "quit" | "exit" => return Outcome::Quit,
        "help" => print_help(),
        "history" => {
            let notation = sim.history_notation();
            if notation.is_empty() {
                println!("(no moves)");
            } else {
                println!("{notation}");
            }
        }
        "shuffle" => {
            let length = match words.next() {
                Some(word) => match word.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        println!("bad move count: {word:?}");
                        return Outcome::Quiet;
                    }
                },
                None => DEFAULT_SCRAMBLE_LENGTH,
            };
            if sim.request_shuffle(length) {
                return Outcome::Redraw;
            }
        }
        "solve" => {
            if sim.request_solve() {
                return Outcome::Redraw;
            }
            println!("nothing to solve");
        }
        "reset" => {
            if sim.request_reset() {
                return Outcome::Redraw;
            }
        }
        _ => match parse_moves(input) {
            Ok(moves) => {
                if sim.request_moves(&moves) {
                    return Outcome::Redraw;
                }
            }
            Err(err) => println!("{err} (try `help`)"),
        },
    }
    Outcome::Quiet
}

fn print_help() {
    println!("moves:    F B L R U D, with ' for counter-clockwise (e.g. F R' U)");
    println!("shuffle [n]  scramble with n random moves (default {DEFAULT_SCRAMBLE_LENGTH})");
    println!("solve        play back the inverse of the move history");
    println!("reset        return to the solved cube");
    println!("history      show the committed move history");
    println!("quit         exit");
}

//! 3×3×3 twisty puzzle state model and twist algebra.
//!
//! This crate owns the data model for the puzzle (cubelets, their face
//! colors, the full cube state) and the pure rotation engine that transforms
//! a state under a 90° face turn. It knows nothing about animation timing or
//! rendering; the simulation layer lives in `cubesim_view`.

mod cubelet;
mod moves;
mod rotation;
mod scramble;
mod state;
#[cfg(test)]
mod tests;

pub use cubelet::{Axis, Color, Cubelet, Face, FaceColors, Position};
pub use moves::{Move, MoveParseError, format_moves, inverse, parse_moves};
pub use rotation::rotate;
pub use scramble::ScrambleParams;
pub use state::CubeState;

/// Number of cubelets in the puzzle.
pub const CUBELET_COUNT: usize = 27;

/// Number of cubelets in one rotatable layer.
pub const LAYER_SIZE: usize = 9;

/// Default length for a shuffle when the caller does not specify one.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 20;

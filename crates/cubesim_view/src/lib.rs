//! Puzzle simulation controller: move sequencing and twist animation.
//!
//! This crate serializes move application on top of `cubesim_core`: a
//! [`CubeSimulation`] owns the cube state, a queue of pending moves and the
//! single in-flight rotation session, and guarantees that moves commit
//! atomically, in order, one at a time. It is driven entirely by an explicit
//! [`CubeSimulation::tick`] entry point so a front-end's frame clock (or a
//! test's synthetic clock) can supply time.

mod animation;
mod queue;
mod simulation;

pub use animation::{AnimationPreferences, TwistAnimation, TwistAnimationState};
pub use queue::MoveQueue;
pub use simulation::CubeSimulation;

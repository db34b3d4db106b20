//! Cube simulation, which manages the puzzle state, the move queue and the
//! twist animation.

use cubesim_core::{CubeState, Move, ScrambleParams, format_moves, rotate};

use crate::animation::{AnimationPreferences, TwistAnimationState};
use crate::queue::MoveQueue;

/// Owns the cube state and serializes move application.
///
/// All mutation of the cube state happens inside [`Self::tick`], exactly
/// once per completed move, giving a single-writer discipline: readers may
/// take [`Self::state`] snapshots at any time between ticks. Requests made
/// while a sequence is in flight are rejected, never interleaved; the
/// rejection is reported through the `bool` return value and is not an
/// error (callers are expected to check it or disable their own trigger).
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest cube state, not including the in-flight rotation.
    latest_state: CubeState,
    /// Twist animation state.
    twist_anim: TwistAnimationState,
    /// Pending moves and committed history.
    queue: MoveQueue,
    /// Deepest the queue has been since the system was last idle (reset when
    /// the queue drains).
    queue_max: usize,
    /// Parameters of the most recent shuffle, for reproducibility.
    scramble: Option<ScrambleParams>,
    /// Animation timing preferences.
    pub prefs: AnimationPreferences,
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeSimulation {
    /// Constructs a simulation in the solved configuration.
    pub fn new() -> Self {
        Self::with_prefs(AnimationPreferences::default())
    }

    /// Constructs a simulation with explicit animation preferences.
    pub fn with_prefs(prefs: AnimationPreferences) -> Self {
        Self {
            latest_state: CubeState::solved(),
            twist_anim: TwistAnimationState::default(),
            queue: MoveQueue::default(),
            queue_max: 0,
            scramble: None,
            prefs,
        }
    }

    /// Read-only snapshot of the latest committed cube state (excludes the
    /// in-flight rotation).
    pub fn state(&self) -> &CubeState {
        &self.latest_state
    }

    /// Whether a move is in flight or queued.
    pub fn is_busy(&self) -> bool {
        self.twist_anim.is_animating() || self.queue.has_pending()
    }

    /// The in-flight move and its current visual angle in radians, for the
    /// rendering layer.
    pub fn current_twist(&self) -> Option<(Move, f32)> {
        self.twist_anim.current().map(|anim| (anim.mv, anim.angle()))
    }

    /// Requests a single move. Rejected while busy.
    pub fn request_move(&mut self, mv: Move) -> bool {
        self.request_sequence([mv], true)
    }

    /// Requests a programmatic move sequence, applied strictly in order.
    /// Rejected while busy; an empty sequence is a no-op returning `false`.
    pub fn request_moves(&mut self, moves: &[Move]) -> bool {
        self.request_sequence(moves.iter().copied(), true)
    }

    /// Requests a shuffle of `length` uniformly random moves. Rejected while
    /// busy.
    pub fn request_shuffle(&mut self, length: u32) -> bool {
        self.request_shuffle_with_params(ScrambleParams::new(length))
    }

    /// Requests the exact shuffle described by `params`. Rejected while
    /// busy.
    pub fn request_shuffle_with_params(&mut self, params: ScrambleParams) -> bool {
        let accepted = self.request_sequence(params.generate(), true);
        if accepted {
            self.scramble = Some(params);
        }
        accepted
    }

    /// Requests the sequence that undoes the committed history, restoring
    /// the state the history started from.
    ///
    /// The solve-back moves are not themselves recorded, and the history
    /// they were derived from is consumed. Rejected while busy; returns
    /// `false` when there is no history to undo.
    pub fn request_solve(&mut self) -> bool {
        if self.is_busy() {
            return self.reject("solve");
        }
        let accepted = self.request_sequence(self.queue.solve_sequence(), false);
        if accepted {
            self.queue.clear_history();
        }
        accepted
    }

    /// Resets to the solved configuration, forgetting history and scramble.
    /// Rejected while busy.
    pub fn request_reset(&mut self) -> bool {
        if self.is_busy() {
            return self.reject("reset");
        }
        self.latest_state = CubeState::solved();
        self.queue.clear();
        self.queue_max = 0;
        self.scramble = None;
        true
    }

    /// Advances the animation by `delta` seconds. Returns whether the scene
    /// must be redrawn.
    ///
    /// This is the only place the cube state is mutated: when the in-flight
    /// session reaches its target angle, the completed move is committed
    /// through the rotation engine, recorded, and the next pending move (if
    /// any) is armed immediately with no idle gap.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.twist_anim.is_animating() {
            return false;
        }
        if let Some(mv) = self.twist_anim.proceed(delta, &self.prefs, self.queue_max) {
            self.latest_state = rotate(&self.latest_state, mv);
            self.queue.record_committed(mv);
            log::trace!("committed {mv}, {} pending", self.queue.pending_len());
            match self.queue.dequeue() {
                Some(next) => self.twist_anim.start(next),
                None => self.queue_max = 0,
            }
        }
        true
    }

    /// Moves committed in the current session, oldest first.
    pub fn move_history(&self) -> &[Move] {
        self.queue.history()
    }

    /// The committed history in face-turn notation (`"F R' U"`).
    pub fn history_notation(&self) -> String {
        format_moves(self.move_history().iter().copied())
    }

    /// Whether every face currently shows a uniform color.
    pub fn is_solved(&self) -> bool {
        self.latest_state.is_solved()
    }

    /// Parameters of the most recent shuffle, if any.
    pub fn scramble(&self) -> Option<&ScrambleParams> {
        self.scramble.as_ref()
    }

    /// Queues `moves` and arms the first of them. The single gate for all
    /// move-producing requests.
    fn request_sequence(&mut self, moves: impl IntoIterator<Item = Move>, record: bool) -> bool {
        if self.is_busy() {
            return self.reject("move sequence");
        }
        self.queue.enqueue(moves, record);
        match self.queue.dequeue() {
            Some(first) => {
                self.queue_max = self.queue.pending_len() + 1;
                self.twist_anim.start(first);
                true
            }
            None => false,
        }
    }

    fn reject(&self, what: &str) -> bool {
        log::trace!("{what} request rejected: a move sequence is in flight");
        false
    }
}

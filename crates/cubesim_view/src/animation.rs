//! Twist animation state machine.

use std::f32::consts::FRAC_PI_2;

use cubesim_core::Move;

/// If at least this much of a twist would elapse in one tick, just complete
/// it instantly to reduce unnecessary flashing.
const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Higher number means faster exponential increase in twist speed.
const EXP_TWIST_FACTOR: f32 = 0.5;

/// Default angular speed, in radians per second.
const DEFAULT_TWIST_SPEED: f32 = 2.0;

/// Interpolation functions.
mod interpolate {
    use std::f32::consts::PI;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    pub type InterpolateFn = fn(f32) -> f32;

    /// Interpolate using cosine from 0.0 to PI.
    pub const COSINE: InterpolateFn = |x| (1.0 - (x * PI).cos()) / 2.0;
}

const TWIST_INTERPOLATION_FN: interpolate::InterpolateFn = interpolate::COSINE;

/// Animation timing preferences.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationPreferences {
    /// Seconds one quarter turn takes to animate.
    pub twist_duration: f32,
    /// Twist exponentially faster while a long queue is draining.
    ///
    /// Off by default: the quarter turn then always advances at the fixed
    /// rate implied by `twist_duration`.
    pub dynamic_twist_speed: bool,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: FRAC_PI_2 / DEFAULT_TWIST_SPEED,
            dynamic_twist_speed: false,
        }
    }
}

/// An in-flight rotation session: one move being animated toward its 90°
/// target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Move being animated.
    pub mv: Move,
    /// Progress toward the target angle, from 0.0 to 1.0.
    progress: f32,
}

impl TwistAnimation {
    fn new(mv: Move) -> Self {
        Self { mv, progress: 0.0 }
    }

    /// Current visual rotation angle in radians: interpolated progress toward
    /// ±90°, positive for clockwise.
    pub fn angle(&self) -> f32 {
        let sign = if self.mv.clockwise { 1.0 } else { -1.0 };
        TWIST_INTERPOLATION_FN(self.progress.clamp(0.0, 1.0)) * FRAC_PI_2 * sign
    }
}

/// Drives the at-most-one in-flight rotation session.
///
/// Either idle, or animating exactly one session. A session runs to
/// completion once started; there is no cancellation.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TwistAnimationState {
    current: Option<TwistAnimation>,
}

impl TwistAnimationState {
    /// Whether a session is in flight.
    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }

    /// The in-flight session, if any.
    pub fn current(&self) -> Option<&TwistAnimation> {
        self.current.as_ref()
    }

    /// Arms a new session. Only legal while idle.
    pub(crate) fn start(&mut self, mv: Move) {
        debug_assert!(self.current.is_none(), "twist started while one is in flight");
        self.current = Some(TwistAnimation::new(mv));
    }

    /// Steps the animation forward by `delta` seconds. Returns the completed
    /// move once the session reaches its target angle; the state snaps back
    /// to idle in the same step.
    ///
    /// `queue_max` is the deepest the move queue has been since the system
    /// was last idle; it drives the optional dynamic speed-up.
    pub(crate) fn proceed(
        &mut self,
        delta: f32,
        prefs: &AnimationPreferences,
        queue_max: usize,
    ) -> Option<Move> {
        let anim = self.current.as_mut()?;

        // `twist_duration` is in seconds (per one twist); `twist_delta` is
        // the fraction of the twist covered by this tick.
        let speed_mod = match prefs.dynamic_twist_speed {
            true => (queue_max.saturating_sub(1) as f32 * EXP_TWIST_FACTOR).exp(),
            false => 1.0,
        };
        let mut twist_delta = delta / prefs.twist_duration * speed_mod;
        // Cap the twist delta at 1.0, and also handle the case where
        // something went wrong with the calculation (e.g., division by
        // zero).
        if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0; // Instantly complete the twist.
        }

        anim.progress += twist_delta;
        if anim.progress >= 1.0 {
            let mv = anim.mv;
            self.current = None;
            Some(mv)
        } else {
            None
        }
    }
}

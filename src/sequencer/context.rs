//! Mutable timers and flags owned by one sequencer.

use crate::core::LiftState;
use serde::{Deserialize, Serialize};

/// Slack allowed when a countdown is compared against zero, so rounding in
/// repeated `f32` subtraction cannot push a firing one frame late.
pub(crate) const TIMER_TOLERANCE: f32 = 1e-4;

/// Everything that changes from tick to tick apart from positions.
///
/// One instance belongs to one [`Sequencer`](super::Sequencer) and is lent to
/// the sub-components on each tick instead of living in shared state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequencerContext {
    pub(crate) state: LiftState,
    pub(crate) dwell_remaining: f32,
    pub(crate) motion_in_progress: bool,
    pub(crate) blinking: bool,
    pub(crate) blink_timer: f32,
    pub(crate) on_move_complete: Option<LiftState>,
}

impl SequencerContext {
    /// A context in `Available` with a full dwell timer.
    pub fn new(state_duration: f32) -> Self {
        Self {
            state: LiftState::Available,
            dwell_remaining: state_duration,
            motion_in_progress: false,
            blinking: false,
            blink_timer: 0.0,
            on_move_complete: None,
        }
    }

    pub fn state(&self) -> LiftState {
        self.state
    }

    /// Seconds left before the dwell timer fires.
    pub fn dwell_remaining(&self) -> f32 {
        self.dwell_remaining
    }

    /// Whether a physical move is underway. The dwell timer is frozen while set.
    pub fn is_moving(&self) -> bool {
        self.motion_in_progress
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Seconds left in the current blink phase.
    pub fn blink_timer(&self) -> f32 {
        self.blink_timer
    }

    /// The state a pending one-shot move listener will force, if registered.
    pub fn pending_on_move_complete(&self) -> Option<LiftState> {
        self.on_move_complete
    }

    /// Count the dwell timer down by `dt` unless motion is in progress.
    ///
    /// Returns `true` on the tick the timer crosses zero, after reloading it
    /// with `state_duration`.
    pub fn tick_dwell(&mut self, dt: f32, state_duration: f32) -> bool {
        if self.motion_in_progress || self.dwell_remaining <= 0.0 {
            return false;
        }
        self.dwell_remaining -= dt;
        if self.dwell_remaining <= TIMER_TOLERANCE {
            self.dwell_remaining = state_duration;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_idle_in_available() {
        let ctx = SequencerContext::new(5.0);
        assert_eq!(ctx.state(), LiftState::Available);
        assert_eq!(ctx.dwell_remaining(), 5.0);
        assert!(!ctx.is_moving());
        assert!(!ctx.is_blinking());
        assert_eq!(ctx.pending_on_move_complete(), None);
    }

    #[test]
    fn dwell_fires_once_on_crossing_zero_and_reloads() {
        let mut ctx = SequencerContext::new(1.0);
        assert!(!ctx.tick_dwell(0.5, 1.0));
        assert!(ctx.tick_dwell(0.5, 1.0));
        assert_eq!(ctx.dwell_remaining(), 1.0);
        assert!(!ctx.tick_dwell(0.5, 1.0));
    }

    #[test]
    fn dwell_is_frozen_while_moving() {
        let mut ctx = SequencerContext::new(1.0);
        ctx.motion_in_progress = true;
        for _ in 0..100 {
            assert!(!ctx.tick_dwell(0.5, 1.0));
        }
        assert_eq!(ctx.dwell_remaining(), 1.0);
    }

    #[test]
    fn dwell_fires_on_the_expected_frame_despite_rounding() {
        for (dt, frames) in [(1.0_f32 / 60.0, 60), (0.02, 50), (0.1, 10)] {
            let mut ctx = SequencerContext::new(1.0);
            for frame in 1..frames {
                assert!(!ctx.tick_dwell(dt, 1.0), "dt={dt} fired early at {frame}");
            }
            assert!(ctx.tick_dwell(dt, 1.0), "dt={dt} did not fire at {frames}");
        }
    }

    #[test]
    fn large_step_fires_immediately() {
        let mut ctx = SequencerContext::new(1.0);
        assert!(ctx.tick_dwell(3.0, 1.0));
    }
}

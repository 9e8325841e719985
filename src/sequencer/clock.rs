//! Fixed-rate physics cadence derived from variable frame times.

use serde::{Deserialize, Serialize};

/// Splits variable frame time into whole fixed-length physics steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedTimestep {
    step: f32,
    max_steps: u32,
    accumulated: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step,
            max_steps: max_steps.max(1),
            accumulated: 0.0,
        }
    }

    /// Length of one physics step in seconds.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `frame_dt` and return how many physics steps are now due.
    ///
    /// At most `max_steps` are returned; any backlog beyond that is dropped
    /// so a long stall cannot snowball into ever longer frames.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulated += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            steps += 1;

            if steps >= self.max_steps {
                self.accumulated = 0.0;
                break;
            }
        }

        steps
    }
}

//! Discrete status indicator: three colors, off, and an optional blink.

use crate::host::IndicatorHost;
use crate::sequencer::{SequencerContext, TIMER_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colors the indicator can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    #[default]
    Off,
    Green,
    Yellow,
    Red,
}

impl fmt::Display for IndicatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        };
        f.write_str(name)
    }
}

/// Drives the indicator host and toggles it while blinking.
///
/// The blink flag and phase timer live in [`SequencerContext`]; the driver
/// only remembers which color a blink toggles back to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusIndicator {
    lit: IndicatorColor,
    blink_interval: f32,
}

impl StatusIndicator {
    pub fn new(blink_interval: f32) -> Self {
        Self {
            lit: IndicatorColor::Off,
            blink_interval,
        }
    }

    /// The color assigned by the current state.
    pub fn assigned(&self) -> IndicatorColor {
        self.lit
    }

    pub fn blink_interval(&self) -> f32 {
        self.blink_interval
    }

    /// Store `color` as the assigned color and apply it to the host.
    pub fn set_color<H: IndicatorHost + ?Sized>(&mut self, color: IndicatorColor, host: &mut H) {
        self.lit = color;
        host.set_color(color);
    }

    /// Enable or disable blinking.
    ///
    /// Enabling restarts the phase so the first toggle lands one full
    /// interval later. Disabling leaves whatever color is showing.
    pub fn set_blinking(&self, ctx: &mut SequencerContext, enabled: bool) {
        if enabled && !ctx.blinking {
            ctx.blink_timer = self.blink_interval;
        }
        ctx.blinking = enabled;
    }

    /// Advance the blink phase, toggling between the assigned color and off
    /// each time it runs out.
    pub fn tick<H: IndicatorHost + ?Sized>(
        &self,
        ctx: &mut SequencerContext,
        dt: f32,
        host: &mut H,
    ) {
        if !ctx.blinking {
            return;
        }
        ctx.blink_timer -= dt;
        if ctx.blink_timer <= TIMER_TOLERANCE {
            ctx.blink_timer = self.blink_interval;
            let next = if host.current_color() == IndicatorColor::Off {
                self.lit
            } else {
                IndicatorColor::Off
            };
            host.set_color(next);
            tracing::debug!(color = %next, "indicator blink");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimulatedRig;

    fn setup() -> (StatusIndicator, SequencerContext, SimulatedRig) {
        (
            StatusIndicator::new(0.5),
            SequencerContext::new(5.0),
            SimulatedRig::new(),
        )
    }

    #[test]
    fn set_color_applies_to_host() {
        let (mut indicator, _, mut rig) = setup();
        indicator.set_color(IndicatorColor::Red, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Red);
        assert_eq!(indicator.assigned(), IndicatorColor::Red);
    }

    #[test]
    fn blink_toggles_off_then_back_on() {
        let (mut indicator, mut ctx, mut rig) = setup();
        indicator.set_color(IndicatorColor::Yellow, &mut rig);
        indicator.set_blinking(&mut ctx, true);

        indicator.tick(&mut ctx, 0.25, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Yellow);
        indicator.tick(&mut ctx, 0.25, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Off);
        indicator.tick(&mut ctx, 0.25, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Off);
        indicator.tick(&mut ctx, 0.25, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Yellow);
    }

    #[test]
    fn blink_toggles_on_time_with_inexact_steps() {
        for (dt, half) in [(0.1_f32, 5), (1.0 / 60.0, 30), (0.02, 25)] {
            let (mut indicator, mut ctx, mut rig) = setup();
            indicator.set_color(IndicatorColor::Yellow, &mut rig);
            indicator.set_blinking(&mut ctx, true);

            for _ in 0..half {
                indicator.tick(&mut ctx, dt, &mut rig);
            }
            assert_eq!(rig.current_color(), IndicatorColor::Off, "dt={dt} at 0.5s");
            for _ in 0..half {
                indicator.tick(&mut ctx, dt, &mut rig);
            }
            assert_eq!(rig.current_color(), IndicatorColor::Yellow, "dt={dt} at 1.0s");
        }
    }

    #[test]
    fn blink_uses_the_assigned_color() {
        let (mut indicator, mut ctx, mut rig) = setup();
        indicator.set_color(IndicatorColor::Red, &mut rig);
        indicator.set_blinking(&mut ctx, true);

        indicator.tick(&mut ctx, 0.5, &mut rig);
        indicator.tick(&mut ctx, 0.5, &mut rig);
        assert_eq!(
            rig.color_log(),
            &[IndicatorColor::Red, IndicatorColor::Off, IndicatorColor::Red]
        );
    }

    #[test]
    fn disabling_stops_toggling_without_forcing_a_color() {
        let (mut indicator, mut ctx, mut rig) = setup();
        indicator.set_color(IndicatorColor::Yellow, &mut rig);
        indicator.set_blinking(&mut ctx, true);
        indicator.tick(&mut ctx, 0.5, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Off);

        indicator.set_blinking(&mut ctx, false);
        for _ in 0..10 {
            indicator.tick(&mut ctx, 0.5, &mut rig);
        }
        assert_eq!(rig.current_color(), IndicatorColor::Off);
        assert_eq!(rig.color_log().len(), 2);
    }

    #[test]
    fn re_enabling_while_blinking_keeps_phase() {
        let (mut indicator, mut ctx, mut rig) = setup();
        indicator.set_color(IndicatorColor::Yellow, &mut rig);
        indicator.set_blinking(&mut ctx, true);
        indicator.tick(&mut ctx, 0.25, &mut rig);
        indicator.set_blinking(&mut ctx, true);
        indicator.tick(&mut ctx, 0.25, &mut rig);
        assert_eq!(rig.current_color(), IndicatorColor::Off);
    }

    #[test]
    fn color_names_are_lowercase() {
        assert_eq!(IndicatorColor::Yellow.to_string(), "yellow");
        assert_eq!(
            serde_json::to_string(&IndicatorColor::Green).unwrap(),
            "\"green\""
        );
    }
}

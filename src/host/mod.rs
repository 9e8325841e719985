//! Collaborator interfaces the sequencer drives.
//!
//! The rendering/physics host sits outside this crate. The sequencer talks to
//! it only through these traits, so any engine binding (or the in-memory
//! [`SimulatedRig`]) can stand in.

mod sim;

use crate::coupling::{Body, LinkId};
use crate::indicator::IndicatorColor;
use crate::motion::Vec3;

pub use sim::{SimulatedRig, COLOR_LOG_LIMIT};

/// Visual status indicator (the LED strip).
pub trait IndicatorHost {
    /// Recolor every element of the indicator.
    fn set_color(&mut self, color: IndicatorColor);

    /// The color most recently applied.
    fn current_color(&self) -> IndicatorColor;
}

/// Rigid constraint factory.
pub trait ConstraintHost {
    /// Create a rigid link between `a` and `b`.
    fn create_link(&mut self, a: Body, b: Body) -> LinkId;

    /// Point an existing link's far end at `b`.
    fn retarget(&mut self, link: LinkId, b: Body);

    /// Destroy a link.
    fn remove_link(&mut self, link: LinkId);
}

/// Accepts commanded poses for the slider, the prop and its wheels.
pub trait PoseHost {
    fn set_slider_height(&mut self, y: f32);

    fn set_prop_position(&mut self, position: Vec3);

    /// Spin both wheels by `degrees` about their lateral axis.
    fn rotate_wheels(&mut self, degrees: f32);

    /// Zero angular velocity and restore identity orientation on both wheels.
    fn reset_wheels(&mut self);
}

/// Everything a [`Sequencer`](crate::sequencer::Sequencer) needs from its host.
pub trait Host: IndicatorHost + ConstraintHost + PoseHost {}

impl<T: IndicatorHost + ConstraintHost + PoseHost> Host for T {}

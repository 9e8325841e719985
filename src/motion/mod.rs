//! Time-integrated motion: the slider axis and the wheeled transport.
//!
//! Both advance by at most `speed * dt` per tick and never overshoot their
//! target, so arrival is guaranteed within a bounded number of ticks.

mod slider;
mod transport;
pub mod vector;

pub use slider::SliderAxis;
pub use transport::{ForwardAxis, MoveCompleted, TransportAnimator, Waypoint};
pub use vector::Vec3;

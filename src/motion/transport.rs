//! Wheeled transport of the prop between two waypoints.
//!
//! A move is an explicit resumable routine: [`TransportAnimator::begin_move`]
//! records the target and direction, and each fixed-rate
//! [`TransportAnimator::step`] advances it once until it reports completion.

use super::vector::{distance, move_towards, sub, wheel_rotation_degrees, Vec3};
use crate::host::PoseHost;
use serde::{Deserialize, Serialize};

/// The two fixed positions the prop travels between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Waypoint {
    /// On stage, in front of the slider.
    OnCamera,
    /// Off stage.
    OffCamera,
}

/// World axis the prop rolls forward along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardAxis {
    X,
    Y,
    #[default]
    Z,
}

impl ForwardAxis {
    fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Reported once when a move reaches its waypoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCompleted {
    pub waypoint: Waypoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct ActiveMove {
    waypoint: Waypoint,
    target: Vec3,
    direction: f32,
}

/// Rolls the prop toward a waypoint and spins both wheels to match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportAnimator {
    position: Vec3,
    roll_speed: f32,
    wheel_diameter: f32,
    arrival_tolerance: f32,
    forward_axis: ForwardAxis,
    wheel_angle: f32,
    active: Option<ActiveMove>,
}

impl TransportAnimator {
    pub fn new(
        position: Vec3,
        roll_speed: f32,
        wheel_diameter: f32,
        arrival_tolerance: f32,
        forward_axis: ForwardAxis,
    ) -> Self {
        Self {
            position,
            roll_speed,
            wheel_diameter,
            arrival_tolerance,
            forward_axis,
            wheel_angle: 0.0,
            active: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Cumulative wheel rotation in degrees since the current move began.
    pub fn wheel_angle(&self) -> f32 {
        self.wheel_angle
    }

    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// The waypoint of the move in flight, if any.
    pub fn destination(&self) -> Option<Waypoint> {
        self.active.map(|m| m.waypoint)
    }

    /// Start rolling toward `target`.
    ///
    /// The wheel direction sign is taken from the displacement along the
    /// forward axis: positive spins forward, anything else spins backward.
    /// A move already in flight is replaced.
    pub fn begin_move(&mut self, waypoint: Waypoint, target: Vec3) {
        let forward = sub(target, self.position)[self.forward_axis.index()];
        let direction = if forward > 0.0 { 1.0 } else { -1.0 };
        if let Some(previous) = self.active {
            tracing::warn!(
                from = ?previous.waypoint,
                to = ?waypoint,
                "transport move replaced before completion"
            );
        }
        tracing::debug!(?waypoint, destination = ?target, direction, "transport move started");
        self.active = Some(ActiveMove {
            waypoint,
            target,
            direction,
        });
    }

    /// Advance the move in flight by one fixed-rate tick.
    ///
    /// Returns `Some` exactly once per move, on the tick the prop comes
    /// within the arrival tolerance. On that tick the position snaps to the
    /// target and the wheels are reset.
    pub fn step<H: PoseHost + ?Sized>(&mut self, dt: f32, host: &mut H) -> Option<MoveCompleted> {
        let active = self.active?;

        if distance(self.position, active.target) > self.arrival_tolerance {
            let previous = self.position;
            self.position = move_towards(previous, active.target, self.roll_speed * dt.max(0.0));
            let moved = distance(previous, self.position);
            let delta = wheel_rotation_degrees(moved, self.wheel_diameter) * active.direction;
            self.wheel_angle += delta;
            host.set_prop_position(self.position);
            host.rotate_wheels(delta);
        }

        if distance(self.position, active.target) > self.arrival_tolerance {
            return None;
        }

        self.position = active.target;
        self.wheel_angle = 0.0;
        self.active = None;
        host.set_prop_position(self.position);
        host.reset_wheels();
        tracing::debug!(waypoint = ?active.waypoint, "transport move finished");

        Some(MoveCompleted {
            waypoint: active.waypoint,
        })
    }
}

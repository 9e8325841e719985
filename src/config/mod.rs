//! Configuration for a lift sequencer.
//!
//! All values are set once at startup and stay constant. Validation
//! accumulates every violation instead of stopping at the first one, so a
//! bad configuration file is reported in a single pass.
//!
//! # Example
//!
//! ```rust
//! use bikelift::config::LiftConfig;
//!
//! let config = LiftConfig::from_json(
//!     r#"{
//!         "on_camera_position": [0.0, 0.0, 0.0],
//!         "off_camera_position": [0.0, 0.0, -8.0],
//!         "state_duration": 3.0
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.state_duration, 3.0);
//! assert_eq!(config.top_position, 3.1);
//! assert!(config.validate().is_ok());
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::motion::{ForwardAxis, Vec3, Waypoint};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Tunables for the slider, transport, indicator and timers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    /// Slider height when lowered.
    pub bottom_position: f32,
    /// Slider height when raised.
    pub top_position: f32,
    /// Slider speed in units per second.
    pub speed: f32,
    /// Dwell time per state in seconds.
    pub state_duration: f32,
    /// Transport speed in units per second.
    pub roll_speed: f32,
    pub wheel_diameter: f32,
    pub on_camera_position: Option<Vec3>,
    pub off_camera_position: Option<Vec3>,
    /// Axis whose displacement sign decides wheel spin direction.
    pub forward_axis: ForwardAxis,
    /// Distance at which a transport move counts as arrived.
    pub arrival_tolerance: f32,
    /// Distance at which the slider counts as arrived.
    pub slider_tolerance: f32,
    pub blink_interval: f32,
    /// Physics tick length used by [`Sequencer::advance`](crate::sequencer::Sequencer::advance).
    pub fixed_timestep: f32,
    /// Cap on physics ticks run per frame.
    pub max_physics_steps: u32,
    /// Number of transitions kept in the history.
    pub history_limit: usize,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            bottom_position: 0.0,
            top_position: 3.1,
            speed: 5.0,
            state_duration: 5.0,
            roll_speed: 2.0,
            wheel_diameter: 0.96,
            on_camera_position: None,
            off_camera_position: None,
            forward_axis: ForwardAxis::Z,
            arrival_tolerance: 0.05,
            slider_tolerance: 1e-4,
            blink_interval: 0.5,
            fixed_timestep: 0.02,
            max_physics_steps: 8,
            history_limit: 64,
        }
    }
}

impl LiftConfig {
    /// Defaults with both waypoints set.
    pub fn with_waypoints(on_camera: Vec3, off_camera: Vec3) -> Self {
        Self {
            on_camera_position: Some(on_camera),
            off_camera_position: Some(off_camera),
            ..Self::default()
        }
    }

    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every rule, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks: Vec<Check> = vec![
            waypoint_set("on_camera_position", self.on_camera_position),
            waypoint_set("off_camera_position", self.off_camera_position),
            finite("bottom_position", self.bottom_position),
            finite("top_position", self.top_position),
            positive("speed", self.speed),
            positive("state_duration", self.state_duration),
            positive("roll_speed", self.roll_speed),
            positive("wheel_diameter", self.wheel_diameter),
            positive("arrival_tolerance", self.arrival_tolerance),
            positive("slider_tolerance", self.slider_tolerance),
            positive("blink_interval", self.blink_interval),
            positive("fixed_timestep", self.fixed_timestep),
        ];

        if self.top_position <= self.bottom_position {
            checks.push(Validation::fail(ConfigViolation::InvertedTravel {
                bottom: self.bottom_position,
                top: self.top_position,
            }));
        }

        if let (Some(on), Some(off)) = (self.on_camera_position, self.off_camera_position) {
            if on == off {
                checks.push(Validation::fail(ConfigViolation::IdenticalWaypoints));
            }
        }

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }

    /// Target position for `waypoint`. Only meaningful once validated.
    pub(crate) fn waypoint(&self, waypoint: Waypoint) -> Vec3 {
        let position = match waypoint {
            Waypoint::OnCamera => self.on_camera_position,
            Waypoint::OffCamera => self.off_camera_position,
        };
        position.unwrap_or_default()
    }
}

fn waypoint_set(name: &'static str, position: Option<Vec3>) -> Check {
    match position {
        Some(_) => Validation::success(()),
        None => Validation::fail(ConfigViolation::MissingWaypoint { name }),
    }
}

fn finite(field: &'static str, value: f32) -> Check {
    if value.is_finite() {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Check {
    if !value.is_finite() {
        Validation::fail(ConfigViolation::NonFinite { field, value })
    } else if value <= 0.0 {
        Validation::fail(ConfigViolation::NonPositive { field, value })
    } else {
        Validation::success(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(config: &LiftConfig) -> Vec<ConfigViolation> {
        match config.validate() {
            Err(ConfigError::Invalid(violations)) => violations,
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_the_stand() {
        let config = LiftConfig::default();
        assert_eq!(config.bottom_position, 0.0);
        assert_eq!(config.top_position, 3.1);
        assert_eq!(config.wheel_diameter, 0.96);
        assert_eq!(config.arrival_tolerance, 0.05);
        assert_eq!(config.blink_interval, 0.5);
    }

    #[test]
    fn waypoints_are_required() {
        let found = violations(&LiftConfig::default());
        assert_eq!(
            found,
            vec![
                ConfigViolation::MissingWaypoint {
                    name: "on_camera_position"
                },
                ConfigViolation::MissingWaypoint {
                    name: "off_camera_position"
                },
            ]
        );
    }

    #[test]
    fn complete_config_is_valid() {
        let config = LiftConfig::with_waypoints([0.0, 0.0, 0.0], [0.0, 0.0, -8.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = LiftConfig {
            speed: 0.0,
            roll_speed: -1.0,
            top_position: -1.0,
            blink_interval: f32::NAN,
            ..LiftConfig::with_waypoints([1.0, 0.0, 0.0], [1.0, 0.0, 0.0])
        };

        let found = violations(&config);
        assert_eq!(found.len(), 5);
        assert!(found.contains(&ConfigViolation::NonPositive {
            field: "speed",
            value: 0.0
        }));
        assert!(found.contains(&ConfigViolation::NonPositive {
            field: "roll_speed",
            value: -1.0
        }));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::NonFinite { field: "blink_interval", .. })));
        assert!(found.contains(&ConfigViolation::InvertedTravel {
            bottom: 0.0,
            top: -1.0
        }));
        assert!(found.contains(&ConfigViolation::IdenticalWaypoints));
    }

    #[test]
    fn error_message_lists_every_violation() {
        let err = LiftConfig::default().validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("on_camera_position"));
        assert!(message.contains("off_camera_position"));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = LiftConfig::from_json(
            r#"{
                "on_camera_position": [0.0, 0.0, 0.0],
                "off_camera_position": [0.0, 0.0, -8.0],
                "forward_axis": "X",
                "speed": 2.5
            }"#,
        )
        .unwrap();

        assert_eq!(config.speed, 2.5);
        assert_eq!(config.forward_axis, ForwardAxis::X);
        assert_eq!(config.state_duration, 5.0);
        assert_eq!(config.on_camera_position, Some([0.0, 0.0, 0.0]));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = LiftConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = LiftConfig::with_waypoints([0.0, 0.0, 0.0], [0.0, 0.0, -8.0]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(LiftConfig::from_json(&json).unwrap(), config);
    }
}

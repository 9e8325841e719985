//! Configuration errors.

use thiserror::Error;

/// A single rule a [`LiftConfig`](super::LiftConfig) broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Waypoint '{name}' is not set")]
    MissingWaypoint { name: &'static str },

    #[error("'{field}' must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("'{field}' must be finite (got {value})")]
    NonFinite { field: &'static str, value: f32 },

    #[error("top_position ({top}) must be above bottom_position ({bottom})")]
    InvertedTravel { bottom: f32, top: f32 },

    #[error("on_camera_position and off_camera_position must differ")]
    IdenticalWaypoints,
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Builder for constructing sequencers.

use crate::config::LiftConfig;
use crate::host::Host;
use crate::motion::Vec3;
use crate::sequencer::error::BuildError;
use crate::sequencer::machine::Sequencer;

/// Builder for constructing a [`Sequencer`] with a fluent API.
///
/// The configuration is validated in [`build`](Self::build), so a missing
/// waypoint or a nonsensical speed is reported at startup rather than on
/// some later tick.
///
/// # Example
///
/// ```rust
/// use bikelift::config::LiftConfig;
/// use bikelift::core::LiftState;
/// use bikelift::host::SimulatedRig;
/// use bikelift::sequencer::SequencerBuilder;
///
/// let sequencer = SequencerBuilder::new()
///     .config(LiftConfig::with_waypoints([0.0, 0.0, 0.0], [0.0, 0.0, -8.0]))
///     .host(SimulatedRig::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(sequencer.state(), LiftState::Available);
/// ```
pub struct SequencerBuilder<H: Host> {
    config: Option<LiftConfig>,
    host: Option<H>,
    slider_position: Option<f32>,
    prop_position: Option<Vec3>,
}

impl<H: Host> SequencerBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            host: None,
            slider_position: None,
            prop_position: None,
        }
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: LiftConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the host collaborator (required).
    pub fn host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    /// Starting slider height. Defaults to `bottom_position`.
    pub fn slider_position(mut self, y: f32) -> Self {
        self.slider_position = Some(y);
        self
    }

    /// Starting prop position. Defaults to `off_camera_position`.
    pub fn prop_position(mut self, position: Vec3) -> Self {
        self.prop_position = Some(position);
        self
    }

    /// Build the sequencer.
    /// Returns an error if required fields are missing or the config is invalid.
    pub fn build(self) -> Result<Sequencer<H>, BuildError> {
        let config = self.config.ok_or(BuildError::MissingConfig)?;
        let host = self.host.ok_or(BuildError::MissingHost)?;
        config.validate()?;

        let slider_y = self.slider_position.unwrap_or(config.bottom_position);
        let prop_position = self
            .prop_position
            .or(config.off_camera_position)
            .unwrap_or_default();

        Ok(Sequencer::new(config, host, slider_y, prop_position))
    }
}

impl<H: Host> Default for SequencerBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

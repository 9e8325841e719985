//! Bikelift: a timed, event-driven sequencer for an automated bicycle lift prop.
//!
//! The sequencer walks a prop through a fixed cycle
//! (arrival, reservation, placement, lift, park, lower, completion, reset)
//! while driving two side effects: wheeled transport and slider motion, and a
//! three-color blinking status indicator. Automatic transitions come from a
//! dwell timer, but are gated on physical motion finishing.
//!
//! # Core Concepts
//!
//! - **State**: the closed `LiftState` cycle and bounded transition history
//! - **Motion**: slider axis and transport animator, integrated per tick
//! - **Host**: collaborator traits for the indicator, constraints and poses
//! - **Sequencer**: owns the context and reconciles timer and motion events
//!
//! # Example
//!
//! ```rust
//! use bikelift::config::LiftConfig;
//! use bikelift::core::LiftState;
//! use bikelift::host::SimulatedRig;
//! use bikelift::sequencer::SequencerBuilder;
//!
//! let config = LiftConfig {
//!     state_duration: 1.0,
//!     ..LiftConfig::with_waypoints([0.0, 0.0, 0.0], [0.0, 0.0, -2.0])
//! };
//! let mut sequencer = SequencerBuilder::new()
//!     .config(config)
//!     .host(SimulatedRig::new())
//!     .build()
//!     .unwrap();
//!
//! while sequencer.state() != LiftState::Placed {
//!     sequencer.advance(1.0 / 60.0);
//! }
//! assert!(sequencer.is_attached());
//! ```

pub mod config;
pub mod core;
pub mod coupling;
pub mod host;
pub mod indicator;
pub mod motion;
pub mod sequencer;

// Re-export commonly used types
pub use config::LiftConfig;
pub use core::{LiftState, State, StateHistory, StateTransition, TransitionCause};
pub use host::{Host, SimulatedRig};
pub use sequencer::{Sequencer, SequencerBuilder};

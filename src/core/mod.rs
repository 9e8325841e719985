//! Core state machine types.
//!
//! This module contains the pure part of the sequencer:
//! - State definitions via the `State` trait and the `LiftState` cycle
//! - Bounded transition history tracking

mod history;
mod state;

pub use history::{StateHistory, StateTransition, TransitionCause};
pub use state::{LiftState, State};

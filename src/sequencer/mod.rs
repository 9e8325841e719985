//! The sequencer: the timed state machine and everything it owns.
//!
//! # Key Concepts
//!
//! - **Dwell timer**: counts down in every state and advances the cycle when
//!   it runs out, but stays frozen while a physical move is underway
//! - **Motion gating**: `Lifting` and `Lowering` end when the slider arrives,
//!   and `Reserved` ends when the inbound transport move finishes
//! - **Two cadences**: a variable-rate frame tick and a fixed-rate physics
//!   tick, both taking `&mut self`, so all mutation is serialized

mod builder;
mod clock;
mod context;
mod error;
mod machine;

pub use builder::SequencerBuilder;
pub use clock::FixedTimestep;
pub use context::SequencerContext;
pub(crate) use context::TIMER_TOLERANCE;
pub use error::BuildError;
pub use machine::Sequencer;

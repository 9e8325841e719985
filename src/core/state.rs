//! Core State trait and the lift's life-cycle states.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.
//! [`LiftState`] is the closed, cyclic set of states the sequencer walks.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for logging and inspection
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Life-cycle of the lift prop.
///
/// Exactly one state is active at a time and the states form a closed cycle:
///
/// ```text
/// Available -> Reserved -> Placed -> Lifting -> Parked -> Lowering -> Completed -> Available
/// ```
///
/// # Example
///
/// ```rust
/// use bikelift::core::{LiftState, State};
///
/// let mut state = LiftState::Available;
/// for _ in 0..LiftState::ALL.len() {
///     state = state.next();
/// }
/// assert_eq!(state, LiftState::Available);
/// assert_eq!(LiftState::Parked.name(), "Parked");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LiftState {
    /// Stand is empty and waiting for a prop.
    Available,
    /// Prop is rolling in to the stand.
    Reserved,
    /// Prop is on the stand and coupled to the slider.
    Placed,
    /// Slider is travelling up.
    Lifting,
    /// Slider is resting at the top.
    Parked,
    /// Slider is travelling down.
    Lowering,
    /// Prop is released and rolling out.
    Completed,
}

impl LiftState {
    /// Every state, in cycle order.
    pub const ALL: [LiftState; 7] = [
        LiftState::Available,
        LiftState::Reserved,
        LiftState::Placed,
        LiftState::Lifting,
        LiftState::Parked,
        LiftState::Lowering,
        LiftState::Completed,
    ];

    /// The successor of this state in the cycle.
    pub fn next(self) -> LiftState {
        match self {
            Self::Available => Self::Reserved,
            Self::Reserved => Self::Placed,
            Self::Placed => Self::Lifting,
            Self::Lifting => Self::Parked,
            Self::Parked => Self::Lowering,
            Self::Lowering => Self::Completed,
            Self::Completed => Self::Available,
        }
    }

    /// Whether the slider is coupled to the prop while in this state.
    pub fn holds_coupling(self) -> bool {
        matches!(
            self,
            Self::Placed | Self::Lifting | Self::Parked | Self::Lowering
        )
    }
}

impl State for LiftState {
    fn name(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Placed => "Placed",
            Self::Lifting => "Lifting",
            Self::Parked => "Parked",
            Self::Lowering => "Lowering",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for LiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

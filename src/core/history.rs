//! State transition history tracking.
//!
//! Keeps a bounded, ordered log of the transitions a sequencer has taken,
//! stamped with both simulation time and wall-clock time.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What caused a transition to fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    /// The dwell timer ran out.
    DwellElapsed,
    /// The slider reached its commanded end of travel.
    SliderArrived,
    /// A transport move finished and its one-shot listener forced the transition.
    MovementComplete,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use bikelift::core::{LiftState, StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: LiftState::Available,
///     to: LiftState::Reserved,
///     cause: TransitionCause::DwellElapsed,
///     sim_time: 5.0,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, LiftState::Reserved);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Why the transition fired
    pub cause: TransitionCause,
    /// Simulation seconds since the sequencer started
    pub sim_time: f64,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// Holds at most `limit` entries; recording past the limit drops the
/// oldest entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Default number of retained transitions.
    pub const DEFAULT_LIMIT: usize = 64;

    /// Create a new empty history with the default limit.
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Create a new empty history retaining at most `limit` transitions.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a transition, evicting the oldest one if the history is full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the oldest
    /// retained transition, then the `to` state of each transition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bikelift::core::{LiftState, StateHistory, StateTransition, TransitionCause};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::new();
    /// history.record(StateTransition {
    ///     from: LiftState::Available,
    ///     to: LiftState::Reserved,
    ///     cause: TransitionCause::DwellElapsed,
    ///     sim_time: 5.0,
    ///     timestamp: Utc::now(),
    /// });
    /// history.record(StateTransition {
    ///     from: LiftState::Reserved,
    ///     to: LiftState::Placed,
    ///     cause: TransitionCause::MovementComplete,
    ///     sim_time: 9.2,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = history.get_path();
    /// assert_eq!(path, vec![&LiftState::Available, &LiftState::Reserved, &LiftState::Placed]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Simulation seconds between the oldest and newest retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn sim_span(&self) -> Option<f64> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => Some(last.sim_time - first.sim_time),
            _ => None,
        }
    }

    /// Number of retained transitions that entered `state`.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Iterate over retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LiftState;

    fn transition(from: LiftState, to: LiftState, sim_time: f64) -> StateTransition<LiftState> {
        StateTransition {
            from,
            to,
            cause: TransitionCause::DwellElapsed,
            sim_time,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<LiftState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.sim_span().is_none());
        assert_eq!(history.limit(), StateHistory::<LiftState>::DEFAULT_LIMIT);
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::new();
        history.record(transition(LiftState::Available, LiftState::Reserved, 5.0));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|t| t.to), Some(LiftState::Reserved));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(transition(LiftState::Placed, LiftState::Lifting, 1.0));
        history.record(transition(LiftState::Lifting, LiftState::Parked, 1.7));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &LiftState::Placed);
        assert_eq!(path[1], &LiftState::Lifting);
        assert_eq!(path[2], &LiftState::Parked);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = StateHistory::with_limit(2);
        history.record(transition(LiftState::Available, LiftState::Reserved, 1.0));
        history.record(transition(LiftState::Reserved, LiftState::Placed, 2.0));
        history.record(transition(LiftState::Placed, LiftState::Lifting, 3.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path()[0], &LiftState::Reserved);
        assert_eq!(history.sim_span(), Some(1.0));
    }

    #[test]
    fn zero_limit_keeps_one_entry() {
        let mut history = StateHistory::with_limit(0);
        history.record(transition(LiftState::Available, LiftState::Reserved, 1.0));
        history.record(transition(LiftState::Reserved, LiftState::Placed, 2.0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn entries_into_counts_matching_targets() {
        let mut history = StateHistory::new();
        history.record(transition(LiftState::Completed, LiftState::Available, 1.0));
        history.record(transition(LiftState::Available, LiftState::Reserved, 2.0));
        history.record(transition(LiftState::Completed, LiftState::Available, 3.0));

        assert_eq!(history.entries_into(&LiftState::Available), 2);
        assert_eq!(history.entries_into(&LiftState::Parked), 0);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(LiftState::Available, LiftState::Reserved, 5.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<LiftState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(
            deserialized.last().map(|t| t.cause),
            Some(TransitionCause::DwellElapsed)
        );
    }
}

//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::ViewState;

/// Reducer transforms state based on intents.
///
/// Reducers are the only place state transitions happen, and they must
/// stay pure: (State, Intent) -> State. Write-throughs, sign-in attempts
/// and event emission belong to the owning core, which wraps the reduce
/// call on its dispatch task.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

//! Lifecycle Reducer

use crate::actions::Action;
use crate::state::AppState;

/// Reducer for the running flag
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Quit = action {
        state.running = false;
    }

    state
}

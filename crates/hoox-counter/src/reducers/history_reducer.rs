//! History Reducer

use crate::actions::Action;
use crate::state::AppState;

/// Records the label of every semantic action, keeping the newest `history_len`
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if matches!(action, Action::KeyPressed(_)) {
        return state;
    }

    state.history.push(action.label());
    let overflow = state.history.len().saturating_sub(state.history_len);
    state.history.drain(..overflow);

    state
}

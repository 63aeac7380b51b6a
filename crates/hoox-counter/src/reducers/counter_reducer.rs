//! Counter Reducer

use crate::actions::Action;
use crate::state::AppState;

/// Reducer for the counter value and step
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Increment => {
            state.count = state.count.saturating_add(state.step);
        }
        Action::Decrement => {
            state.count = state.count.saturating_sub(state.step);
        }
        Action::Reset => {
            state.count = state.initial;
        }
        Action::SetStep(step) if *step > 0 => {
            state.step = *step;
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement_by_step() {
        let state = AppState {
            step: 3,
            ..AppState::default()
        };

        let state = reduce(state, &Action::Increment);
        assert_eq!(state.count, 3);

        let state = reduce(state, &Action::Decrement);
        let state = reduce(state, &Action::Decrement);
        assert_eq!(state.count, -3);
    }

    #[test]
    fn test_reset_returns_to_initial() {
        let state = AppState {
            count: 42,
            initial: 7,
            ..AppState::default()
        };

        assert_eq!(reduce(state, &Action::Reset).count, 7);
    }

    #[test]
    fn test_step_must_be_positive() {
        let state = reduce(AppState::default(), &Action::SetStep(4));
        assert_eq!(state.step, 4);

        let state = reduce(state, &Action::SetStep(0));
        assert_eq!(state.step, 4);
    }
}

use crate::actions::Action;
use crate::state::AppState;
use hoox::{Dispatch, Middleware};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware<AppState, Action> for KeyboardMiddleware {
    fn wrap(&self, _state: &AppState, next: Dispatch<Action>) -> Dispatch<Action> {
        Dispatch::new(move |action: Action| match action {
            Action::KeyPressed(key) => {
                // Consume the raw key event (don't pass to reducer)
                if let Some(action) = translate_key(&key) {
                    next.dispatch(action);
                }
            }
            other => next.dispatch(other),
        })
    }
}

/// Map a key event to the action it triggers, if any
pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('+') | KeyCode::Char('k') | KeyCode::Up => Some(Action::Increment),
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => Some(Action::Decrement),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .map(|step| Action::SetStep(i64::from(step))),
        _ => None,
    }
}

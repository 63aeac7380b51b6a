//! Actions understood by the counter

use ratatui::crossterm::event::KeyEvent;

/// Root action enum
///
/// `KeyPressed` carries a raw terminal event and is translated into one of
/// the semantic actions by the keyboard middleware before any reducer runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    KeyPressed(KeyEvent),
    Increment,
    Decrement,
    Reset,
    SetStep(i64),
    Quit,
}

impl Action {
    /// Short label shown in the history panel
    pub fn label(&self) -> String {
        match self {
            Action::KeyPressed(key) => format!("key {:?}", key.code),
            Action::Increment => "increment".to_string(),
            Action::Decrement => "decrement".to_string(),
            Action::Reset => "reset".to_string(),
            Action::SetStep(step) => format!("step = {}", step),
            Action::Quit => "quit".to_string(),
        }
    }
}

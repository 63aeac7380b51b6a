use crate::actions::Action;
use crate::state::AppState;
use hoox::{GuardMiddleware, LoggingMiddleware, MiddlewareStack};

pub mod keyboard;

pub use keyboard::KeyboardMiddleware;

/// Middleware chain for the counter store
///
/// Later entries wrap earlier ones, so actions flow
/// keyboard -> logging -> floor guard -> store.
pub fn stack() -> MiddlewareStack<AppState, Action> {
    MiddlewareStack::new()
        .with(GuardMiddleware::new("floor", above_floor))
        .with(LoggingMiddleware::new())
        .with(KeyboardMiddleware::new())
}

/// Whether `action` keeps the counter at or above its floor
fn above_floor(state: &AppState, action: &Action) -> bool {
    match action {
        Action::Decrement => state.count.saturating_sub(state.step) >= state.floor,
        _ => true,
    }
}

use crate::actions::Action;
use crate::reducers::{counter_reducer, history_reducer, lifecycle_reducer};
use crate::state::AppState;
use hoox::{CombineReducers, CombinedReducer, HooxError};

/// Root reducer - every sub-reducer sees the whole state, in this order
pub fn root_reducer() -> Result<CombinedReducer<AppState, Action>, HooxError> {
    CombineReducers::new()
        .slice("lifecycle", lifecycle_reducer::reduce)
        .slice("counter", counter_reducer::reduce)
        .slice("history", history_reducer::reduce)
        .build()
}

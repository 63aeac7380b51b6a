//! Host state primitive
//!
//! [`StateHook`] owns the current state of one store instance and the queue
//! feeding its reducer. `use_reducer()` hands out the state snapshot and the
//! base dispatch for a render; dispatched actions are applied by `flush()`,
//! one at a time, in submission order.

use crate::dispatch::{ActionQueue, Dispatch};
use crate::error::HooxError;
use crate::reducer::Reducer;
use std::rc::Rc;

/// State slot of a single store instance
pub struct StateHook<S, A> {
    reducer: Rc<dyn Reducer<S, A>>,
    state: S,
    queue: ActionQueue<A>,
    base: Dispatch<A>,
    updates: usize,
}

impl<S, A> StateHook<S, A>
where
    S: Clone,
    A: 'static,
{
    pub fn new<R>(reducer: R, initial_state: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::with_shared(Rc::new(reducer), initial_state)
    }

    /// Create a hook driven by a reducer shared with other hooks
    pub fn with_shared(reducer: Rc<dyn Reducer<S, A>>, initial_state: S) -> Self {
        let queue = ActionQueue::new();
        let base = queue.dispatcher();
        Self {
            reducer,
            state: initial_state,
            queue,
            base,
            updates: 0,
        }
    }

    /// Current state snapshot and the base dispatch
    ///
    /// The base dispatch keeps its identity across calls.
    pub fn use_reducer(&self) -> (S, Dispatch<A>) {
        (self.state.clone(), self.base.clone())
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of state updates applied since creation
    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }

    /// Apply queued actions through the reducer
    ///
    /// Returns how many updates were applied. The first reducer error stops
    /// the drain: the failing action is dropped, later actions stay queued and
    /// the state keeps its last good value.
    pub fn flush(&mut self) -> Result<usize, HooxError> {
        let mut applied = 0;
        while let Some(action) = self.queue.pop() {
            match self.reducer.reduce(self.state.clone(), &action) {
                Ok(next) => {
                    self.state = next;
                    self.updates += 1;
                    applied += 1;
                }
                Err(e) => {
                    log::error!("StateHook: reducer failed: {}", e);
                    return Err(e);
                }
            }
        }
        if applied > 0 {
            log::trace!("StateHook: applied {} update(s)", applied);
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::CombineReducers;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        Inc,
        Add(i32),
        Poison,
    }

    fn counter(state: i32, action: &Action) -> i32 {
        match action {
            Action::Inc => state + 1,
            Action::Add(n) => state + n,
            Action::Poison => state,
        }
    }

    #[test]
    fn test_dispatch_is_applied_on_flush() {
        let mut hook = StateHook::new(counter, 0);
        let (state, dispatch) = hook.use_reducer();
        assert_eq!(state, 0);

        dispatch.dispatch(Action::Inc);
        assert_eq!(*hook.state(), 0);
        assert!(hook.has_pending());

        assert_eq!(hook.flush(), Ok(1));
        assert_eq!(*hook.state(), 1);
        assert!(!hook.has_pending());
    }

    #[test]
    fn test_updates_are_serialized_in_order() {
        let mut hook = StateHook::new(
            |state: Vec<i32>, action: &Action| match action {
                Action::Add(n) => [state, vec![*n]].concat(),
                _ => state,
            },
            Vec::new(),
        );
        let (_, dispatch) = hook.use_reducer();
        dispatch.dispatch(Action::Add(1));
        dispatch.dispatch(Action::Add(2));
        dispatch.dispatch(Action::Add(3));

        assert_eq!(hook.flush(), Ok(3));
        assert_eq!(*hook.state(), vec![1, 2, 3]);
        assert_eq!(hook.updates(), 3);
    }

    #[test]
    fn test_base_dispatch_is_stable() {
        let hook = StateHook::new(counter, 0);
        let (_, first) = hook.use_reducer();
        let (_, second) = hook.use_reducer();
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn test_reducer_error_stops_flush() {
        let reducer = CombineReducers::new()
            .slice("counter", counter)
            .slice("poison", |state: i32, action: &Action| match action {
                Action::Poison => None,
                _ => Some(state),
            })
            .build()
            .unwrap();
        let mut hook = StateHook::new(reducer, 0);
        let (_, dispatch) = hook.use_reducer();
        dispatch.dispatch(Action::Inc);
        dispatch.dispatch(Action::Poison);
        dispatch.dispatch(Action::Inc);

        assert_eq!(
            hook.flush(),
            Err(HooxError::ReducerReturnsEmpty {
                slice: "poison".to_string()
            })
        );
        assert_eq!(*hook.state(), 1);
        assert_eq!(hook.pending(), 1);

        assert_eq!(hook.flush(), Ok(1));
        assert_eq!(*hook.state(), 2);
    }

    #[test]
    #[should_panic(expected = "counter overflowed")]
    fn test_reducer_panic_propagates_from_flush() {
        let mut hook = StateHook::new(
            |state: i32, action: &Action| match action {
                Action::Poison => panic!("counter overflowed"),
                _ => state,
            },
            0,
        );
        let (_, dispatch) = hook.use_reducer();
        dispatch.dispatch(Action::Poison);

        let _ = hook.flush();
    }
}

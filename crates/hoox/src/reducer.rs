//! Reducers and reducer composition
//!
//! A reducer is a pure function producing the next state from the current
//! state and an action. [`combine_reducers`] folds several named reducers
//! into one. Unlike per-slice composition, every named reducer receives and
//! returns the *whole* state; the name only identifies it in errors and logs.

use crate::error::HooxError;
use std::fmt;

/// Pure state transition `(state, action) -> state`
///
/// Every `Fn(S, &A) -> S` is a reducer. Composite reducers may fail with a
/// [`HooxError`] when one of their parts violates the reducer contract.
pub trait Reducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> Result<S, HooxError>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
{
    fn reduce(&self, state: S, action: &A) -> Result<S, HooxError> {
        Ok(self(state, action))
    }
}

/// A named reducer taking part in a combined reducer
///
/// Returns `None` to signal the absent state, which is a contract violation.
pub type SliceReducer<S, A> = Box<dyn Fn(S, &A) -> Option<S>>;

/// Box a function as a [`SliceReducer`]
///
/// The function may return either `S` or `Option<S>`.
pub fn slice<S, A, F, R>(f: F) -> SliceReducer<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(S, &A) -> R + 'static,
    R: Into<Option<S>>,
{
    Box::new(move |state: S, action: &A| -> Option<S> { f(state, action).into() })
}

/// Combine named reducers into one, applied in declaration order
///
/// Fails with [`HooxError::CombineNoReducers`] when `slices` is empty.
pub fn combine_reducers<S, A, I, N>(slices: I) -> Result<CombinedReducer<S, A>, HooxError>
where
    I: IntoIterator<Item = (N, SliceReducer<S, A>)>,
    N: Into<String>,
{
    slices
        .into_iter()
        .fold(CombineReducers::new(), |builder, (name, reducer)| {
            builder.with_boxed(name.into(), reducer)
        })
        .build()
}

/// Builder for a [`CombinedReducer`]
pub struct CombineReducers<S, A> {
    slices: Vec<(String, SliceReducer<S, A>)>,
}

impl<S, A> CombineReducers<S, A> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Add a named reducer
    ///
    /// Re-using a name replaces the earlier reducer but keeps its position.
    pub fn slice<F, R>(self, name: impl Into<String>, f: F) -> Self
    where
        S: 'static,
        A: 'static,
        F: Fn(S, &A) -> R + 'static,
        R: Into<Option<S>>,
    {
        self.with_boxed(name.into(), slice(f))
    }

    fn with_boxed(mut self, name: String, reducer: SliceReducer<S, A>) -> Self {
        match self.slices.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => {
                log::debug!("combine_reducers: replacing reducer `{}`", name);
                entry.1 = reducer;
            }
            None => self.slices.push((name, reducer)),
        }
        self
    }

    pub fn build(self) -> Result<CombinedReducer<S, A>, HooxError> {
        if self.slices.is_empty() {
            return Err(HooxError::CombineNoReducers);
        }
        Ok(CombinedReducer {
            slices: self.slices,
        })
    }
}

impl<S, A> Default for CombineReducers<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Left fold of named reducers over the whole state
pub struct CombinedReducer<S, A> {
    slices: Vec<(String, SliceReducer<S, A>)>,
}

impl<S, A> CombinedReducer<S, A> {
    /// Names of the combined reducers, in application order
    pub fn slice_names(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|(name, _)| name.as_str())
    }
}

impl<S, A> Reducer<S, A> for CombinedReducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> Result<S, HooxError> {
        self.slices
            .iter()
            .try_fold(state, |state, (name, reducer)| {
                log::trace!("combine_reducers: applying `{}`", name);
                reducer(state, action).ok_or_else(|| HooxError::ReducerReturnsEmpty {
                    slice: name.clone(),
                })
            })
    }
}

impl<S, A> fmt::Debug for CombinedReducer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("slices", &self.slice_names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    enum Op {
        Push(&'static str),
        Clear,
    }

    fn push_reducer(mut log: Vec<String>, op: &Op) -> Vec<String> {
        if let Op::Push(item) = op {
            log.push(item.to_string());
        }
        log
    }

    #[test]
    fn test_plain_fn_is_reducer() {
        let reducer = |n: i32, by: &i32| n + by;
        assert_eq!(reducer.reduce(1, &2), Ok(3));
    }

    #[test]
    fn test_empty_mapping_fails() {
        let result = CombineReducers::<i32, i32>::new().build();
        assert_eq!(result.unwrap_err(), HooxError::CombineNoReducers);

        let result = combine_reducers::<i32, i32, _, String>(Vec::new());
        assert_eq!(result.unwrap_err().code(), "COMBINE_NO_REDUCERS");
    }

    #[test]
    fn test_left_fold_in_declaration_order() {
        let reducer = CombineReducers::new()
            .slice("first", |mut log: Vec<String>, _: &Op| {
                log.push("first".to_string());
                log
            })
            .slice("second", |mut log: Vec<String>, _: &Op| {
                log.push("second".to_string());
                log
            })
            .slice("push", push_reducer)
            .build()
            .unwrap();

        let state = reducer.reduce(Vec::new(), &Op::Push("item")).unwrap();
        assert_eq!(state, vec!["first", "second", "item"]);
        assert_eq!(
            reducer.slice_names().collect::<Vec<_>>(),
            vec!["first", "second", "push"]
        );
    }

    #[test]
    fn test_each_reducer_sees_previous_result() {
        let reducer = combine_reducers(vec![
            ("double", slice(|n: i32, _: &()| n * 2)),
            ("inc", slice(|n: i32, _: &()| n + 1)),
        ])
        .unwrap();

        // (3 * 2) + 1, not (3 + 1) * 2
        assert_eq!(reducer.reduce(3, &()), Ok(7));
    }

    #[test]
    fn test_absent_state_fails_with_slice_name() {
        let reducer = CombineReducers::new()
            .slice("keep", |log: Vec<String>, _: &Op| log)
            .slice("drop_on_clear", |log: Vec<String>, op: &Op| match op {
                Op::Clear => None,
                _ => Some(log),
            })
            .build()
            .unwrap();

        assert_eq!(reducer.reduce(Vec::new(), &Op::Push("a")), Ok(Vec::new()));
        assert_eq!(
            reducer.reduce(Vec::new(), &Op::Clear),
            Err(HooxError::ReducerReturnsEmpty {
                slice: "drop_on_clear".to_string()
            })
        );
    }

    #[test]
    fn test_zero_and_empty_are_valid_states() {
        let reducer = CombineReducers::new()
            .slice("zero", |_: i32, _: &()| 0)
            .build()
            .unwrap();
        assert_eq!(reducer.reduce(5, &()), Ok(0));

        let reducer = CombineReducers::new()
            .slice("clear", |_: String, _: &()| String::new())
            .build()
            .unwrap();
        assert_eq!(reducer.reduce("text".to_string(), &()), Ok(String::new()));
    }

    #[test]
    fn test_redeclared_name_keeps_position() {
        let reducer = CombineReducers::new()
            .slice("a", |n: i32, _: &()| n + 100)
            .slice("b", |n: i32, _: &()| n * 10)
            .slice("a", |n: i32, _: &()| n + 1)
            .build()
            .unwrap();

        assert_eq!(reducer.slice_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(reducer.reduce(1, &()), Ok(20));
    }
}

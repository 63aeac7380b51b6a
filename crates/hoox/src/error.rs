//! Errors raised by reducer composition and store lookup.

use thiserror::Error;

/// Contract violations detected while composing or running a store.
///
/// These are programmer errors: they are raised at the point of violation
/// and never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HooxError {
    /// A combined reducer was built from an empty mapping.
    #[error("combine_reducers requires at least one reducer")]
    CombineNoReducers,

    /// A slice reducer produced the absent state.
    #[error("reducer `{slice}` returned an empty state")]
    ReducerReturnsEmpty { slice: String },

    /// A store was looked up in a scope that has no provider for it.
    #[error("no provider for this store in scope")]
    NoProvider,
}

impl HooxError {
    /// Stable code identifying the error kind
    pub fn code(&self) -> &'static str {
        match self {
            HooxError::CombineNoReducers => "COMBINE_NO_REDUCERS",
            HooxError::ReducerReturnsEmpty { .. } => "REDUCER_RETURNS_EMPTY",
            HooxError::NoProvider => "NO_PROVIDER",
        }
    }
}

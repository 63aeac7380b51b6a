//! # hoox
//!
//! Reducer/dispatch state containers with composable middleware.
//!
//! ## Flow
//!
//! ```text
//! Provider::render ─▶ use_store ─▶ StoreValue { state, dispatch }
//!                                        │
//!        dispatch(action) ─▶ middleware (last added runs first)
//!                                        │
//!                          base dispatch ─▶ queue ─▶ flush ─▶ reducer ─▶ state
//! ```
//!
//! - [`combine_reducers`] folds named reducers over the whole state.
//! - [`MiddlewareStack`] decorates the base dispatch; the last middleware is
//!   the outermost wrapper.
//! - [`Provider`] owns a store instance and exposes its value to a [`Scope`].
//! - [`use_hoox`] and [`Projection`] map the store value into the shapes a
//!   consumer wants.
//!
//! ## Usage
//!
//! ```rust
//! use hoox::{create_store, MiddlewareStack, Scope};
//!
//! #[derive(Debug)]
//! enum Action {
//!     Inc,
//! }
//!
//! fn counter(state: i32, action: &Action) -> i32 {
//!     match action {
//!         Action::Inc => state + 1,
//!     }
//! }
//!
//! let store = create_store(counter, 0, MiddlewareStack::new());
//! let mut provider = store.provider();
//! let root = Scope::root();
//!
//! let dispatch = provider.render(&root, |scope| {
//!     let hoox = store.use_hoox(scope).unwrap();
//!     assert_eq!(hoox.state, 0);
//!     hoox.actions.dispatch
//! });
//! dispatch.dispatch(Action::Inc);
//! provider.flush().unwrap();
//!
//! assert_eq!(*provider.state(), 1);
//! ```

pub mod context;
pub mod dispatch;
pub mod error;
pub mod hook;
pub mod middleware;
pub mod projection;
pub mod reducer;
pub mod store;

// Re-export commonly used types
pub use context::{create_context, Context, ContextId, Scope};
pub use dispatch::Dispatch;
pub use error::HooxError;
pub use hook::StateHook;
pub use middleware::{GuardMiddleware, LoggingMiddleware, Middleware, MiddlewareStack};
pub use projection::{
    use_hoox, use_hoox_with, DispatchProps, Hoox, Identity, MapDispatch, MapState, Projection,
    RawDispatch,
};
pub use reducer::{combine_reducers, slice, CombineReducers, CombinedReducer, Reducer, SliceReducer};
pub use store::{create_store, use_store, CreatedStore, Provider, StoreConfig, StoreValue};

//! Middleware composition
//!
//! Middleware decorates a dispatch function. Given a snapshot of the state
//! and the next dispatch in the chain, it returns a new dispatch which decides
//! whether, when and with what action the next layer runs.
//!
//! ## Ordering
//!
//! ```text
//! stack [m1, m2]  =>  m2(state)(m1(state)(base))
//!
//! dispatch(action) -> m2 -> m1 -> base
//! ```
//!
//! The stack is folded left starting from the base dispatch, so the LAST
//! middleware ends up outermost: it sees every action first and alone decides
//! whether the inner layers (and eventually the base dispatch) run.

use crate::dispatch::Dispatch;
use std::fmt;
use std::rc::Rc;

pub mod guard;
pub mod logging;

pub use guard::GuardMiddleware;
pub use logging::LoggingMiddleware;

/// Dispatch decorator parameterized by a state snapshot
///
/// Every `Fn(&S, Dispatch<A>) -> Dispatch<A>` is a middleware.
pub trait Middleware<S, A> {
    /// Wrap `next`, observing `state` as it was when the chain was built
    fn wrap(&self, state: &S, next: Dispatch<A>) -> Dispatch<A>;
}

impl<S, A, F> Middleware<S, A> for F
where
    F: Fn(&S, Dispatch<A>) -> Dispatch<A>,
{
    fn wrap(&self, state: &S, next: Dispatch<A>) -> Dispatch<A> {
        self(state, next)
    }
}

/// Zero, one or a sequence of middleware
pub struct MiddlewareStack<S, A> {
    layers: Vec<Rc<dyn Middleware<S, A>>>,
}

impl<S, A> MiddlewareStack<S, A> {
    /// Empty stack; composing it yields the base dispatch unchanged
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn single<M>(middleware: M) -> Self
    where
        M: Middleware<S, A> + 'static,
    {
        Self::new().with(middleware)
    }

    /// Append a middleware; it wraps everything added before it
    pub fn with<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<S, A> + 'static,
    {
        self.layers.push(Rc::new(middleware));
        self
    }

    /// Append a middleware closure
    pub fn with_fn<F>(self, f: F) -> Self
    where
        F: Fn(&S, Dispatch<A>) -> Dispatch<A> + 'static,
    {
        self.with(f)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Build the effective dispatch for `state` on top of `base`
    pub fn compose(&self, state: &S, base: Dispatch<A>) -> Dispatch<A> {
        self.layers
            .iter()
            .fold(base, |next, layer| layer.wrap(state, next))
    }
}

impl<S, A> Clone for MiddlewareStack<S, A> {
    fn clone(&self) -> Self {
        Self {
            layers: self.layers.clone(),
        }
    }
}

impl<S, A> Default for MiddlewareStack<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for MiddlewareStack<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareStack")
            .field("len", &self.layers.len())
            .finish()
    }
}

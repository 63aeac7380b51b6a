//! Projection of a store value into component-friendly shapes
//!
//! A [`Projection`] pairs a state mapping with a dispatch mapping. Both have
//! typed defaults: [`Identity`] passes the whole state through and
//! [`RawDispatch`] exposes the dispatch as [`DispatchProps`]. Mappings are
//! recomputed on every call.

use crate::dispatch::Dispatch;
use crate::store::StoreValue;
use std::fmt;

/// Projected state and actions
#[derive(Debug, Clone, PartialEq)]
pub struct Hoox<MS, DP> {
    pub state: MS,
    pub actions: DP,
}

/// Actions shape used when no dispatch mapping is given
pub struct DispatchProps<A> {
    pub dispatch: Dispatch<A>,
}

impl<A> Clone for DispatchProps<A> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
        }
    }
}

impl<A> PartialEq for DispatchProps<A> {
    fn eq(&self, other: &Self) -> bool {
        self.dispatch == other.dispatch
    }
}

impl<A> Eq for DispatchProps<A> {}

impl<A> fmt::Debug for DispatchProps<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchProps")
            .field("dispatch", &self.dispatch)
            .finish()
    }
}

/// Maps the store state to the state seen by a consumer
pub trait MapState<S> {
    type Output;

    fn map_state(&self, state: &S) -> Self::Output;
}

/// Maps the store dispatch to the actions seen by a consumer
pub trait MapDispatch<A> {
    type Output;

    fn map_dispatch(&self, dispatch: &Dispatch<A>) -> Self::Output;
}

/// Passes the whole state through
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<S: Clone> MapState<S> for Identity {
    type Output = S;

    fn map_state(&self, state: &S) -> S {
        state.clone()
    }
}

impl<S, T, F> MapState<S> for F
where
    F: Fn(&S) -> T,
{
    type Output = T;

    fn map_state(&self, state: &S) -> T {
        self(state)
    }
}

/// Exposes the dispatch itself as [`DispatchProps`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDispatch;

impl<A> MapDispatch<A> for RawDispatch {
    type Output = DispatchProps<A>;

    fn map_dispatch(&self, dispatch: &Dispatch<A>) -> DispatchProps<A> {
        DispatchProps {
            dispatch: dispatch.clone(),
        }
    }
}

impl<A, P, F> MapDispatch<A> for F
where
    F: Fn(&Dispatch<A>) -> P,
{
    type Output = P;

    fn map_dispatch(&self, dispatch: &Dispatch<A>) -> P {
        self(dispatch)
    }
}

/// State and dispatch mappings applied to a store value
#[derive(Debug, Clone, Copy, Default)]
pub struct Projection<MS = Identity, MD = RawDispatch> {
    map_state: MS,
    map_dispatch: MD,
}

impl Projection {
    /// Whole state and raw dispatch
    pub fn new() -> Self {
        Self {
            map_state: Identity,
            map_dispatch: RawDispatch,
        }
    }
}

impl<MS, MD> Projection<MS, MD> {
    pub fn map_state<S, T, F>(self, f: F) -> Projection<F, MD>
    where
        F: Fn(&S) -> T,
    {
        Projection {
            map_state: f,
            map_dispatch: self.map_dispatch,
        }
    }

    pub fn map_dispatch<A, P, F>(self, f: F) -> Projection<MS, F>
    where
        F: Fn(&Dispatch<A>) -> P,
    {
        Projection {
            map_state: self.map_state,
            map_dispatch: f,
        }
    }

    pub fn project<S, A>(&self, store: &StoreValue<S, A>) -> Hoox<MS::Output, MD::Output>
    where
        MS: MapState<S>,
        MD: MapDispatch<A>,
    {
        Hoox {
            state: self.map_state.map_state(&store.state),
            actions: self.map_dispatch.map_dispatch(&store.dispatch),
        }
    }
}

/// Whole state and raw dispatch of `store`
pub fn use_hoox<S: Clone, A>(store: &StoreValue<S, A>) -> Hoox<S, DispatchProps<A>> {
    Projection::new().project(store)
}

/// Project `store` through `projection`
pub fn use_hoox_with<S, A, MS, MD>(
    store: &StoreValue<S, A>,
    projection: &Projection<MS, MD>,
) -> Hoox<MS::Output, MD::Output>
where
    MS: MapState<S>,
    MD: MapDispatch<A>,
{
    projection.project(store)
}

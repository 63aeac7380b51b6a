//! Store values, store descriptors and the provider
//!
//! ```text
//! StoreConfig ──Provider::new──▶ Provider (owns StateHook)
//!                                  │ render(scope, children)
//!                                  ▼
//!        use_store: snapshot + middleware ──▶ StoreValue { state, dispatch }
//!                                  │ provided in child scope
//!                                  ▼
//!        CreatedStore::use_hoox(scope) ──▶ Hoox { state, actions }
//! ```

use crate::context::{create_context, Context, Scope};
use crate::dispatch::Dispatch;
use crate::error::HooxError;
use crate::hook::StateHook;
use crate::middleware::MiddlewareStack;
use crate::projection::{DispatchProps, Hoox, MapDispatch, MapState, Projection};
use crate::reducer::Reducer;
use std::fmt;
use std::rc::Rc;

/// State and effective dispatch at one point in time
///
/// `dispatch` was composed against `state`; the pair is rebuilt on every
/// render and should not outlive it.
pub struct StoreValue<S, A> {
    pub state: S,
    pub dispatch: Dispatch<A>,
}

impl<S: Clone, A> Clone for StoreValue<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for StoreValue<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreValue")
            .field("state", &self.state)
            .field("dispatch", &self.dispatch)
            .finish()
    }
}

/// Build the store value for the current render of `hook`
///
/// Middleware is composed fresh against the current state snapshot.
pub fn use_store<S, A>(
    hook: &StateHook<S, A>,
    middleware: &MiddlewareStack<S, A>,
) -> StoreValue<S, A>
where
    S: Clone,
    A: 'static,
{
    let (state, base) = hook.use_reducer();
    let dispatch = middleware.compose(&state, base);
    StoreValue { state, dispatch }
}

/// Everything needed to instantiate store values for one store
pub struct StoreConfig<S, A> {
    reducer: Rc<dyn Reducer<S, A>>,
    initial_state: S,
    middleware: MiddlewareStack<S, A>,
    context: Context<Option<StoreValue<S, A>>>,
}

impl<S, A> StoreConfig<S, A> {
    pub fn reducer(&self) -> &Rc<dyn Reducer<S, A>> {
        &self.reducer
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn middleware(&self) -> &MiddlewareStack<S, A> {
        &self.middleware
    }

    /// Context through which providers expose this store
    pub fn context(&self) -> &Context<Option<StoreValue<S, A>>> {
        &self.context
    }
}

impl<S: Clone, A> Clone for StoreConfig<S, A> {
    fn clone(&self) -> Self {
        Self {
            reducer: Rc::clone(&self.reducer),
            initial_state: self.initial_state.clone(),
            middleware: self.middleware.clone(),
            context: self.context.clone(),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for StoreConfig<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("initial_state", &self.initial_state)
            .field("middleware", &self.middleware)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Describe a store and bind its lookup
pub fn create_store<S, A, R>(
    reducer: R,
    initial_state: S,
    middleware: MiddlewareStack<S, A>,
) -> CreatedStore<S, A>
where
    R: Reducer<S, A> + 'static,
    S: 'static,
    A: 'static,
{
    let config = StoreConfig {
        reducer: Rc::new(reducer),
        initial_state,
        middleware,
        context: create_context(None),
    };
    log::debug!(
        "create_store: {:?} with {} middleware",
        config.context.id(),
        config.middleware.len()
    );
    CreatedStore { config }
}

/// A store descriptor plus the lookups bound to it
pub struct CreatedStore<S, A> {
    config: StoreConfig<S, A>,
}

impl<S, A> CreatedStore<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    pub fn config(&self) -> &StoreConfig<S, A> {
        &self.config
    }

    /// A provider owning a fresh instance of this store
    pub fn provider(&self) -> Provider<S, A> {
        Provider::new(&self.config)
    }

    /// Nearest store value provided in `scope`
    pub fn use_store(&self, scope: &Scope<'_>) -> Result<StoreValue<S, A>, HooxError> {
        scope
            .use_context(&self.config.context)
            .ok_or(HooxError::NoProvider)
    }

    /// Whole state and raw dispatch of the nearest store
    pub fn use_hoox(&self, scope: &Scope<'_>) -> Result<Hoox<S, DispatchProps<A>>, HooxError> {
        self.use_hoox_with(scope, &Projection::new())
    }

    /// Nearest store projected through `projection`
    pub fn use_hoox_with<MS, MD>(
        &self,
        scope: &Scope<'_>,
        projection: &Projection<MS, MD>,
    ) -> Result<Hoox<MS::Output, MD::Output>, HooxError>
    where
        MS: MapState<S>,
        MD: MapDispatch<A>,
    {
        let store = self.use_store(scope)?;
        Ok(projection.project(&store))
    }
}

impl<S: fmt::Debug, A> fmt::Debug for CreatedStore<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedStore")
            .field("config", &self.config)
            .finish()
    }
}

/// Exposes a store instance to a subtree
///
/// Each `render` builds a fresh store value from the current state and makes
/// it the ambient value of the child scope handed to `children`.
pub struct Provider<S, A> {
    config: StoreConfig<S, A>,
    hook: StateHook<S, A>,
}

impl<S, A> Provider<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    pub fn new(config: &StoreConfig<S, A>) -> Self {
        Self {
            config: config.clone(),
            hook: StateHook::with_shared(
                Rc::clone(&config.reducer),
                config.initial_state.clone(),
            ),
        }
    }

    pub fn render<R>(&self, scope: &Scope<'_>, children: impl FnOnce(&Scope<'_>) -> R) -> R {
        let value = use_store(&self.hook, &self.config.middleware);
        let child = scope.provide(&self.config.context, Some(value));
        children(&child)
    }

    /// Apply dispatched actions; see [`StateHook::flush`]
    pub fn flush(&mut self) -> Result<usize, HooxError> {
        self.hook.flush()
    }

    pub fn has_pending(&self) -> bool {
        self.hook.has_pending()
    }

    pub fn state(&self) -> &S {
        self.hook.state()
    }

    /// Number of state updates applied so far
    pub fn updates(&self) -> usize {
        self.hook.updates()
    }
}

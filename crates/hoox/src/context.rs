//! Tree-scoped value propagation
//!
//! A [`Context`] is a handle with its own identity and a default value. A
//! [`Scope`] is a registry of provided values keyed by that identity, chained
//! to its parent scope. Providing a value creates a child scope; looking a
//! context up walks from the innermost scope outwards and falls back to the
//! context default. Scopes are passed explicitly down the call chain.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Context`] handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

/// Handle to a tree-scoped value
pub struct Context<T> {
    id: ContextId,
    default: Rc<T>,
}

/// Create a new context handle with its own identity
pub fn create_context<T>(default: T) -> Context<T> {
    let id = ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed));
    log::trace!("create_context: {:?}", id);
    Context {
        id,
        default: Rc::new(default),
    }
}

impl<T> Context<T> {
    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T> Clone for Context<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            default: Rc::clone(&self.default),
        }
    }
}

impl<T> fmt::Debug for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("id", &self.id).finish()
    }
}

/// Registry of values provided for a subtree
pub struct Scope<'p> {
    parent: Option<&'p Scope<'p>>,
    values: HashMap<ContextId, Rc<dyn Any>>,
}

impl Scope<'static> {
    /// Outermost scope, providing nothing
    pub fn root() -> Self {
        Self {
            parent: None,
            values: HashMap::new(),
        }
    }
}

impl Default for Scope<'static> {
    fn default() -> Self {
        Self::root()
    }
}

impl<'p> Scope<'p> {
    /// Child scope in which `context` resolves to `value`
    pub fn provide<T: 'static>(&self, context: &Context<T>, value: T) -> Scope<'_> {
        let mut values: HashMap<ContextId, Rc<dyn Any>> = HashMap::new();
        values.insert(context.id, Rc::new(value));
        Scope {
            parent: Some(self),
            values,
        }
    }

    /// Nearest value provided for `context`, if any
    pub fn lookup<T: 'static>(&self, context: &Context<T>) -> Option<Rc<T>> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(value) = current.values.get(&context.id) {
                return Rc::clone(value).downcast::<T>().ok();
            }
            scope = current.parent;
        }
        None
    }

    /// Nearest value provided for `context`, or its default
    pub fn use_context<T: Clone + 'static>(&self, context: &Context<T>) -> T {
        match self.lookup(context) {
            Some(value) => T::clone(&value),
            None => T::clone(&context.default),
        }
    }

    /// Number of scopes between this one and the root
    pub fn depth(&self) -> usize {
        self.parent.map_or(0, |parent| parent.depth() + 1)
    }
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("provided", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

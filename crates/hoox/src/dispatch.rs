//! Dispatch handles and the action queue behind the base dispatch
//!
//! A [`Dispatch`] is what consumers call to submit an action. The base
//! dispatch handed out by a [`StateHook`](crate::StateHook) does not reduce
//! immediately: it pushes the action into an action queue which the hook
//! drains one action at a time. This keeps state updates serialized and lets
//! middleware dispatch follow-up actions without re-entering the reducer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Function used to submit an action for processing
pub struct Dispatch<A> {
    inner: Rc<dyn Fn(A)>,
}

impl<A> Dispatch<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Submit an action
    pub fn dispatch(&self, action: A) {
        (self.inner)(action)
    }

    /// Whether both handles wrap the very same function
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
    }
}

impl<A> Clone for Dispatch<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Handles are equal when they wrap the same function
impl<A> PartialEq for Dispatch<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> Eq for Dispatch<A> {}

impl<A> fmt::Debug for Dispatch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch").finish_non_exhaustive()
    }
}

/// FIFO queue of actions waiting to be reduced
///
/// Dispatchers created from the queue hold a weak reference to it; the owner
/// pops actions in submission order.
pub(crate) struct ActionQueue<A> {
    actions: Rc<RefCell<VecDeque<A>>>,
}

impl<A: 'static> ActionQueue<A> {
    pub(crate) fn new() -> Self {
        Self {
            actions: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Create a dispatch that enqueues into this queue
    ///
    /// Once the queue is dropped, dispatched actions are discarded and logged.
    pub(crate) fn dispatcher(&self) -> Dispatch<A> {
        let actions = Rc::downgrade(&self.actions);
        Dispatch::new(move |action: A| match actions.upgrade() {
            Some(actions) => actions.borrow_mut().push_back(action),
            None => log::error!("Dispatch: action queue dropped, discarding action"),
        })
    }

    /// Take the oldest queued action
    pub(crate) fn pop(&self) -> Option<A> {
        self.actions.borrow_mut().pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.actions.borrow().len()
    }
}

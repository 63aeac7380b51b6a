use crate::dispatch::Dispatch;
use crate::middleware::Middleware;
use std::fmt::Debug;
use std::rc::Rc;

/// GuardMiddleware - forwards an action only while a predicate holds
///
/// The predicate sees the state snapshot the chain was built with. Rejected
/// actions are consumed: nothing inside the guard runs for them.
pub struct GuardMiddleware<S, A> {
    name: String,
    allow: Rc<dyn Fn(&S, &A) -> bool>,
}

impl<S, A> GuardMiddleware<S, A> {
    pub fn new<F>(name: impl Into<String>, allow: F) -> Self
    where
        F: Fn(&S, &A) -> bool + 'static,
    {
        Self {
            name: name.into(),
            allow: Rc::new(allow),
        }
    }
}

impl<S, A> Middleware<S, A> for GuardMiddleware<S, A>
where
    S: Clone + 'static,
    A: Debug + 'static,
{
    fn wrap(&self, state: &S, next: Dispatch<A>) -> Dispatch<A> {
        let snapshot = state.clone();
        let allow = Rc::clone(&self.allow);
        let name = self.name.clone();
        Dispatch::new(move |action: A| {
            if allow(&snapshot, &action) {
                next.dispatch(action);
            } else {
                log::trace!("GuardMiddleware[{}]: consumed {:?}", name, action);
            }
        })
    }
}

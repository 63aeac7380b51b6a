use crate::dispatch::Dispatch;
use crate::middleware::Middleware;
use std::fmt::Debug;
use std::rc::Rc;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware<A> {
    skip: Option<Rc<dyn Fn(&A) -> bool>>,
}

impl<A> LoggingMiddleware<A> {
    pub fn new() -> Self {
        Self { skip: None }
    }

    /// Don't log actions matching `predicate` (they are still forwarded)
    pub fn skip<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        self.skip = Some(Rc::new(predicate));
        self
    }
}

impl<A> Default for LoggingMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Middleware<S, A> for LoggingMiddleware<A>
where
    A: Debug + 'static,
{
    fn wrap(&self, _state: &S, next: Dispatch<A>) -> Dispatch<A> {
        let skip = self.skip.clone();
        Dispatch::new(move |action: A| {
            if !skip.as_ref().is_some_and(|skip| skip(&action)) {
                log::debug!("Action: {:?}", action);
            }
            // Always pass action through
            next.dispatch(action);
        })
    }
}

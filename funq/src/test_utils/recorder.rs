//! Recorder — wraps a computation and records every argument it sees.

use crate::computation::{Computation, identity};
use std::sync::{Arc, Mutex, PoisonError};

/// Records the arguments passed to the computations it wraps.
///
/// Clones share one log, so a recorder can be handed to several stages of
/// a composition and inspected afterwards with [`seen`](Self::seen).
pub struct Recorder<A> {
    seen: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone + Send + 'static> Recorder<A> {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Wrap `inner` so each invocation logs its argument before
    /// evaluating. An unbound `inner` stays unbound.
    pub fn wrap<R: 'static>(&self, inner: &Computation<A, R>) -> Computation<A, R> {
        let seen = Arc::clone(&self.seen);
        inner.compose("record", move |eval| {
            Computation::try_new(move |arg: A| {
                seen.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(arg.clone());
                eval(arg)
            })
        })
    }

    /// A recording identity computation.
    pub fn identity(&self) -> Computation<A, A> {
        self.wrap(&identity())
    }

    /// Snapshot of every recorded argument, in invocation order.
    pub fn seen(&self) -> Vec<A> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many invocations were recorded.
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<A: Clone + Send + 'static> Default for Recorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Recorder<A> {
    fn clone(&self) -> Self {
        Self {
            seen: Arc::clone(&self.seen),
        }
    }
}

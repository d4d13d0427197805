//! Mapping across a single suspension point.
//!
//! A computation whose result is a future can still be mapped: the mapped
//! computation returns a future that awaits the original result once and
//! then applies the selector. No task is spawned, and there is no timeout
//! or cancellation. Dropping the returned future drops the inner one.

use crate::computation::Computation;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

impl<A, F> Computation<A, F>
where
    A: 'static,
    F: Future + Send + 'static,
{
    /// Await the result, then apply `selector` to it.
    ///
    /// Failures raised while producing the future (an unbound computation,
    /// a failing stage) surface from `invoke` before anything is awaited.
    ///
    /// ```
    /// use funq::Computation;
    ///
    /// # futures::executor::block_on(async {
    /// let fetch = Computation::new(|id: u32| async move { id * 10 });
    /// let label = fetch.map_async(|n| format!("#{n}"));
    /// assert_eq!(label.invoke(4).unwrap().await, "#40");
    /// # });
    /// ```
    pub fn map_async<R, G>(&self, selector: G) -> Computation<A, BoxFuture<'static, R>>
    where
        R: Send + 'static,
        G: Fn(F::Output) -> R + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        self.compose("map_async", move |eval| {
            Computation::try_new(move |arg| {
                let pending = eval(arg)?;
                let selector = Arc::clone(&selector);
                Ok(async move { selector(pending.await) }.boxed())
            })
        })
    }
}

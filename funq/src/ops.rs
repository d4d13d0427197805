//! Functor and monad combinators over [`Computation`].
//!
//! Each combinator evaluates its inputs at most once per invocation and
//! hands the same argument to every stage that needs it.

use crate::computation::Computation;

impl<A: 'static, T: 'static> Computation<A, T> {
    /// Evaluate this computation, then apply `selector` to its result.
    ///
    /// ```
    /// let len = funq::args::string().map(|s| s.len());
    /// assert_eq!(len.invoke("four".to_owned()).unwrap(), 4);
    /// ```
    pub fn map<R, F>(&self, selector: F) -> Computation<A, R>
    where
        R: 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.compose("map", move |eval| {
            Computation::try_new(move |arg| eval(arg).map(&selector))
        })
    }

    /// Thread one argument through two dependent stages.
    ///
    /// Evaluates `self` with the argument, uses the result to select a
    /// second computation, evaluates that with the *same* argument, and
    /// merges both results with `combine`. The first stage always runs
    /// before the second is selected.
    ///
    /// ```
    /// let half = funq::constant(4).bind(
    ///     |x| funq::constant(*x / 2),
    ///     |x, y| (x, y),
    /// );
    /// assert_eq!(half.invoke0().unwrap(), (4, 2));
    /// ```
    pub fn bind<U, R, G, C>(&self, second: G, combine: C) -> Computation<A, R>
    where
        A: Clone,
        U: 'static,
        R: 'static,
        G: Fn(&T) -> Computation<A, U> + Send + Sync + 'static,
        C: Fn(T, U) -> R + Send + Sync + 'static,
    {
        self.compose("bind", move |first| {
            Computation::try_new(move |arg: A| {
                let a1 = first(arg.clone())?;
                let a2 = second(&a1).eval(arg)?;
                Ok(combine(a1, a2))
            })
        })
    }

    /// [`bind`](Self::bind) keeping only the second stage's result.
    pub fn and_then<U, G>(&self, second: G) -> Computation<A, U>
    where
        A: Clone,
        U: 'static,
        G: Fn(&T) -> Computation<A, U> + Send + Sync + 'static,
    {
        self.bind(second, |_, a2| a2)
    }

    /// Evaluate `self` and `other` with the same argument, left to right,
    /// and pair the results.
    pub fn zip<U: 'static>(&self, other: &Computation<A, U>) -> Computation<A, (T, U)>
    where
        A: Clone,
    {
        self.compose2(other, "zip", |first, second| {
            Computation::try_new(move |arg: A| {
                let a1 = first(arg.clone())?;
                let a2 = second(arg)?;
                Ok((a1, a2))
            })
        })
    }

    /// Keep the result only when `predicate` holds for it.
    pub fn filter<P>(&self, predicate: P) -> Computation<A, Option<T>>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.compose("filter", move |eval| {
            Computation::try_new(move |arg| {
                let value = eval(arg)?;
                Ok(predicate(&value).then_some(value))
            })
        })
    }
}

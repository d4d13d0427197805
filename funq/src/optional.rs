//! Combinators over optional computations.
//!
//! An absent value short-circuits: selectors and `when_some` branches are
//! never called for it.

use crate::computation::Computation;
use crate::error::FunqError;
use std::any::type_name;

impl<A: 'static, T: 'static> Computation<A, Option<T>> {
    /// Map the value when present; propagate absence without calling
    /// `selector`.
    pub fn map_some<R, F>(&self, selector: F) -> Computation<A, Option<R>>
    where
        R: 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.compose("map_some", move |eval| {
            Computation::try_new(move |arg| eval(arg).map(|found| found.map(&selector)))
        })
    }

    /// Unwrap with a lazily computed fallback. `when_none` runs only on
    /// absence.
    pub fn fold_with<R, S, N>(&self, when_some: S, when_none: N) -> Computation<A, R>
    where
        R: 'static,
        S: Fn(T) -> R + Send + Sync + 'static,
        N: Fn() -> R + Send + Sync + 'static,
    {
        self.compose("fold", move |eval| {
            Computation::try_new(move |arg| {
                Ok(match eval(arg)? {
                    Some(value) => when_some(value),
                    None => when_none(),
                })
            })
        })
    }

    /// Unwrap with a precomputed fallback.
    pub fn fold<R, S>(&self, when_some: S, none: R) -> Computation<A, R>
    where
        R: Clone + Send + Sync + 'static,
        S: Fn(T) -> R + Send + Sync + 'static,
    {
        self.fold_with(when_some, move || none.clone())
    }

    /// The value when present, otherwise `value`.
    pub fn with_default(&self, value: T) -> Computation<A, T>
    where
        T: Clone + Send + Sync,
    {
        self.fold(|some| some, value)
    }

    /// The value when present. Absence fails with
    /// [`FunqError::AbsentResult`] when invoked, never when composed.
    pub fn require(&self) -> Computation<A, T> {
        self.compose("require", |eval| {
            Computation::try_new(move |arg| {
                eval(arg)?.ok_or_else(|| {
                    tracing::debug!(value = type_name::<T>(), "required value was absent");
                    FunqError::AbsentResult
                })
            })
        })
    }
}

//! The Computation abstraction — a pure mapping from argument to result.

use crate::error::FunqError;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// The evaluation function behind a bound [`Computation`].
pub(crate) type EvalFn<A, R> = dyn Fn(A) -> Result<R, FunqError> + Send + Sync;

/// A pure mapping from an argument of type `A` to a result of type `R`.
///
/// Computations are immutable values. Every combinator returns a new
/// computation and leaves its inputs untouched, and cloning one only bumps
/// a reference count.
///
/// A computation is either *bound* (it wraps a closure) or *unbound*, the
/// uninitialized placeholder produced by [`Computation::unbound`] and
/// [`Default`]. Composing over an unbound computation yields another
/// unbound computation, and invoking one fails with
/// [`FunqError::NullComputation`] before anything is evaluated.
///
/// # Examples
///
/// ```
/// use funq::Computation;
///
/// let double = Computation::new(|n: i32| n * 2);
/// assert_eq!(double.invoke(21).unwrap(), 42);
///
/// let described = double.map(|n| format!("<{n}>"));
/// assert_eq!(described.invoke(4).unwrap(), "<8>");
/// ```
pub struct Computation<A, R> {
    eval: Option<Arc<EvalFn<A, R>>>,
}

/// A computation that may or may not produce a value.
///
/// `None` means "no value". Combinators over optional computations never
/// look past a `None`; they propagate it.
pub type OptionalComputation<A, T> = Computation<A, Option<T>>;

impl<A: 'static, R: 'static> Computation<A, R> {
    /// Wrap an infallible closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::try_new(move |arg| Ok(f(arg)))
    }

    /// Wrap a closure that can fail. Its errors propagate unchanged through
    /// every combinator built on top of it.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(A) -> Result<R, FunqError> + Send + Sync + 'static,
    {
        Self {
            eval: Some(Arc::new(f)),
        }
    }

    /// The unbound placeholder. Invoking it fails with
    /// [`FunqError::NullComputation`].
    pub fn unbound() -> Self {
        Self { eval: None }
    }

    /// A computation that ignores its argument and always returns `value`.
    pub fn always(value: R) -> Self
    where
        R: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Whether this computation wraps a closure.
    pub fn is_bound(&self) -> bool {
        self.eval.is_some()
    }

    /// Evaluate with `arg`, failing fast if unbound.
    pub(crate) fn eval(&self, arg: A) -> Result<R, FunqError> {
        match &self.eval {
            Some(eval) => eval(arg),
            None => {
                tracing::debug!(
                    arg = type_name::<A>(),
                    result = type_name::<R>(),
                    "invoked an unbound computation"
                );
                Err(FunqError::NullComputation)
            }
        }
    }

    /// Build a new computation from this one's evaluation function, or
    /// propagate unboundness without calling `build`.
    pub(crate) fn compose<B, S>(
        &self,
        combinator: &'static str,
        build: impl FnOnce(Arc<EvalFn<A, R>>) -> Computation<B, S>,
    ) -> Computation<B, S>
    where
        B: 'static,
        S: 'static,
    {
        match &self.eval {
            Some(eval) => build(Arc::clone(eval)),
            None => {
                tracing::warn!(combinator, "composing over an unbound computation");
                Computation::unbound()
            }
        }
    }

    /// Like [`compose`](Self::compose), for combinators over two inputs.
    /// Both must be bound for `build` to be called.
    pub(crate) fn compose2<T, B, S>(
        &self,
        other: &Computation<A, T>,
        combinator: &'static str,
        build: impl FnOnce(Arc<EvalFn<A, R>>, Arc<EvalFn<A, T>>) -> Computation<B, S>,
    ) -> Computation<B, S>
    where
        T: 'static,
        B: 'static,
        S: 'static,
    {
        match (&self.eval, &other.eval) {
            (Some(first), Some(second)) => build(Arc::clone(first), Arc::clone(second)),
            (first, second) => {
                tracing::warn!(
                    combinator,
                    first_bound = first.is_some(),
                    second_bound = second.is_some(),
                    "composing over an unbound computation"
                );
                Computation::unbound()
            }
        }
    }
}

/// A computation that returns its argument unchanged.
///
/// This is the seed of every typed argument constructor in [`crate::args`].
pub fn identity<T: 'static>() -> Computation<T, T> {
    Computation::new(|arg| arg)
}

/// A parameterless computation that always returns `value`.
///
/// ```
/// let answer = funq::constant(42);
/// assert_eq!(answer.invoke0().unwrap(), 42);
/// ```
pub fn constant<T>(value: T) -> Computation<(), T>
where
    T: Clone + Send + Sync + 'static,
{
    Computation::always(value)
}

impl<A, R> Clone for Computation<A, R> {
    fn clone(&self) -> Self {
        Self {
            eval: self.eval.clone(),
        }
    }
}

impl<A: 'static, R: 'static> Default for Computation<A, R> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<A, R> fmt::Debug for Computation<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computation")
            .field("arg", &type_name::<A>())
            .field("result", &type_name::<R>())
            .field("bound", &self.eval.is_some())
            .finish()
    }
}

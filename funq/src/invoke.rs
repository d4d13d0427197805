//! Invocation helpers — call a computation and adapt its argument passing
//! or result unwrapping.
//!
//! A computation over a tuple can be called with positional arguments
//! through [`invoke2`](Computation::invoke2) and
//! [`invoke3`](Computation::invoke3). An optional computation can be
//! unwrapped by failing, by defaulting, or by handing back the `Option`.

use crate::computation::Computation;
use crate::error::FunqError;
use std::fmt;
use std::sync::Arc;

impl<A: 'static, R: 'static> Computation<A, R> {
    /// Invoke with `arg`.
    ///
    /// Fails with [`FunqError::NullComputation`] if this computation is
    /// unbound, or with whatever a wrapped fallible stage raised.
    pub fn invoke(&self, arg: A) -> Result<R, FunqError> {
        self.eval(arg)
    }

    /// Close over `arg`, producing a callable that takes nothing.
    pub fn apply(&self, arg: A) -> Thunk<R>
    where
        A: Clone + Send + Sync,
    {
        let computation = self.clone();
        Thunk::new(move || computation.invoke(arg.clone()))
    }
}

impl<R: 'static> Computation<(), R> {
    /// Invoke a parameterless computation.
    pub fn invoke0(&self) -> Result<R, FunqError> {
        self.eval(())
    }

    /// A callable that invokes this parameterless computation.
    pub fn apply0(&self) -> Thunk<R> {
        self.apply(())
    }
}

impl<A1: 'static, A2: 'static, R: 'static> Computation<(A1, A2), R> {
    /// Invoke a computation over a pair with positional arguments.
    ///
    /// ```
    /// let pair = funq::args::arg_of::<(i32, String)>();
    /// assert_eq!(pair.invoke2(42, "42".into()).unwrap(), (42, "42".to_owned()));
    /// ```
    pub fn invoke2(&self, a1: A1, a2: A2) -> Result<R, FunqError> {
        self.eval((a1, a2))
    }
}

impl<A1: 'static, A2: 'static, A3: 'static, R: 'static> Computation<(A1, A2, A3), R> {
    /// Invoke a computation over a triple with positional arguments.
    pub fn invoke3(&self, a1: A1, a2: A2, a3: A3) -> Result<R, FunqError> {
        self.eval((a1, a2, a3))
    }
}

impl<A: 'static, T: 'static> Computation<A, Option<T>> {
    /// Invoke and require a value. Shorthand for
    /// `self.require().invoke(arg)`.
    pub fn invoke_required(&self, arg: A) -> Result<T, FunqError> {
        self.require().invoke(arg)
    }

    /// Invoke, falling back to `default` on absence.
    pub fn invoke_or(&self, arg: A, default: T) -> Result<T, FunqError> {
        self.eval(arg).map(|found| found.unwrap_or(default))
    }

    /// Invoke and report presence instead of failing on absence.
    ///
    /// Only an unbound computation (or a failing stage) is an error here;
    /// an absent value is `Ok(None)`.
    pub fn try_invoke(&self, arg: A) -> Result<Option<T>, FunqError> {
        self.eval(arg)
    }
}

impl<T: 'static> Computation<(), Option<T>> {
    /// Invoke a parameterless optional computation, falling back to
    /// `default` on absence.
    pub fn invoke0_or(&self, default: T) -> Result<T, FunqError> {
        self.invoke_or((), default)
    }
}

/// A zero-argument callable produced by partial application.
///
/// Calling it re-runs the underlying computation every time; nothing is
/// cached.
#[must_use]
pub struct Thunk<R> {
    call: Arc<dyn Fn() -> Result<R, FunqError> + Send + Sync>,
}

impl<R: 'static> Thunk<R> {
    /// Wrap a zero-argument closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<R, FunqError> + Send + Sync + 'static,
    {
        Self { call: Arc::new(f) }
    }

    /// Run it.
    pub fn call(&self) -> Result<R, FunqError> {
        (self.call)()
    }

    /// Discard the produced value. Failures still surface.
    pub fn ignore(&self) -> Thunk<()> {
        let inner = self.clone();
        Thunk::new(move || inner.call().map(drop))
    }
}

/// Adapt any zero-argument closure into one that discards its value.
///
/// ```
/// let done = funq::invoke::ignore(|| 42);
/// assert!(done.call().is_ok());
/// ```
pub fn ignore<T, F>(f: F) -> Thunk<()>
where
    F: Fn() -> T + Send + Sync + 'static,
{
    Thunk::new(move || {
        drop(f());
        Ok(())
    })
}

impl<R> Clone for Thunk<R> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<R> fmt::Debug for Thunk<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk")
            .field("result", &std::any::type_name::<R>())
            .finish()
    }
}

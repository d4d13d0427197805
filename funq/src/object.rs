//! Type-erased values, and the combinators that erase and recover types.

use crate::computation::Computation;
use crate::error::FunqError;
use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// A value whose concrete type has been erased.
///
/// Remembers the name of the type it was built from, so a failed cast can
/// say what it actually found.
#[derive(Clone)]
pub struct Object {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Object {
    /// Erase `value`. An `Object` passes through unchanged, so erasing
    /// twice is the same as erasing once.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        if let Some(object) = (&value as &dyn Any).downcast_ref::<Object>() {
            return object.clone();
        }
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the erased type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the erased value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the value as a `T`, if that is what it is.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Recover a `T`, or fail with [`FunqError::CastMismatch`].
    pub fn downcast<T: Any + Clone>(&self) -> Result<T, FunqError> {
        self.downcast_ref::<T>().cloned().ok_or_else(|| {
            let (expected, actual) = (type_name::<T>(), self.type_name);
            tracing::debug!(expected, actual, "cast mismatch");
            FunqError::CastMismatch { expected, actual }
        })
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl<A: 'static, T: Any + Send + Sync> Computation<A, T> {
    /// Erase the result type. Always succeeds; erasing a computation that
    /// already yields [`Object`] leaves its values as they are.
    pub fn erase(&self) -> Computation<A, Object> {
        self.map(Object::new)
    }
}

impl<A: 'static> Computation<A, Object> {
    /// Recover a concrete result type.
    ///
    /// Never fails when composed. Invocation fails with
    /// [`FunqError::CastMismatch`] if the erased value is not a `T`.
    ///
    /// ```
    /// use funq::{FunqError, Object, args};
    ///
    /// let int = args::object().cast::<i32>();
    /// assert_eq!(int.invoke(Object::new(42)).unwrap(), 42);
    /// assert!(matches!(
    ///     int.invoke(Object::new(42.0_f64)),
    ///     Err(FunqError::CastMismatch { .. })
    /// ));
    /// ```
    pub fn cast<T: Any + Clone>(&self) -> Computation<A, T> {
        self.compose("cast", |eval| {
            Computation::try_new(move |arg| eval(arg)?.downcast::<T>())
        })
    }
}

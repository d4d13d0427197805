//! # funq — Combinators for composing single-argument computations
//!
//! A [`Computation<A, R>`] is a pure mapping from an argument of type `A`
//! to a result of type `R`. Everything in this crate either builds one,
//! composes several into a new one, or invokes one.
//!
//! ## The Pieces
//!
//! | Piece | Items | What it does |
//! |-------|-------|-------------|
//! | ① Computation | [`Computation`], [`identity`], [`constant`] | The wrapped function itself |
//! | ② Optional | [`OptionalComputation`] | A computation that may produce no value |
//! | ③ Arguments | [`args`] | Typed identity computations that start a chain |
//! | ④ Combinators | `map`, `bind`, `zip`, `filter`, `fold`, ... | Build new computations from old ones |
//! | ⑤ Invocation | `invoke*`, `try_invoke`, [`Thunk`] | Call a computation and unwrap its result |
//!
//! ## Composition Never Fails
//!
//! Building a computation is infallible. Only invocation can fail, and it
//! always fails with a [`FunqError`]:
//!
//! - an unbound computation was invoked ([`FunqError::NullComputation`]),
//! - a required value was absent ([`FunqError::AbsentResult`]),
//! - an erased value had the wrong type ([`FunqError::CastMismatch`]).
//!
//! ```
//! use funq::args;
//!
//! let accept = args::int32()
//!     .filter(|n| *n == 42 || *n == -42)
//!     .with_default(-1);
//!
//! assert_eq!(accept.invoke(42).unwrap(), 42);
//! assert_eq!(accept.invoke(7).unwrap(), -1);
//! ```
//!
//! ## Threading
//!
//! Computations hold their closure behind an `Arc` and require it to be
//! `Send + Sync`, so a composed computation can be cloned cheaply and
//! invoked from any number of threads. No combinator shares mutable state
//! between invocations.

#![deny(missing_docs)]

pub mod args;
#[cfg(feature = "async")]
pub mod asynchronous;
pub mod computation;
pub mod error;
pub mod invoke;
pub mod object;
pub mod ops;
pub mod optional;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use computation::{Computation, OptionalComputation, constant, identity};
pub use error::FunqError;
pub use invoke::{Thunk, ignore};
pub use object::Object;

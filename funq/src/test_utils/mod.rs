//! Instrumentation for testing compositions.
//!
//! Available behind the `test-utils` feature flag.

mod recorder;

pub use recorder::Recorder;

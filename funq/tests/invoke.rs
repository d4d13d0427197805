//! Invocation helper tests: positional invocation, optional unwrapping,
//! partial application, and erasure.

use funq::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn positive() -> OptionalComputation<i32, i32> {
    args::int32().filter(|x| *x > 0)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Positional invocation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn invoke2_packs_pair() {
    let f = args::arg_of::<(i32, String)>();
    let result = f.invoke2(42, "42".into()).unwrap();
    assert_eq!(result, (42, "42".to_owned()));
}

#[cfg(feature = "chrono")]
#[test]
fn invoke3_packs_triple() {
    let f = args::arg_of::<(i32, String, chrono::DateTime<chrono::Utc>)>();
    let time = chrono::DateTime::from_timestamp(1_700_000_000, 500).unwrap();
    let result = f.invoke3(42, "42".into(), time).unwrap();
    assert_eq!(result, (42, "42".to_owned(), time));
}

#[test]
fn invoke3_feeds_mapped_computation() {
    let sum = args::arg_of::<(i64, i64, i64)>().map(|(a, b, c)| a + b + c);
    assert_eq!(sum.invoke3(1, 2, 3).unwrap(), 6);
}

#[test]
fn invoke2_on_unbound_fails() {
    let f = Computation::<(i32, i32), i32>::unbound();
    assert!(matches!(f.invoke2(1, 2), Err(FunqError::NullComputation)));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Optional unwrapping
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn try_invoke_reports_presence() {
    let f = positive();
    assert_eq!(f.try_invoke(42).unwrap(), Some(42));
    assert_eq!(f.try_invoke(-42).unwrap(), None);
    assert_eq!(f.try_invoke(0).unwrap(), None);
    assert_eq!(f.try_invoke(-42).unwrap().unwrap_or_default(), 0);
}

#[test]
fn try_invoke_on_unbound_fails() {
    let f = OptionalComputation::<i32, i32>::unbound();
    assert!(matches!(f.try_invoke(1), Err(FunqError::NullComputation)));
}

#[test]
fn invoke_required_unwraps_or_fails() {
    let f = positive();
    assert_eq!(f.invoke_required(5).unwrap(), 5);
    assert!(matches!(f.invoke_required(-5), Err(FunqError::AbsentResult)));
}

#[test]
fn invoke_or_uses_default_on_absence() {
    let f = positive();
    assert_eq!(f.invoke_or(5, 99).unwrap(), 5);
    assert_eq!(f.invoke_or(-5, 99).unwrap(), 99);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Partial application
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn apply0_returns_value_without_argument() {
    let f = constant(42).apply0();
    assert_eq!(f.call().unwrap(), 42);
}

#[test]
fn apply_captures_argument() {
    let f = args::int32().apply(42);
    assert_eq!(f.call().unwrap(), 42);
    assert_eq!(f.call().unwrap(), 42);
}

#[test]
fn apply_reevaluates_on_every_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = {
        let calls = Arc::clone(&calls);
        Computation::new(move |n: i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            n
        })
    };
    let thunk = counted.apply(1);
    thunk.call().unwrap();
    thunk.clone().call().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn ignore_discards_value_but_runs_computation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let effect = {
        let calls = Arc::clone(&calls);
        Computation::new(move |n: usize| calls.fetch_add(n, Ordering::SeqCst))
    };
    let ignored: Thunk<()> = effect.apply(3).ignore();
    ignored.call().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn ignore_keeps_failures() {
    let ignored = positive().require().apply(-1).ignore();
    assert!(matches!(ignored.call(), Err(FunqError::AbsentResult)));
}

#[test]
fn thunk_from_closure() {
    let t = Thunk::new(|| Ok("ready"));
    assert_eq!(t.call().unwrap(), "ready");
}

#[test]
fn ignore_adapts_plain_closure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let ignored: Thunk<()> = {
        let calls = Arc::clone(&calls);
        ignore(move || calls.fetch_add(1, Ordering::SeqCst) + 100)
    };
    ignored.call().unwrap();
    ignored.call().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

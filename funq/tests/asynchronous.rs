//! Async map tests — one suspension point, no concurrency.

#![cfg(feature = "async")]

use funq::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn map_async_applies_selector_after_await() {
    let fetch = Computation::new(|n: i32| async move { n * 2 });
    let f = fetch.map_async(|n| n + 1);
    assert_eq!(f.invoke(20).unwrap().await, 41);
}

#[tokio::test]
async fn map_async_chains() {
    let fetch = args::string().map(|s| async move { s.len() });
    let f = fetch.map_async(|n| n * 10).map_async(|n| format!("{n} units"));
    assert_eq!(f.invoke("abcd".into()).unwrap().await, "40 units");
}

#[tokio::test]
async fn map_async_is_lazy_until_awaited() {
    let selected = Arc::new(AtomicUsize::new(0));
    let f = {
        let selected = Arc::clone(&selected);
        Computation::new(|n: u32| async move { n }).map_async(move |n| {
            selected.fetch_add(1, Ordering::SeqCst);
            n
        })
    };

    let pending = f.invoke(1).unwrap();
    assert_eq!(selected.load(Ordering::SeqCst), 0);
    assert_eq!(pending.await, 1);
    assert_eq!(selected.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn map_async_over_unbound_fails_before_awaiting() {
    let f = Computation::<i32, std::future::Ready<i32>>::unbound().map_async(|n| n);
    assert!(!f.is_bound());
    assert!(matches!(f.invoke(1), Err(FunqError::NullComputation)));
}

#[tokio::test]
async fn map_async_future_can_run_on_another_task() {
    let f = Computation::new(|n: u64| async move { n }).map_async(|n| n + 1);
    let handle = tokio::spawn(f.invoke(41).unwrap());
    assert_eq!(handle.await.unwrap(), 42);
}

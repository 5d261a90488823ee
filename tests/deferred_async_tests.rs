#![cfg(feature = "async")]
//! Deferred values inside tokio: awaiting, spawning on the blocking pool and
//! wrapping futures.

use carrier::deferred::{Deferred, Fault, ThreadPerTask, TokioExecutor};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn await_a_chain_of_blocking_stages() {
    let executor = TokioExecutor::try_current().unwrap();
    let stage_executor = executor.clone();

    let started = Instant::now();
    let chained = Deferred::spawn(&executor, || {
        std::thread::sleep(Duration::from_millis(50));
        10
    })
    .bind(move |x| {
        Deferred::spawn(&stage_executor, move || {
            std::thread::sleep(Duration::from_millis(50));
            x + 5
        })
    });

    assert_eq!(chained.await, Ok(15));
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn awaiting_and_waiting_agree() {
    let deferred = Deferred::spawn(&ThreadPerTask, || "same".to_string());
    let awaited = deferred.clone().await;
    assert_eq!(awaited, deferred.wait());
}

#[tokio::test]
async fn settler_wakes_a_pending_await() {
    let (settler, deferred) = Deferred::pending();
    let waiter = tokio::spawn(deferred);

    tokio::task::yield_now().await;
    settler.settle(3_u16);

    assert_eq!(waiter.await.unwrap(), Ok(3));
}

#[tokio::test]
async fn dropped_settler_resolves_the_await() {
    let (settler, deferred) = Deferred::<u16>::pending();
    let waiter = tokio::spawn(deferred);
    drop(settler);
    assert_eq!(waiter.await.unwrap(), Err(Fault::Abandoned));
}

#[tokio::test]
async fn from_future_settles_with_the_output() {
    let deferred = Deferred::from_future(&Handle::current(), async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        vec![1, 2, 3]
    });
    let summed = deferred.map(|values| values.iter().sum::<i32>());
    assert_eq!(summed.await, Ok(6));
}

#[test]
fn from_future_can_be_observed_outside_the_runtime() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let deferred = Deferred::from_future(runtime.handle(), async { 'k' });
    assert_eq!(deferred.wait_timeout(Duration::from_secs(5)), Some(Ok('k')));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn join_many_deferred_values() {
    let values: Vec<Deferred<usize>> = (0..4)
        .map(|index| Deferred::spawn(&ThreadPerTask, move || index * index))
        .collect();
    let settled = futures::future::join_all(values).await;
    assert_eq!(settled, vec![Ok(0), Ok(1), Ok(4), Ok(9)]);
}

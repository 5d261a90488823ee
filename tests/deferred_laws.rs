#![cfg(feature = "deferred")]
//! Property-based tests for `Deferred<A>` laws.
//!
//! Deferred values are compared through their settlements (`wait()`).
//!
//! - **Monad Laws**: left identity, right identity, associativity
//! - **Idempotence**: observing a settled value repeatedly yields equal results
//! - **Fault propagation**: a fault passes through every later stage unchanged

use carrier::deferred::{Deferred, Fault, Inline, ThreadPerTask};
use carrier::typeclass::Chainable;
use proptest::prelude::*;

fn increment_later(n: i32) -> Deferred<i64> {
    Deferred::spawn(&ThreadPerTask, move || i64::from(n) + 1)
}

fn render(n: i64) -> Deferred<String> {
    Deferred::spawn(&Inline, move || format!("#{n}"))
}

fn deferred_strategy() -> impl Strategy<Value = Deferred<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Deferred::lift),
        any::<i32>().prop_map(|n| Deferred::spawn(&ThreadPerTask, move || n)),
        Just(Deferred::faulted(Fault::failed("seeded"))),
    ]
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Left Identity: lift(a).bind(f) == f(a)
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        let left = <Deferred<i32> as Chainable>::lift(value).bind(increment_later);
        prop_assert_eq!(left.wait(), increment_later(value).wait());
    }

    /// Right Identity: m.bind(lift) == m
    #[test]
    fn prop_right_identity(container in deferred_strategy()) {
        let bound = container.clone().bind(Deferred::lift);
        prop_assert_eq!(bound.wait(), container.wait());
    }

    /// Associativity: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[test]
    fn prop_associativity(container in deferred_strategy()) {
        let left = container.clone().bind(increment_later).bind(render);
        let right = container.bind(|x| increment_later(x).bind(render));
        prop_assert_eq!(left.wait(), right.wait());
    }
}

// =============================================================================
// Observation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_observation_is_idempotent(container in deferred_strategy()) {
        let first = container.wait();
        let second = container.wait();
        let peeked = container.try_get();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(peeked, Some(first));
    }

    #[test]
    fn prop_map_is_bind_then_lift(value in any::<i32>()) {
        let mapped = Deferred::lift(value).map(i64::from);
        let bound = Deferred::lift(value).bind(|n| Deferred::lift(i64::from(n)));
        prop_assert_eq!(mapped.wait(), bound.wait());
    }

    #[test]
    fn prop_fault_passes_through(message in "[a-z ]{1,16}", depth in 0usize..8) {
        let mut chain: Deferred<i32> = Deferred::faulted(Fault::failed(&message));
        for _ in 0..depth {
            chain = chain.map(|n| n.wrapping_add(1));
        }
        prop_assert_eq!(chain.wait(), Err(Fault::failed(message)));
    }
}

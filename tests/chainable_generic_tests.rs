#![cfg(all(feature = "control", feature = "deferred"))]
//! Generic code written once against `Chainable`, run on every container.

use carrier::control::{Optional, Outcome};
use carrier::deferred::{Deferred, Fault, ThreadPerTask};
use carrier::typeclass::{Chainable, Pure};
use rstest::rstest;

/// Doubles the payload, then formats it.
fn double_and_render<M>(container: M) -> M::WithType<String>
where
    M: Chainable<Inner = i32>,
{
    container.bind(|n| M::lift(format!("<{}>", n * 2)))
}

fn render<M>(container: M) -> M::WithType<String>
where
    M: Chainable<Inner = i32>,
{
    container.map(|n| n.to_string())
}

/// Sum of two payloads, the second derived from the first.
fn sum_with_successor<M, F>(container: M, successor: F) -> M::WithType<i32>
where
    M: Chainable<Inner = i32>,
    F: FnOnce(i32) -> M::WithType<i32> + Send + 'static,
{
    container.bind_with(successor, |x, y| x + y)
}

fn lifted<M: Pure<Inner = i32>>(value: i32) -> M {
    M::pure(value)
}

#[rstest]
fn generic_chain_on_optional() {
    assert_eq!(
        double_and_render(Optional::present(21)),
        Optional::present("<42>".to_string())
    );
    assert_eq!(double_and_render(Optional::<i32>::empty()), Optional::empty());
}

#[rstest]
fn generic_chain_on_outcome() {
    assert_eq!(
        double_and_render(Outcome::<&str, i32>::success(5)),
        Outcome::success("<10>".to_string())
    );
    assert_eq!(
        double_and_render(Outcome::<&str, i32>::failure("bad")),
        Outcome::failure("bad")
    );
}

#[rstest]
fn generic_chain_on_deferred() {
    let deferred = Deferred::spawn(&ThreadPerTask, || 4);
    assert_eq!(double_and_render(deferred).wait(), Ok("<8>".to_string()));
}

#[rstest]
fn generic_map_agrees_with_bind() {
    assert_eq!(render(Optional::present(7)), Optional::present("7".to_string()));
    assert_eq!(
        render(Outcome::<(), i32>::failure(())),
        Outcome::<(), String>::failure(())
    );
    assert_eq!(render(Deferred::lift(7)).wait(), Ok("7".to_string()));
}

#[rstest]
fn generic_bind_with_on_every_container() {
    let optional = sum_with_successor(Optional::present(1), |x| Optional::present(x + 1));
    let outcome = sum_with_successor(Outcome::<String, i32>::success(1), |x| {
        Outcome::success(x + 1)
    });
    let deferred = sum_with_successor(Deferred::lift(1), |x| Deferred::lift(x + 1));

    assert_eq!(optional, Optional::present(3));
    assert_eq!(outcome, Outcome::success(3));
    assert_eq!(deferred.wait(), Ok(3));
}

#[rstest]
fn then_keeps_the_first_effect() {
    let skipped = Optional::<i32>::empty().then(Optional::present("next"));
    assert_eq!(skipped, Optional::empty());

    let faulted = Deferred::<i32>::faulted(Fault::Abandoned).then(Deferred::lift("next"));
    assert_eq!(faulted.wait(), Err(Fault::Abandoned));

    let followed = Outcome::<(), i32>::success(1).then(Outcome::success('n'));
    assert_eq!(followed, Outcome::success('n'));
}

#[rstest]
fn pure_is_chosen_by_the_expected_type() {
    assert_eq!(lifted::<Optional<i32>>(3), Optional::present(3));
    assert_eq!(lifted::<Outcome<String, i32>>(3), Outcome::success(3));
    assert_eq!(lifted::<Deferred<i32>>(3).wait(), Ok(3));
}

//! Stack-safe dispatch of continuations.
//!
//! Settling a cell runs its continuations, which settle the next cell, which
//! runs *its* continuations, and so on down a chain. Run naively that nests
//! one stack frame group per stage. Instead, the first dispatch on a thread
//! becomes the drain loop and every dispatch made while it runs is queued on
//! that thread, so a chain of any length settles in constant stack depth.
//!
//! A thread blocked in `wait` while its own drain loop is active helps drain
//! the queue (see [`run_one`]); otherwise a continuation that waits on a value
//! settled by a queued task would never return.

use std::cell::RefCell;
use std::collections::VecDeque;

type Task = Box<dyn FnOnce()>;

thread_local! {
    static QUEUE: RefCell<Option<VecDeque<Task>>> = const { RefCell::new(None) };
}

/// Runs `task` now, or after the tasks ahead of it when this thread is
/// already draining.
pub(crate) fn dispatch(task: Task) {
    let Ok(draining) = QUEUE.try_with(|queue| queue.borrow().is_some()) else {
        // Thread-local storage is being torn down.
        task();
        return;
    };

    if draining {
        QUEUE.with(|queue| {
            if let Some(pending) = queue.borrow_mut().as_mut() {
                pending.push_back(task);
            }
        });
        return;
    }

    QUEUE.with(|queue| *queue.borrow_mut() = Some(VecDeque::new()));
    let _drain = DrainGuard;
    task();
    while run_one() {}
}

/// Runs the next queued task of this thread. Returns `false` when there is
/// none.
pub(crate) fn run_one() -> bool {
    let next = QUEUE
        .try_with(|queue| queue.borrow_mut().as_mut().and_then(VecDeque::pop_front))
        .ok()
        .flatten();
    next.is_some_and(|task| {
        task();
        true
    })
}

/// Ends the drain loop, also when a task unwinds.
struct DrainGuard;

impl Drop for DrainGuard {
    fn drop(&mut self) {
        // Leftover tasks are dropped outside the borrow; dropping one may
        // dispatch again.
        let leftover = QUEUE.try_with(|queue| queue.borrow_mut().take()).ok().flatten();
        drop(leftover);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn outermost_dispatch_runs_immediately() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::clone(&seen);
        dispatch(Box::new(move || captured.borrow_mut().push(1)));
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[rstest]
    fn nested_dispatch_runs_after_the_current_task() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let outer = Rc::clone(&seen);
        dispatch(Box::new(move || {
            let inner = Rc::clone(&outer);
            dispatch(Box::new(move || inner.borrow_mut().push("inner")));
            outer.borrow_mut().push("outer");
        }));
        assert_eq!(*seen.borrow(), vec!["outer", "inner"]);
    }

    #[rstest]
    fn deep_nesting_uses_constant_stack() {
        fn step(remaining: u32, total: Rc<RefCell<u32>>) {
            *total.borrow_mut() += 1;
            if remaining > 0 {
                dispatch(Box::new(move || step(remaining - 1, total)));
            }
        }

        let total = Rc::new(RefCell::new(0));
        let captured = Rc::clone(&total);
        dispatch(Box::new(move || step(200_000, captured)));
        assert_eq!(*total.borrow(), 200_001);
    }

    #[rstest]
    fn run_one_outside_a_drain_is_a_no_op() {
        assert!(!run_one());
    }
}

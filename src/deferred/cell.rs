//! The settle-once cell behind every [`Deferred`](super::Deferred).
//!
//! A cell is `Pending` until exactly one writer settles it, then `Settled`
//! forever. While pending it collects continuations (registered by `bind`)
//! and wakers (registered by `poll`). Settling swaps the state under the lock,
//! wakes blocked readers, then runs continuations and wakers with the lock
//! released, so a continuation may freely register on this or any other cell.
//!
//! Continuations go through `dispatch`: settling one cell
//! from inside another cell's continuation queues the follow-up work instead
//! of nesting it, so a chain settles in constant stack depth however long it
//! is.

use std::task::{Context, Poll, Waker};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use smallvec::SmallVec;

use super::dispatch;
use super::fault::Fault;

/// What a cell settles with.
pub(crate) type Settlement<A> = Result<A, Fault>;

/// A callback run once with the settlement.
pub(crate) type Continuation<A> = Box<dyn FnOnce(Settlement<A>) + Send + 'static>;

enum State<A> {
    Pending {
        continuations: SmallVec<[Continuation<A>; 1]>,
        wakers: SmallVec<[Waker; 1]>,
    },
    Settled(Settlement<A>),
}

pub(crate) struct SettleCell<A> {
    state: Mutex<State<A>>,
    settled: Condvar,
}

impl<A: Clone + 'static> SettleCell<A> {
    pub(crate) fn pending() -> Self {
        Self {
            state: Mutex::new(State::Pending {
                continuations: SmallVec::new(),
                wakers: SmallVec::new(),
            }),
            settled: Condvar::new(),
        }
    }

    pub(crate) fn settled(settlement: Settlement<A>) -> Self {
        Self {
            state: Mutex::new(State::Settled(settlement)),
            settled: Condvar::new(),
        }
    }

    /// Settles the cell. Returns `false` if it was already settled, in which
    /// case `settlement` is discarded.
    pub(crate) fn settle(&self, settlement: Settlement<A>) -> bool {
        let (continuations, wakers) = {
            let mut state = self.state.lock();
            let State::Pending {
                continuations,
                wakers,
            } = &mut *state
            else {
                return false;
            };
            let taken = (std::mem::take(continuations), std::mem::take(wakers));
            *state = State::Settled(settlement.clone());
            taken
        };
        self.settled.notify_all();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            faulted = settlement.is_err(),
            continuations = continuations.len(),
            "deferred settled"
        );

        for waker in wakers {
            waker.wake();
        }
        if !continuations.is_empty() {
            dispatch::dispatch(Box::new(move || run_all(continuations, settlement)));
        }
        true
    }

    /// Runs `continuation` once the cell settles; on the calling thread if it
    /// already has (after the work already queued there, if any).
    pub(crate) fn register(&self, continuation: Continuation<A>) {
        let settlement = {
            let mut state = self.state.lock();
            match &mut *state {
                State::Pending { continuations, .. } => {
                    continuations.push(continuation);
                    #[cfg(feature = "tracing")]
                    tracing::trace!(pending = continuations.len(), "continuation registered");
                    return;
                }
                State::Settled(settlement) => settlement.clone(),
            }
        };
        dispatch::dispatch(Box::new(move || continuation(settlement)));
    }

    pub(crate) fn poll_settlement(&self, context: &Context<'_>) -> Poll<Settlement<A>> {
        let mut state = self.state.lock();
        match &mut *state {
            State::Settled(settlement) => Poll::Ready(settlement.clone()),
            State::Pending { wakers, .. } => {
                if !wakers.iter().any(|waker| waker.will_wake(context.waker())) {
                    wakers.push(context.waker().clone());
                }
                Poll::Pending
            }
        }
    }

    /// Blocks until settled. Continuations queued on this thread run first;
    /// one of them may be what settles the cell.
    pub(crate) fn wait(&self) -> Settlement<A> {
        if let Some(settlement) = self.help_settle() {
            return settlement;
        }
        let mut state = self.state.lock();
        loop {
            if let State::Settled(settlement) = &*state {
                return settlement.clone();
            }
            self.settled.wait(&mut state);
        }
    }

    pub(crate) fn wait_for(&self, timeout: Duration) -> Option<Settlement<A>> {
        let deadline = Instant::now().checked_add(timeout);
        if let Some(settlement) = self.help_settle() {
            return Some(settlement);
        }
        let mut state = self.state.lock();
        loop {
            if let State::Settled(settlement) = &*state {
                return Some(settlement.clone());
            }
            match deadline {
                Some(deadline) => {
                    if self.settled.wait_until(&mut state, deadline).timed_out() {
                        return match &*state {
                            State::Settled(settlement) => Some(settlement.clone()),
                            State::Pending { .. } => None,
                        };
                    }
                }
                // Too far in the future to represent: wait without a deadline.
                None => self.settled.wait(&mut state),
            }
        }
    }

    /// Drains this thread's queued continuations until the cell settles or
    /// the queue is empty.
    fn help_settle(&self) -> Option<Settlement<A>> {
        loop {
            if let Some(settlement) = self.try_get() {
                return Some(settlement);
            }
            if !dispatch::run_one() {
                return None;
            }
        }
    }

    pub(crate) fn try_get(&self) -> Option<Settlement<A>> {
        match &*self.state.lock() {
            State::Settled(settlement) => Some(settlement.clone()),
            State::Pending { .. } => None,
        }
    }

    pub(crate) fn is_settled(&self) -> bool {
        matches!(&*self.state.lock(), State::Settled(_))
    }
}

/// Hands each continuation its own copy of the settlement; the last one gets
/// the original.
fn run_all<A: Clone>(continuations: SmallVec<[Continuation<A>; 1]>, settlement: Settlement<A>) {
    let mut remaining = continuations.into_iter().peekable();
    while let Some(continuation) = remaining.next() {
        if remaining.peek().is_some() {
            continuation(settlement.clone());
        } else {
            continuation(settlement);
            return;
        }
    }
}

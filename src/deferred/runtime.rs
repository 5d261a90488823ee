//! Tokio interop for [`Deferred`].
//!
//! `Deferred` already implements [`Future`], so it can be awaited from any
//! async context. This module covers the other direction: running deferred
//! work on a tokio runtime ([`TokioExecutor`]) and turning a future into a
//! `Deferred` ([`Deferred::from_future`]).

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::runtime::{Handle, TryCurrentError};

use super::executor::{Executor, Job};
use super::fault::Fault;
use super::handle::Deferred;

/// Runs jobs on tokio's blocking thread pool.
///
/// Deferred work is ordinary synchronous code that may sleep or block, so it
/// goes through [`Handle::spawn_blocking`] rather than the async workers.
///
/// # Examples
///
/// ```rust
/// use carrier::deferred::{Deferred, TokioExecutor};
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let executor = TokioExecutor::new(runtime.handle().clone());
///
/// let value = Deferred::spawn(&executor, || 6 * 7);
/// assert_eq!(runtime.block_on(value), Ok(42));
/// ```
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// An executor bound to `handle`'s runtime.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// An executor bound to the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }

    /// The runtime handle jobs are spawned on.
    #[must_use]
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, job: Job) {
        // The JoinHandle is detached; a job that never runs drops its settler.
        drop(self.handle.spawn_blocking(job));
    }
}

impl<A: Clone + Send + 'static> Deferred<A> {
    /// Drives `future` on `handle`'s runtime and settles with its output.
    ///
    /// A panic while polling `future` settles with [`Fault::Panicked`]. If the
    /// runtime shuts down before the future completes, the result is
    /// [`Fault::Abandoned`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::deferred::Deferred;
    ///
    /// let runtime = tokio::runtime::Runtime::new().unwrap();
    /// let deferred = Deferred::from_future(runtime.handle(), async { "ready" });
    /// assert_eq!(deferred.wait(), Ok("ready"));
    /// ```
    pub fn from_future<F>(handle: &Handle, future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let (settler, deferred) = Self::pending();
        drop(handle.spawn(async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => settler.settle(value),
                Err(payload) => settler.fail(Fault::from_panic(payload.as_ref())),
            }
        }));
        deferred
    }
}

//! Substrates that run deferred work.
//!
//! A [`Deferred`](super::Deferred) does not care where its work runs; it only
//! needs something that accepts a [`Job`] and eventually calls it. Anything
//! implementing [`Executor`] qualifies:
//!
//! - [`ThreadPerTask`]: a fresh OS thread per job
//! - [`Inline`]: runs the job on the calling thread before returning
//! - `rayon::ThreadPool` and [`RayonGlobal`] (feature `rayon`)
//! - `TokioExecutor` (feature `async`), via `spawn_blocking`
//!
//! If an executor drops a job without running it, the write end captured by
//! the job is dropped too and the `Deferred` settles with
//! [`Fault::Abandoned`](super::Fault::Abandoned).

use std::sync::Arc;
use std::thread;

/// A unit of work handed to an [`Executor`].
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that runs [`Job`]s.
///
/// # Examples
///
/// ```rust
/// use carrier::deferred::{Deferred, Executor, Job};
///
/// struct Immediate;
///
/// impl Executor for Immediate {
///     fn execute(&self, job: Job) {
///         job();
///     }
/// }
///
/// let value = Deferred::spawn(&Immediate, || 6 * 7);
/// assert_eq!(value.wait(), Ok(42));
/// ```
pub trait Executor {
    /// Schedules `job`. Must not block waiting for `job` to finish.
    fn execute(&self, job: Job);
}

impl<E: Executor + ?Sized> Executor for &E {
    #[inline]
    fn execute(&self, job: Job) {
        (**self).execute(job);
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    #[inline]
    fn execute(&self, job: Job) {
        (**self).execute(job);
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    #[inline]
    fn execute(&self, job: Job) {
        (**self).execute(job);
    }
}

/// Runs every job on its own, newly spawned OS thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadPerTask;

impl ThreadPerTask {
    const THREAD_NAME: &'static str = "carrier-worker";
}

impl Executor for ThreadPerTask {
    fn execute(&self, job: Job) {
        // On spawn failure the job is dropped, which abandons its Deferred.
        let _ = thread::Builder::new()
            .name(Self::THREAD_NAME.to_string())
            .spawn(job);
    }
}

/// Runs every job immediately on the calling thread.
///
/// `Deferred::spawn(&Inline, work)` returns an already settled value; useful
/// for deterministic tests of chain logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inline;

impl Executor for Inline {
    #[inline]
    fn execute(&self, job: Job) {
        job();
    }
}

#[cfg(feature = "rayon")]
impl Executor for rayon::ThreadPool {
    #[inline]
    fn execute(&self, job: Job) {
        self.spawn(job);
    }
}

/// Runs jobs on rayon's global thread pool.
#[cfg(feature = "rayon")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayonGlobal;

#[cfg(feature = "rayon")]
impl Executor for RayonGlobal {
    #[inline]
    fn execute(&self, job: Job) {
        rayon::spawn(job);
    }
}

//! Deferred values: computations whose result becomes available later.
//!
//! A [`Deferred<A>`] is the read side of a settle-once cell; a [`Settler<A>`]
//! is the write side. Work is handed to an [`Executor`], which decides where it
//! runs. Chaining with `bind` is non-blocking and strictly sequential: the
//! function bound to stage *n* runs only after stage *n* settles, so total
//! latency is the sum of the stages.
//!
//! Settlement happens exactly once. Every observer (`wait`, `try_get`,
//! `.await`, a bound continuation) sees the same value, or the same
//! [`Fault`].
//!
//! # Examples
//!
//! ```rust
//! use carrier::deferred::{Deferred, ThreadPerTask};
//! use std::time::{Duration, Instant};
//!
//! let started = Instant::now();
//! let total = Deferred::spawn(&ThreadPerTask, || {
//!     std::thread::sleep(Duration::from_millis(20));
//!     1
//! })
//! .bind(|first| {
//!     Deferred::spawn(&ThreadPerTask, move || {
//!         std::thread::sleep(Duration::from_millis(20));
//!         first + 1
//!     })
//! });
//!
//! assert_eq!(total.wait(), Ok(2));
//! assert!(started.elapsed() >= Duration::from_millis(40));
//! ```

mod cell;
mod dispatch;
mod executor;
mod fault;
mod handle;
#[cfg(feature = "async")]
mod runtime;
mod settler;

pub use executor::{Executor, Inline, Job, ThreadPerTask};
#[cfg(feature = "rayon")]
pub use executor::RayonGlobal;
pub use fault::Fault;
pub use handle::Deferred;
#[cfg(feature = "async")]
pub use runtime::TokioExecutor;
pub use settler::Settler;

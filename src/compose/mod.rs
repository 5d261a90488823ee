//! Comprehension syntax over the containers.
//!
//! - [`chain!`](crate::chain): flat, do-notation style chaining of `bind`
//!
//! # Examples
//!
//! ```rust
//! use carrier::chain;
//! use carrier::deferred::{Deferred, ThreadPerTask};
//!
//! let total: Deferred<i32> = chain! {
//!     x <= Deferred::spawn(&ThreadPerTask, || 20);
//!     y <= Deferred::spawn(&ThreadPerTask, move || x + 1);
//!     yield x + y
//! };
//! assert_eq!(total.wait(), Ok(41));
//! ```

mod chain_macro;

//! Synchronous effect containers.
//!
//! - [`Optional`]: a value, or nothing
//! - [`Outcome`]: a success value, or a typed failure
//!
//! Both are plain immutable values. `bind` and `map` complete immediately and
//! never mutate the receiver; they consume it and produce a new container.
//!
//! # Examples
//!
//! ## Short-circuiting on absence
//!
//! ```rust
//! use carrier::control::Optional;
//!
//! let chain = Optional::<i32>::empty()
//!     .map(|n| n + 1)
//!     .bind(|n| Optional::present(n * 2));
//! assert_eq!(chain, Optional::empty());
//! ```
//!
//! ## Keeping the first failure
//!
//! ```rust
//! use carrier::control::Outcome;
//!
//! let chain: Outcome<&str, i32> = Outcome::success(1)
//!     .bind(|_: i32| Outcome::<&str, i32>::failure("first"))
//!     .bind(|_| Outcome::failure("second"));
//! assert_eq!(chain, Outcome::failure("first"));
//! ```

mod optional;
mod outcome;

pub use optional::Optional;
pub use outcome::Outcome;

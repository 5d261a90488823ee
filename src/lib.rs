//! # carrier
//!
//! Composable "effectful value" containers for Rust.
//!
//! ## Overview
//!
//! The crate provides three independent containers that share one chaining
//! contract:
//!
//! - **[`Optional<A>`](control::Optional)**: a value, or nothing
//! - **[`Outcome<L, R>`](control::Outcome)**: a success value, or a typed failure
//! - **[`Deferred<A>`](deferred::Deferred)**: a value that becomes available later
//!
//! Each container exposes a lifting constructor, `bind` (sequencing), `map`
//! (transformation) and `bind_with` (the three-argument bind used by
//! comprehensions). The [`Chainable`](typeclass::Chainable) trait captures the
//! shared shape, and the [`chain!`] macro offers do-notation over any of them.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Chainable`, `Pure`, `Zero`
//! - `control`: `Optional` and `Outcome`
//! - `deferred`: `Deferred`, `Settler`, executors
//! - `compose`: the `chain!` macro
//! - `async`: tokio interop for `Deferred`
//! - `rayon`: run `Deferred` work on a rayon thread pool
//! - `serde`: serde support for `Optional` and `Outcome`
//! - `tracing`: trace-level lifecycle events for `Deferred`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use carrier::prelude::*;
//!
//! fn divide(dividend: f64, divisor: f64) -> Optional<f64> {
//!     if divisor == 0.0 {
//!         Optional::empty()
//!     } else {
//!         Optional::present(dividend / divisor)
//!     }
//! }
//!
//! let product = divide(3.0, 2.0).bind(|quotient| divide(9.0, 3.0).map(move |x| quotient * x));
//! assert_eq!(product, Optional::present(4.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use carrier::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "deferred")]
    pub use crate::deferred::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "deferred")]
pub mod deferred;

#[cfg(feature = "compose")]
pub mod compose;

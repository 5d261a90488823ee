//! Type class traits shared by the containers.
//!
//! - [`TypeConstructor`]: GAT-based higher-kinded type emulation
//! - [`Chainable`]: lift, bind, map and the three-argument `bind_with`
//! - [`Pure`]: lifting driven by the expected type
//! - [`Zero`]: the payload-free state used by guards (`Optional` only)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. This module
//! uses Generic Associated Types so that `Chainable::bind` can name "the same
//! container holding a `B`" once, for every container.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Optional;
//! use carrier::typeclass::Chainable;
//!
//! fn half<M: Chainable<Inner = i32>>(container: M) -> M::WithType<i32> {
//!     container.map(|n| n / 2)
//! }
//!
//! assert_eq!(half(Optional::present(10)), Optional::present(5));
//! assert_eq!(half(Optional::<i32>::empty()), Optional::empty());
//! ```

mod chainable;
mod higher;
mod pure;
mod zero;

pub use chainable::Chainable;
pub use higher::TypeConstructor;
pub use pure::Pure;
pub use zero::Zero;

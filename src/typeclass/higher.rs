//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` directly.
//! [`TypeConstructor`] names the payload a container is currently applied to
//! and lets generic code talk about "the same container, holding a `B`".
//! This is what allows [`Chainable::bind`](super::Chainable::bind) to be written
//! once for `Optional`, `Outcome` and `Deferred`.
//!
//! # Example
//!
//! ```rust
//! use carrier::control::Optional;
//! use carrier::typeclass::TypeConstructor;
//!
//! fn reshape<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Optional<String> = reshape(Optional::present(42));
//! assert_eq!(empty, Optional::Empty);
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some payload type,
/// for example `Optional<A>` or `Outcome<L, R>` (applied to `R`, with `L`
/// fixed).
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type this constructor is currently applied to.
    ///
    /// For `Optional<i32>` this is `i32`; for `Outcome<String, i32>` it is
    /// `i32`.
    type Inner;

    /// The same type constructor applied to a different payload `B`.
    ///
    /// The bound lets `WithType` be applied again.
    type WithType<B>: TypeConstructor<Inner = B>;
}

//! Lifting into a container whose type is fixed by context.
//!
//! [`Chainable::lift`](super::Chainable::lift) is called on a container type
//! and produces its `WithType<B>`. When only the *expected* type is known,
//! as inside a `chain!` block ending in `yield`, [`Pure::pure`] lets the
//! compiler pick the container from the annotation instead.
//!
//! ```rust
//! use carrier::control::Optional;
//! use carrier::typeclass::Pure;
//!
//! let value: Optional<i32> = Pure::pure(7);
//! assert_eq!(value, Optional::present(7));
//! ```

use super::higher::TypeConstructor;

/// Wraps a bare value into `Self`.
///
/// Implementations must agree with [`Chainable::lift`](super::Chainable::lift):
/// `Self::pure(a)` is the container `lift(a)` returns.
pub trait Pure: TypeConstructor {
    /// Wraps `value` into the container's normal state.
    fn pure(value: Self::Inner) -> Self;
}

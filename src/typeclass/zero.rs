//! Containers with a payload-free "no result" state.
//!
//! [`Zero`] backs filtering and comprehension guards. Only `Optional`
//! implements it: an `Outcome` has no failure value to report for a rejected
//! predicate, and a `Deferred` always settles with something. Using a guard
//! on either of them is therefore a compile error rather than a silent
//! default.
//!
//! ```rust
//! use carrier::control::Optional;
//! use carrier::typeclass::Zero;
//!
//! let nothing: Optional<i32> = Zero::zero();
//! assert!(nothing.is_empty());
//! ```

/// A container value that carries no payload.
///
/// # Laws
///
/// `Self::zero()` annihilates bind from the left: `zero().bind(f) == zero()`.
pub trait Zero {
    /// Returns the empty container.
    fn zero() -> Self;
}

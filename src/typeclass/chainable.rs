//! Chainable type class - sequencing computations within an effect.
//!
//! [`Chainable`] is the contract shared by every container in this crate:
//! a lifting constructor, `bind` for sequencing, `map` for transformation and
//! `bind_with`, the three-argument bind that comprehension chains
//! (`x <= c1; y <= c2; yield f(x, y)`) reduce to.
//!
//! Each container keeps its own effect: `Optional` short-circuits on absence,
//! `Outcome` on failure, and `Deferred` waits for settlement (or propagates a
//! fault).
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::lift(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::lift) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! Generic code written against `Chainable` works for every container:
//!
//! ```rust
//! use carrier::control::{Optional, Outcome};
//! use carrier::typeclass::Chainable;
//!
//! fn doubled<M: Chainable<Inner = i32>>(container: M) -> M::WithType<i32> {
//!     container.map(|n| n * 2)
//! }
//!
//! assert_eq!(doubled(Optional::present(21)), Optional::present(42));
//! assert_eq!(
//!     doubled(Outcome::<String, i32>::success(4)),
//!     Outcome::success(8)
//! );
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that support dependent sequencing.
///
/// The closure bounds (`Send + 'static`) are the union of what the three
/// containers need: `Deferred` may run a continuation on another thread after
/// the caller has returned. The inherent methods on `Optional` and `Outcome`
/// carry no such bounds; use them directly when the closures borrow locals.
///
/// # Laws
///
/// See the [module documentation](self).
pub trait Chainable: TypeConstructor + Sized {
    /// Wraps a bare value into the container's normal state.
    ///
    /// `present` for `Optional`, `success` for `Outcome`, an already settled
    /// `Deferred`.
    fn lift<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + Send + 'static;

    /// Feeds the payload into `function`, which produces the next container.
    ///
    /// Short-circuits on the container's absent/failed state without calling
    /// `function`. The result of `function` is returned unchanged, never
    /// wrapped twice.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + Send + 'static;

    /// Transforms the payload, keeping the effect.
    ///
    /// Equivalent to `self.bind(|a| Self::lift(function(a)))`.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(Self::Inner) -> B + Send + 'static;

    /// Binds, then combines the outer and inner payloads.
    ///
    /// Equivalent to `self.bind(|a| function(a.clone()).map(|b| combine(a, b)))`.
    fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Self::WithType<C>
    where
        Self::Inner: Clone + Send + 'static,
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + Send + 'static,
        G: FnOnce(Self::Inner, B) -> C + Send + 'static;

    /// Sequences two containers, discarding the first payload.
    ///
    /// The first container's effect still applies: an empty/failed/faulted
    /// `self` short-circuits and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        B: Clone + Send + 'static,
        Self::WithType<B>: Send + 'static,
    {
        self.bind(move |_| next)
    }
}

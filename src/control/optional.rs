//! Optional type - a value, or nothing.
//!
//! This module provides the `Optional<A>` type, which is either
//! `Present(A)` or `Empty`. Absence carries no information: a chain of
//! `Optional` computations can tell *whether* it produced a value, never *why*
//! it did not.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Optional;
//!
//! fn divide(dividend: f64, divisor: f64) -> Optional<f64> {
//!     if divisor == 0.0 {
//!         Optional::empty()
//!     } else {
//!         Optional::present(dividend / divisor)
//!     }
//! }
//!
//! fn square_root(x: f64) -> Optional<f64> {
//!     if x < 0.0 { Optional::empty() } else { Optional::present(x.sqrt()) }
//! }
//!
//! let product = divide(3.0, 2.0).bind(|quotient| {
//!     square_root(9.0).bind(move |root| Optional::present(quotient * root))
//! });
//!
//! let message = product.fold(|| "nothing".to_string(), |value| value.to_string());
//! assert_eq!(message, "4.5");
//! ```

use std::fmt;

use crate::typeclass::{Chainable, Pure, TypeConstructor, Zero};

/// A value that may be absent.
///
/// Exactly one variant is active. `Empty` carries no payload.
///
/// The sanctioned way to get a value out is [`fold`](Self::fold) (or an
/// exhaustive `match`), so both cases are always handled. There is no
/// `unwrap`.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Optional;
///
/// let present = Optional::present(5);
/// assert_eq!(present.map(|n| n * 2), Optional::present(10));
///
/// let empty: Optional<i32> = Optional::empty();
/// assert_eq!(empty.map(|n| n * 2), Optional::empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<A> {
    /// No value.
    Empty,
    /// A value of type `A`.
    Present(A),
}

impl<A> Optional<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value`.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// The absent-value marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Optional;
    ///
    /// let nothing: Optional<String> = Optional::empty();
    /// assert!(nothing.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the payload: `&Optional<A>` to `Optional<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&A> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Eliminates the `Optional` by running exactly one of two functions.
    ///
    /// This is the single observation primitive; every other operation on
    /// `Optional` can be expressed through it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Optional;
    ///
    /// let present = Optional::present(3);
    /// assert_eq!(present.fold(|| 0, |n| n + 1), 4);
    ///
    /// let empty: Optional<i32> = Optional::empty();
    /// assert_eq!(empty.fold(|| 0, |n| n + 1), 0);
    /// ```
    #[inline]
    pub fn fold<U, E, P>(self, on_empty: E, on_present: P) -> U
    where
        E: FnOnce() -> U,
        P: FnOnce(A) -> U,
    {
        match self {
            Self::Empty => on_empty(),
            Self::Present(value) => on_present(value),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Feeds the value into `function`; `Empty` short-circuits.
    ///
    /// `function` is not called when `self` is empty. Its result is returned
    /// as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Optional;
    ///
    /// let positive = |n: i32| if n > 0 { Optional::present(n) } else { Optional::empty() };
    ///
    /// assert_eq!(Optional::present(4).bind(positive), Optional::present(4));
    /// assert_eq!(Optional::present(-4).bind(positive), Optional::empty());
    /// assert_eq!(Optional::empty().bind(positive), Optional::empty());
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.fold(Optional::empty, function)
    }

    /// Transforms the value, keeping absence.
    ///
    /// Defined as `bind(|a| present(function(a)))`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.bind(|value| Optional::present(function(value)))
    }

    /// Keeps the value only if `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Optional;
    ///
    /// assert_eq!(Optional::present(6.0).filter(|y| 5.0 < *y), Optional::present(6.0));
    /// assert_eq!(Optional::present(4.5).filter(|y| 5.0 < *y), Optional::empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.bind(|value| {
            if predicate(&value) {
                Self::present(value)
            } else {
                Self::empty()
            }
        })
    }

    /// Binds, then combines the outer and the inner value.
    ///
    /// This is what a two-generator comprehension reduces to:
    /// `x <= self; y <= function(x); yield combine(x, y)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Optional;
    ///
    /// let result = Optional::present(2).bind_with(
    ///     |x| Optional::present(x * 10),
    ///     |x, y| x + y,
    /// );
    /// assert_eq!(result, Optional::present(22));
    /// ```
    #[inline]
    pub fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Optional<C>
    where
        A: Clone,
        F: FnOnce(A) -> Optional<B>,
        G: FnOnce(A, B) -> C,
    {
        self.bind(|outer| function(outer.clone()).map(|inner| combine(outer, inner)))
    }

    /// Recovers from absence with an alternative computation.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Empty => function(),
            present @ Self::Present(_) => present,
        }
    }

    /// Pairs two values; empty if either side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Optional;
    ///
    /// assert_eq!(Optional::present(1).zip(Optional::present("a")), Optional::present((1, "a")));
    /// assert_eq!(Optional::present(1).zip(Optional::<&str>::empty()), Optional::empty());
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Optional<B>) -> Optional<(A, B)> {
        self.bind(|first| other.map(|second| (first, second)))
    }
}

// =============================================================================
// Default / Display
// =============================================================================

impl<A> Default for Optional<A> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<A: fmt::Display> fmt::Display for Optional<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "Empty"),
            Self::Present(value) => write!(formatter, "Present({value})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> Chainable for Optional<A> {
    #[inline]
    fn lift<B>(value: B) -> Optional<B>
    where
        B: Clone + Send + 'static,
    {
        Optional::present(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Optional<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> Optional<B> + Send + 'static,
    {
        Self::bind(self, function)
    }

    #[inline]
    fn map<B, F>(self, function: F) -> Optional<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::map(self, function)
    }

    #[inline]
    fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Optional<C>
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        F: FnOnce(A) -> Optional<B> + Send + 'static,
        G: FnOnce(A, B) -> C + Send + 'static,
    {
        Self::bind_with(self, function, combine)
    }
}

impl<A> Pure for Optional<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Self::present(value)
    }
}

impl<A> Zero for Optional<A> {
    #[inline]
    fn zero() -> Self {
        Self::empty()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Optional<A> {
    /// `Some(a)` becomes `Present(a)`, `None` becomes `Empty`.
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<A> From<Optional<A>> for Option<A> {
    #[inline]
    fn from(optional: Optional<A>) -> Self {
        optional.fold(|| None, Some)
    }
}

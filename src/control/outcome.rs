//! Outcome type - a success value, or a typed failure.
//!
//! `Outcome<L, R>` is either `Failure(L)` or `Success(R)`. Chaining with
//! [`bind`](Outcome::bind) runs on the success side only: the first failure
//! in evaluation order is carried through every later stage verbatim and is
//! recovered only when the chain is observed with [`fold`](Outcome::fold).
//!
//! There is deliberately no `filter`: a rejected predicate has no natural
//! failure value to report. Convert to [`Optional`](super::Optional) first,
//! or produce an explicit failure inside `bind`.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Outcome;
//!
//! fn divide(dividend: f64, divisor: f64) -> Outcome<String, f64> {
//!     if divisor == 0.0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(dividend / divisor)
//!     }
//! }
//!
//! let result = divide(3.0, 0.0).map(|quotient| quotient * 2.0);
//! let message = result.fold(|error| error, |value| value.to_string());
//! assert_eq!(message, "division by zero");
//! ```

use std::fmt;

use crate::typeclass::{Chainable, Pure, TypeConstructor};

/// A success value of type `R`, or a failure value of type `L`.
///
/// The failure type is fixed along a chain; only
/// [`map_failure`](Self::map_failure) (or [`or_else`](Self::or_else)) can
/// change it.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Outcome;
///
/// let parsed: Outcome<String, i32> = Outcome::success(21);
/// assert_eq!(parsed.map(|n| n * 2), Outcome::success(42));
///
/// let failed: Outcome<String, i32> = Outcome::failure("bad input".to_string());
/// assert_eq!(failed.map(|n| n * 2), Outcome::failure("bad input".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<L, R> {
    /// The failure variant.
    Failure(L),
    /// The success variant.
    Success(R),
}

impl<L, R> Outcome<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a failure.
    #[inline]
    pub const fn failure(error: L) -> Self {
        Self::Failure(error)
    }

    /// Builds a success.
    #[inline]
    pub const fn success(value: R) -> Self {
        Self::Success(value)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrows both sides: `&Outcome<L, R>` to `Outcome<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&L, &R> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Eliminates the `Outcome` by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::failure(404);
    /// assert_eq!(failed.fold(|code| format!("code {code}"), |body| body), "code 404");
    /// ```
    #[inline]
    pub fn fold<U, F, S>(self, on_failure: F, on_success: S) -> U
    where
        F: FnOnce(L) -> U,
        S: FnOnce(R) -> U,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Feeds the success value into `function`; a failure short-circuits.
    ///
    /// On `Failure(l)` the result is a new `Failure` carrying the same `l`,
    /// and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Outcome;
    ///
    /// let square_root = |x: f64| {
    ///     if x < 0.0 {
    ///         Outcome::failure("negative input")
    ///     } else {
    ///         Outcome::success(x.sqrt())
    ///     }
    /// };
    ///
    /// assert_eq!(Outcome::success(9.0).bind(square_root), Outcome::success(3.0));
    /// assert_eq!(Outcome::success(-1.0).bind(square_root), Outcome::failure("negative input"));
    /// assert_eq!(
    ///     Outcome::<&str, f64>::failure("earlier").bind(square_root),
    ///     Outcome::failure("earlier")
    /// );
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Outcome<L, B>
    where
        F: FnOnce(R) -> Outcome<L, B>,
    {
        self.fold(Outcome::failure, function)
    }

    /// Transforms the success value; failures pass through untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.bind(|value| Outcome::success(function(value)))
    }

    /// Binds, then combines the outer and the inner success values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Outcome;
    ///
    /// let result: Outcome<String, String> = Outcome::success(3).bind_with(
    ///     |count| Outcome::success("ab".repeat(count)),
    ///     |count, text| format!("{count}:{text}"),
    /// );
    /// assert_eq!(result, Outcome::success("3:ababab".to_string()));
    /// ```
    #[inline]
    pub fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Outcome<L, C>
    where
        R: Clone,
        F: FnOnce(R) -> Outcome<L, B>,
        G: FnOnce(R, B) -> C,
    {
        self.bind(|outer| function(outer.clone()).map(|inner| combine(outer, inner)))
    }

    /// Transforms the failure value; successes pass through untouched.
    ///
    /// This is the explicit step a chain needs to change its failure type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Outcome;
    ///
    /// let failed: Outcome<&str, i32> = Outcome::failure("oops");
    /// assert_eq!(failed.map_failure(str::len), Outcome::failure(4));
    /// ```
    #[inline]
    pub fn map_failure<M, F>(self, function: F) -> Outcome<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(function(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Recovers from a failure with an alternative computation.
    ///
    /// `function` may itself fail with a new failure type.
    #[inline]
    pub fn or_else<M, F>(self, function: F) -> Outcome<M, R>
    where
        F: FnOnce(L) -> Outcome<M, R>,
    {
        self.fold(function, Outcome::success)
    }
}

// =============================================================================
// Display
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Outcome<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(error) => write!(formatter, "Failure({error})"),
            Self::Success(value) => write!(formatter, "Success({value})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Outcome<L, R> {
    type Inner = R;
    type WithType<B> = Outcome<L, B>;
}

impl<L, R> Chainable for Outcome<L, R> {
    #[inline]
    fn lift<B>(value: B) -> Outcome<L, B>
    where
        B: Clone + Send + 'static,
    {
        Outcome::success(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Outcome<L, B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(R) -> Outcome<L, B> + Send + 'static,
    {
        Self::bind(self, function)
    }

    #[inline]
    fn map<B, F>(self, function: F) -> Outcome<L, B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(R) -> B + Send + 'static,
    {
        Self::map(self, function)
    }

    #[inline]
    fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Outcome<L, C>
    where
        R: Clone + Send + 'static,
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        F: FnOnce(R) -> Outcome<L, B> + Send + 'static,
        G: FnOnce(R, B) -> C + Send + 'static,
    {
        Self::bind_with(self, function, combine)
    }
}

impl<L, R> Pure for Outcome<L, R> {
    #[inline]
    fn pure(value: R) -> Self {
        Self::success(value)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Outcome<L, R> {
    /// `Ok(r)` becomes `Success(r)`, `Err(l)` becomes `Failure(l)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<L, R> From<Outcome<L, R>> for Result<R, L> {
    #[inline]
    fn from(outcome: Outcome<L, R>) -> Self {
        outcome.fold(Err, Ok)
    }
}

// A guard has no failure value to produce for Outcome.
static_assertions::assert_not_impl_any!(Outcome<String, i32>: crate::typeclass::Zero);

//! `chain!` macro for comprehension-style chaining.
//!
//! This module provides the [`chain!`](crate::chain) macro, which writes a
//! sequence of dependent binds as a flat block instead of nested closures.
//! It works with every container that has a `bind` method: `Optional`,
//! `Outcome` and `Deferred`.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: feeds the payload into the rest
//! - `let pattern = expression;` - Plain let binding
//! - `if condition;` - Guard: the empty container when `condition` is false
//! - `if let pattern = expression;` - Pattern guard
//! - `yield expression` - Final value, lifted with [`Pure::pure`]
//! - `expression` - Final expression (already a container)
//!
//! Guards need a payload-free failure state, which only `Optional` has. A
//! guard inside an `Outcome` or `Deferred` chain does not compile.
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not a single token in Rust, so `<=` stands in for "bind from".
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//!
//! ```rust,ignore
//! expression.bind(move |pattern| { /* rest */ })
//! ```
//!
//! Method-call syntax picks the container's inherent `bind`, so closures in an
//! `Optional` or `Outcome` chain may borrow locals; a `Deferred` chain needs
//! `Send + 'static` captures as usual.
//!
//! [`Pure::pure`]: crate::typeclass::Pure::pure

/// Comprehension-style chaining over `bind`.
///
/// # Syntax
///
/// ```text
/// chain! {
///     pattern <= container_expression;   // Bind
///     let pattern = expression;           // Plain let binding
///     if condition;                       // Guard (Optional only)
///     if let pattern = expression;        // Pattern guard (Optional only)
///     yield expression                    // Final value, lifted
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use carrier::chain;
/// use carrier::control::Optional;
///
/// fn divide(dividend: f64, divisor: f64) -> Optional<f64> {
///     if divisor == 0.0 { Optional::empty() } else { Optional::present(dividend / divisor) }
/// }
///
/// let result: Optional<f64> = chain! {
///     x <= divide(3.0, 2.0);
///     y <= divide(9.0, 3.0);
///     yield x * y
/// };
/// assert_eq!(result, Optional::present(4.5));
///
/// let guarded: Optional<f64> = chain! {
///     x <= divide(3.0, 2.0);
///     y <= divide(9.0, 2.0);
///     if 5.0 < y;
///     yield x * y
/// };
/// assert_eq!(guarded, Optional::empty());
/// ```
///
/// Failures short-circuit, first one wins:
///
/// ```rust
/// use carrier::chain;
/// use carrier::control::Outcome;
///
/// let result: Outcome<&str, i32> = chain! {
///     x <= Outcome::<&str, i32>::success(1);
///     y <= Outcome::<&str, i32>::failure("first");
///     z <= Outcome::<&str, i32>::failure("second");
///     yield x + y + z
/// };
/// assert_eq!(result, Outcome::failure("first"));
/// ```
#[macro_export]
macro_rules! chain {
    // ==========================================================================
    // Lifted result: yield expression
    // ==========================================================================

    (yield $value:expr) => {
        $crate::typeclass::Pure::pure($value)
    };

    // ==========================================================================
    // Guards: must precede the terminal rule, `if c;` is not an expression
    // ==========================================================================

    (if let $pattern:pat = $expr:expr ; $($rest:tt)+) => {
        if let $pattern = $expr {
            $crate::chain!($($rest)+)
        } else {
            $crate::typeclass::Zero::zero()
        }
    };

    (if $condition:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::chain!($($rest)+)
        } else {
            $crate::typeclass::Zero::zero()
        }
    };

    // ==========================================================================
    // Bind: pattern <= container; rest
    // ==========================================================================

    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |$pattern| {
            $crate::chain!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |($($pattern)*)| {
            $crate::chain!($($rest)+)
        })
    };

    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |_| {
            $crate::chain!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::chain!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::chain!($($rest)+)
        }
    };

    // ==========================================================================
    // Terminal: a container expression, returned as is
    // ==========================================================================

    ($result:expr) => {
        $result
    };
}

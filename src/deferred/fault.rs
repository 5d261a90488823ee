//! Faults raised while settling a [`Deferred`](super::Deferred).

use std::any::Any;
use std::fmt::Display;

/// Why a `Deferred` settled without a value.
///
/// A fault is never retried. It reaches every stage bound after the faulted
/// one and every direct observer, unchanged.
///
/// # Examples
///
/// ```rust
/// use carrier::deferred::{Deferred, Fault};
///
/// let faulted: Deferred<i32> = Deferred::faulted(Fault::failed("disk full"));
/// let chained = faulted.map(|n| n + 1);
/// assert_eq!(chained.wait(), Err(Fault::failed("disk full")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Fault {
    /// The work (or a bound continuation) panicked.
    #[error("deferred work panicked: {message}")]
    Panicked {
        /// The panic message, when the payload was a string.
        message: String,
    },

    /// The work reported an error.
    #[error("deferred work failed: {message}")]
    Failed {
        /// The rendered error.
        message: String,
    },

    /// The write end was dropped before settling, e.g. the executor discarded
    /// the job.
    #[error("deferred value abandoned before it was settled")]
    Abandoned,
}

impl Fault {
    /// Builds a [`Fault::Failed`] from any displayable error.
    pub fn failed(error: impl Display) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }

    /// Builds a [`Fault::Panicked`] from a panic payload.
    ///
    /// `&str` and `String` payloads keep their message; anything else is
    /// reported without one.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::Panicked { message }
    }

    /// Returns `true` if the fault came from a panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}

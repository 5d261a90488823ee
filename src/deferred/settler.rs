//! The single-use write end of a [`Deferred`].

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::Deferred;
use super::cell::{SettleCell, Settlement};
use super::fault::Fault;

/// Settles one [`Deferred`], exactly once.
///
/// Every settling method consumes the settler, so a second write cannot be
/// expressed. Dropping an unused settler settles its `Deferred` with
/// [`Fault::Abandoned`], so observers never wait forever on a value nobody
/// will produce.
///
/// # Examples
///
/// ```rust
/// use carrier::deferred::Deferred;
/// use std::thread;
///
/// let (settler, deferred) = Deferred::pending();
/// thread::spawn(move || settler.settle(3));
/// assert_eq!(deferred.wait(), Ok(3));
/// ```
#[must_use = "dropping a Settler abandons its Deferred"]
pub struct Settler<A: Clone + 'static> {
    cell: Option<Arc<SettleCell<A>>>,
}

impl<A: Clone + Send + 'static> Settler<A> {
    pub(crate) const fn new(cell: Arc<SettleCell<A>>) -> Self {
        Self { cell: Some(cell) }
    }

    /// Settles with a value.
    pub fn settle(self, value: A) {
        self.complete(Ok(value));
    }

    /// Settles with a fault.
    pub fn fail(self, fault: Fault) {
        self.complete(Err(fault));
    }

    /// Runs `work` and settles with its result, or with
    /// [`Fault::Panicked`] if it panics.
    pub fn settle_with<W>(self, work: W)
    where
        W: FnOnce() -> A,
    {
        let settlement = catch_unwind(AssertUnwindSafe(work))
            .map_err(|payload| Fault::from_panic(payload.as_ref()));
        self.complete(settlement);
    }

    /// Settles once `source` settles, with the same value or fault.
    pub fn follow(self, source: &Deferred<A>) {
        source.register(Box::new(move |settlement| self.complete(settlement)));
    }

    pub(crate) fn complete(mut self, settlement: Settlement<A>) {
        if let Some(cell) = self.cell.take() {
            cell.settle(settlement);
        }
    }
}

impl<A: Clone + 'static> Drop for Settler<A> {
    fn drop(&mut self) {
        if let Some(cell) = self.cell.take() {
            cell.settle(Err(Fault::Abandoned));
        }
    }
}

impl<A: Clone + 'static> fmt::Debug for Settler<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Settler")
            .field("used", &self.cell.is_none())
            .finish()
    }
}

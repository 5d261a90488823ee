//! `Deferred<A>` - a value that becomes available later.

use std::fmt;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use super::cell::{Continuation, SettleCell};
use super::executor::Executor;
use super::fault::Fault;
use super::settler::Settler;
use crate::typeclass::{Chainable, Pure, TypeConstructor};

/// A value that becomes available once, later.
///
/// A `Deferred` is a cheap handle onto a settle-once cell. Clones share the
/// cell: all of them observe the same settlement. Observing never consumes
/// the value, so `A: Clone` is required and every observer gets its own copy.
///
/// # Chaining
///
/// [`bind`](Self::bind) never blocks. It registers a continuation that runs
/// when this value settles (on the thread that settles it) or immediately if
/// it already has. Stage *n + 1* therefore cannot start before stage *n*
/// settles; chains are sequential, never fan-out.
///
/// # Faults
///
/// If the work behind a `Deferred` panics, or its [`Settler`] is dropped, the
/// `Deferred` settles with a [`Fault`]. Bound functions are skipped and the
/// fault surfaces at every observer: [`wait`](Self::wait) returns it, as does
/// `.await`.
///
/// # Examples
///
/// ```rust
/// use carrier::deferred::{Deferred, ThreadPerTask};
/// use std::thread;
/// use std::time::Duration;
///
/// let count = Deferred::spawn(&ThreadPerTask, || {
///     thread::sleep(Duration::from_millis(10));
///     3
/// });
///
/// let greeting = count.bind(|times| {
///     Deferred::spawn(&ThreadPerTask, move || "piyo! ".repeat(times))
/// });
///
/// assert_eq!(greeting.wait(), Ok("piyo! piyo! piyo! ".to_string()));
/// ```
pub struct Deferred<A> {
    cell: Arc<SettleCell<A>>,
}

impl<A: Clone + Send + 'static> Deferred<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// An already settled `Deferred` holding `value`.
    #[must_use]
    pub fn lift(value: A) -> Self {
        Self {
            cell: Arc::new(SettleCell::settled(Ok(value))),
        }
    }

    /// An already settled `Deferred` holding `fault`.
    #[must_use]
    pub fn faulted(fault: Fault) -> Self {
        Self {
            cell: Arc::new(SettleCell::settled(Err(fault))),
        }
    }

    /// A pending `Deferred` together with the only handle that can settle it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::deferred::Deferred;
    ///
    /// let (settler, deferred) = Deferred::pending();
    /// assert!(!deferred.is_settled());
    ///
    /// settler.settle("ready");
    /// assert_eq!(deferred.wait(), Ok("ready"));
    /// ```
    #[must_use]
    pub fn pending() -> (Settler<A>, Self) {
        let cell = Arc::new(SettleCell::pending());
        (Settler::new(Arc::clone(&cell)), Self { cell })
    }

    /// Hands `work` to `executor`; the result settles when `work` returns.
    ///
    /// A panic inside `work` settles the result with [`Fault::Panicked`].
    pub fn spawn<E, W>(executor: &E, work: W) -> Self
    where
        E: Executor + ?Sized,
        W: FnOnce() -> A + Send + 'static,
    {
        let (settler, deferred) = Self::pending();
        #[cfg(feature = "tracing")]
        tracing::trace!("deferred work scheduled");
        executor.execute(Box::new(move || settler.settle_with(work)));
        deferred
    }

    /// Like [`spawn`](Self::spawn), for work that can fail.
    ///
    /// An `Err` settles the result with [`Fault::Failed`] carrying the
    /// rendered error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::deferred::{Deferred, Fault, Inline};
    ///
    /// let parsed = Deferred::spawn_fallible(&Inline, || "12x".parse::<i32>());
    /// assert!(matches!(parsed.wait(), Err(Fault::Failed { .. })));
    /// ```
    pub fn spawn_fallible<E, W, X>(executor: &E, work: W) -> Self
    where
        E: Executor + ?Sized,
        W: FnOnce() -> Result<A, X> + Send + 'static,
        X: fmt::Display,
    {
        let (settler, deferred) = Self::pending();
        #[cfg(feature = "tracing")]
        tracing::trace!(fallible = true, "deferred work scheduled");
        executor.execute(Box::new(move || {
            match catch_unwind(AssertUnwindSafe(work)) {
                Ok(Ok(value)) => settler.settle(value),
                Ok(Err(error)) => settler.fail(Fault::failed(error)),
                Err(payload) => settler.fail(Fault::from_panic(payload.as_ref())),
            }
        }));
        deferred
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Runs `function` with the settled value; the result settles when the
    /// `Deferred` returned by `function` settles.
    ///
    /// Never blocks the caller. A fault skips `function` and is propagated
    /// unchanged. A panic inside `function` becomes [`Fault::Panicked`].
    pub fn bind<B, F>(self, function: F) -> Deferred<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> Deferred<B> + Send + 'static,
    {
        let (settler, next) = Deferred::pending();
        self.register(Box::new(move |settlement| match settlement {
            Ok(value) => match catch_unwind(AssertUnwindSafe(move || function(value))) {
                Ok(inner) => settler.follow(&inner),
                Err(payload) => settler.fail(Fault::from_panic(payload.as_ref())),
            },
            Err(fault) => settler.fail(fault),
        }));
        next
    }

    /// Transforms the settled value.
    ///
    /// Defined as `bind(|a| Deferred::lift(function(a)))`.
    pub fn map<B, F>(self, function: F) -> Deferred<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        self.bind(move |value| Deferred::lift(function(value)))
    }

    /// Binds, then combines the outer and the inner settled values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::deferred::{Deferred, ThreadPerTask};
    ///
    /// let repeated = Deferred::spawn(&ThreadPerTask, || 2).bind_with(
    ///     |_| Deferred::spawn(&ThreadPerTask, || "ab".to_string()),
    ///     |times, text| text.repeat(times),
    /// );
    /// assert_eq!(repeated.wait(), Ok("abab".to_string()));
    /// ```
    pub fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Deferred<C>
    where
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        F: FnOnce(A) -> Deferred<B> + Send + 'static,
        G: FnOnce(A, B) -> C + Send + 'static,
    {
        self.bind(move |outer| function(outer.clone()).map(move |inner| combine(outer, inner)))
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Blocks until settled and returns the value or the fault.
    ///
    /// May be called any number of times, from any clone; once settled it
    /// always returns an equal result.
    pub fn wait(&self) -> Result<A, Fault> {
        self.cell.wait()
    }

    /// Blocks for at most `timeout`. `None` means still pending.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<A, Fault>> {
        self.cell.wait_for(timeout)
    }

    /// The settlement, if there is one yet. Never blocks.
    pub fn try_get(&self) -> Option<Result<A, Fault>> {
        self.cell.try_get()
    }

    /// Returns `true` once settled.
    pub fn is_settled(&self) -> bool {
        self.cell.is_settled()
    }

    /// Blocks until settled, then runs exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::deferred::{Deferred, Fault};
    ///
    /// let message = Deferred::<i32>::faulted(Fault::Abandoned)
    ///     .fold(|fault| fault.to_string(), |value| value.to_string());
    /// assert_eq!(message, "deferred value abandoned before it was settled");
    /// ```
    pub fn fold<U, F, S>(self, on_fault: F, on_value: S) -> U
    where
        F: FnOnce(Fault) -> U,
        S: FnOnce(A) -> U,
    {
        match self.wait() {
            Ok(value) => on_value(value),
            Err(fault) => on_fault(fault),
        }
    }

    pub(crate) fn register(&self, continuation: Continuation<A>) {
        self.cell.register(continuation);
    }
}

impl<A> Clone for Deferred<A> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<A: Clone + Send + fmt::Debug + 'static> fmt::Debug for Deferred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_get() {
            Some(settlement) => formatter
                .debug_tuple("Deferred::Settled")
                .field(&settlement)
                .finish(),
            None => formatter.write_str("Deferred::Pending"),
        }
    }
}

// =============================================================================
// Future Interop
// =============================================================================

impl<A: Clone + Send + 'static> Future for Deferred<A> {
    type Output = Result<A, Fault>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.cell.poll_settlement(context)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Deferred<A> {
    type Inner = A;
    type WithType<B> = Deferred<B>;
}

impl<A: Clone + Send + 'static> Chainable for Deferred<A> {
    #[inline]
    fn lift<B>(value: B) -> Deferred<B>
    where
        B: Clone + Send + 'static,
    {
        Deferred::lift(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Deferred<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> Deferred<B> + Send + 'static,
    {
        Self::bind(self, function)
    }

    #[inline]
    fn map<B, F>(self, function: F) -> Deferred<B>
    where
        B: Clone + Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::map(self, function)
    }

    #[inline]
    fn bind_with<B, C, F, G>(self, function: F, combine: G) -> Deferred<C>
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        C: Clone + Send + 'static,
        F: FnOnce(A) -> Deferred<B> + Send + 'static,
        G: FnOnce(A, B) -> C + Send + 'static,
    {
        Self::bind_with(self, function, combine)
    }
}

impl<A: Clone + Send + 'static> Pure for Deferred<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Self::lift(value)
    }
}

static_assertions::assert_impl_all!(Deferred<i32>: Send, Sync, Clone, Unpin);
static_assertions::assert_impl_all!(Settler<String>: Send);
static_assertions::assert_not_impl_any!(Settler<String>: Clone);
static_assertions::assert_not_impl_any!(Deferred<i32>: crate::typeclass::Zero);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::{Inline, ThreadPerTask};
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[rstest]
    fn lift_is_settled_immediately() {
        let value = Deferred::lift(5);
        assert!(value.is_settled());
        assert_eq!(value.try_get(), Some(Ok(5)));
    }

    #[rstest]
    fn bind_on_pending_does_not_run_until_settled() {
        let (settler, source) = Deferred::pending();
        let calls = Arc::new(AtomicUsize::new(0));
        let captured = Arc::clone(&calls);

        let chained = source.bind(move |n: i32| {
            captured.fetch_add(1, Ordering::SeqCst);
            Deferred::lift(n + 1)
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!chained.is_settled());

        settler.settle(1);
        assert_eq!(chained.wait(), Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn dropped_settler_abandons() {
        let (settler, deferred) = Deferred::<i32>::pending();
        drop(settler);
        assert_eq!(deferred.wait(), Err(Fault::Abandoned));
    }

    #[rstest]
    fn panic_in_bound_function_becomes_fault() {
        let chained: Deferred<i32> = Deferred::lift(1).bind(|_| panic!("stage failed"));
        assert_eq!(
            chained.wait(),
            Err(Fault::Panicked {
                message: "stage failed".to_string()
            })
        );
    }

    #[rstest]
    fn spawn_fallible_reports_errors() {
        let parsed = Deferred::spawn_fallible(&Inline, || "7".parse::<i32>());
        assert_eq!(parsed.wait(), Ok(7));
    }

    #[rstest]
    fn clones_observe_the_same_settlement() {
        let (settler, deferred) = Deferred::pending();
        let observers: Vec<_> = (0..4)
            .map(|_| {
                let deferred = deferred.clone();
                thread::spawn(move || deferred.wait())
            })
            .collect();

        settler.settle("shared".to_string());
        for observer in observers {
            assert_eq!(observer.join().unwrap(), Ok("shared".to_string()));
        }
    }

    #[rstest]
    fn wait_timeout_returns_none_while_pending() {
        let (_settler, deferred) = Deferred::<u8>::pending();
        assert_eq!(deferred.wait_timeout(Duration::from_millis(5)), None);
    }

    #[rstest]
    fn debug_shows_state() {
        let (settler, deferred) = Deferred::pending();
        assert_eq!(format!("{deferred:?}"), "Deferred::Pending");
        settler.settle(1);
        assert_eq!(format!("{deferred:?}"), "Deferred::Settled(Ok(1))");
    }

    #[rstest]
    fn spawned_work_settles_from_worker_thread() {
        let deferred = Deferred::spawn(&ThreadPerTask, || thread::current().name().map(str::to_string));
        assert_eq!(deferred.wait(), Ok(Some("carrier-worker".to_string())));
    }
}

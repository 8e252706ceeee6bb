//! Trailing-edge debouncing on the tokio timer

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Collapse bursts of calls into one deferred call
///
/// Each [`call`](Debouncer::call) cancels the pending invocation and
/// schedules a new one `wait` in the future, so only the last call of a
/// burst runs, with its arguments. There is no maximum wait: a caller that
/// never pauses never fires.
///
/// Calls must happen inside a tokio runtime.
///
/// # Example
///
/// ```rust,ignore
/// let refilter = Debouncer::new(Duration::from_millis(300), move |query: String| {
///     tx.send(query).ok();
/// });
/// refilter.call("lo".to_string());
/// refilter.call("login".to_string()); // only this one runs
/// ```
pub struct Debouncer<A> {
    wait: Duration,
    f: Arc<dyn Fn(A) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer around `f`
    pub fn new(wait: Duration, f: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            f: Arc::new(f),
            pending: Mutex::new(None),
        }
    }

    /// Schedule `f(args)` after the quiet period, replacing any pending call
    pub fn call(&self, args: A) {
        let f = Arc::clone(&self.f);
        let wait = self.wait;

        // spawn and record under one lock
        let mut pending = self.pending();
        let task = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f(args);
        });
        if let Some(previous) = pending.replace(task) {
            previous.abort();
            tracing::trace!(wait_ms = wait.as_millis() as u64, "debounced call rescheduled");
        }
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.pending().take() {
            previous.abort();
        }
    }

    /// Whether a call is scheduled and has not run yet
    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Configured quiet period
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = pending.take() {
            task.abort();
        }
    }
}

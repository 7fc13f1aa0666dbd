//! Cancellable debounced tasks.
//!
//! A [`Debouncer`] holds at most one pending scheduled task. Scheduling
//! while a run is pending aborts the previous run and starts the delay
//! over — superseded runs are cancelled, never queued. Dropping the
//! debouncer aborts whatever is still pending.

use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// A single-slot scheduler for delayed, coalescing side effects.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` after `delay`, cancelling any previously scheduled run.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.slot();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        }));
    }

    /// Abort the pending run, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.slot().take() {
            handle.abort();
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.pending.lock() {
            Ok(guard) => guard,
            // A poisoned lock still holds a usable handle slot.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ── tests ────────────────────────────────────────────────────────────

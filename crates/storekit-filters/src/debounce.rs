//! Cancellable single-shot timer with reset-on-retrigger semantics.
//!
//! Each [`Debouncer::trigger`] arms a fresh timer and invalidates any timer
//! armed earlier; the callback runs only if its arming is still the most
//! recent when the delay elapses. This is the timer half of the price
//! slider's commit window: the state machine decides *when* to arm or
//! cancel, this type does the arming.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Single-shot debounce timer driven by the tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Generation of the most recent arming. A fired timer only runs its
    /// callback if its own generation still matches.
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Arms the timer; any previously armed callback is invalidated.
    ///
    /// `callback` runs on the tokio runtime after the configured delay,
    /// unless a later `trigger` or `cancel` supersedes it first.
    pub fn trigger<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if latest.load(Ordering::SeqCst) == armed {
                callback();
            } else {
                tracing::debug!(generation = armed, "debounce arming superseded; skipping");
            }
        });
    }

    /// Invalidates any armed callback without arming a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

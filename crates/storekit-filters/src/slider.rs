//! Runtime driver for the price slider: runs the reconciler's effects.
//!
//! [`PriceRangeReconciler`] is a pure state machine; this type owns one
//! together with a [`Debouncer`] and executes the effects each event
//! produces, delivering committed ranges to the caller's sink. The commit
//! window comes from [`StoreConfig::debounce_ms`] via [`PriceSlider::from_config`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use storekit_core::StoreConfig;

use crate::debounce::Debouncer;
use crate::price_range::{Effect, Event, Phase, PriceRange, PriceRangeReconciler};

type CommitSink = Arc<dyn Fn(PriceRange) + Send + Sync>;

/// A mounted price slider: state machine, debounce timer, and commit sink.
pub struct PriceSlider {
    machine: Arc<Mutex<PriceRangeReconciler>>,
    debouncer: Debouncer,
    on_commit: CommitSink,
}

impl PriceSlider {
    /// `on_commit` receives each range the machine pushes upstream, on the
    /// tokio runtime, after the debounce window closes.
    #[must_use]
    pub fn new<F>(ceiling: u64, debounce: Duration, on_commit: F) -> Self
    where
        F: Fn(PriceRange) + Send + Sync + 'static,
    {
        Self {
            machine: Arc::new(Mutex::new(PriceRangeReconciler::new(ceiling))),
            debouncer: Debouncer::new(debounce),
            on_commit: Arc::new(on_commit),
        }
    }

    /// Builds a slider whose commit window is the configured debounce.
    #[must_use]
    pub fn from_config<F>(config: &StoreConfig, ceiling: u64, on_commit: F) -> Self
    where
        F: Fn(PriceRange) + Send + Sync + 'static,
    {
        Self::new(ceiling, Duration::from_millis(config.debounce_ms), on_commit)
    }

    /// Feeds one event to the machine and runs whatever effect it returns.
    pub fn handle(&self, event: Event) {
        let effect = lock(&self.machine).apply(event);
        match effect {
            Some(Effect::StartDebounce) => {
                let machine = Arc::clone(&self.machine);
                let on_commit = Arc::clone(&self.on_commit);
                self.debouncer.trigger(move || {
                    if let Some(Effect::Commit(range)) = lock(&machine).apply(Event::DebounceFired)
                    {
                        on_commit(range);
                    }
                });
            }
            Some(Effect::CancelDebounce) => self.debouncer.cancel(),
            Some(Effect::Commit(range)) => (self.on_commit)(range),
            None => {}
        }
    }

    #[must_use]
    pub fn local(&self) -> PriceRange {
        lock(&self.machine).local()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        lock(&self.machine).phase()
    }
}

impl std::fmt::Debug for PriceSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceSlider")
            .field("machine", &self.machine)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

/// Recovers from a poisoned lock; the machine's state stays consistent
/// under every transition, so the poisoned value is still usable.
fn lock(machine: &Arc<Mutex<PriceRangeReconciler>>) -> std::sync::MutexGuard<'_, PriceRangeReconciler> {
    machine.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

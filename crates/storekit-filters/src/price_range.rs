//! Three-source reconciliation for the dual-handle price slider.
//!
//! The slider's min/max can change from three places that must not feed back
//! into each other:
//!
//! 1. a local drag (applied synchronously, committed upstream after a
//!    debounce window),
//! 2. the component's own commit echoing back through props,
//! 3. a genuine external change (a chip removed elsewhere, or a collection
//!    swap with a new price ceiling).
//!
//! `last_committed` records what this machine itself last pushed upstream;
//! an incoming prop equal to it is self-echo and is skipped, anything else
//! is treated as external and overwrites local state. The timer itself lives
//! outside the machine: transitions return [`Effect`]s so the whole
//! disambiguation stays a pure, testable function.

/// Minimum distance between the two handles, in whole currency units.
/// Prevents a zero-width or inverted range.
const MIN_GAP: u64 = 1;

/// An inclusive min/max pair in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

/// Which handle a drag is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
}

/// Resting and transient phases of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No interaction yet (or reset by an external change).
    Idle,
    /// Pointer down on a handle; local values track every move tick.
    Dragging(Handle),
    /// Handle released; the debounce window is open.
    CommitPending,
    /// A commit fired and is now reflected in `last_committed`.
    Committed,
}

/// Inputs to the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    DragStart(Handle),
    /// New value for the handle being dragged. Ignored outside a drag.
    DragMove(u64),
    Release,
    /// The debounce timer elapsed without being reset.
    DebounceFired,
    /// Incoming `(min, max)` from the parent on a prop update.
    RangeProps(PriceRange),
    /// The surrounding collection changed; `ceiling` is its maximum
    /// possible price.
    CollectionChanged { ceiling: u64 },
}

/// Instructions for the caller's timer/navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm (or re-arm) the single-shot debounce timer.
    StartDebounce,
    /// Disarm a pending debounce timer.
    CancelDebounce,
    /// Push this range upstream (update the price filter / URL).
    Commit(PriceRange),
}

/// The slider state machine. One instance per mounted slider.
#[derive(Debug, Clone)]
pub struct PriceRangeReconciler {
    phase: Phase,
    local: PriceRange,
    last_committed: PriceRange,
    /// Price ceiling captured at mount or collection change. The track's
    /// fill is computed against this, not the live prop, so a narrowing
    /// filter never rescales the track mid-drag.
    ceiling: u64,
}

impl PriceRangeReconciler {
    /// Starts at the full `[0, ceiling]` range. A zero ceiling is bumped to
    /// `MIN_GAP` to keep the range well-formed.
    #[must_use]
    pub fn new(ceiling: u64) -> Self {
        let ceiling = ceiling.max(MIN_GAP);
        let full = PriceRange::new(0, ceiling);
        Self {
            phase: Phase::Idle,
            local: full,
            last_committed: full,
            ceiling,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn local(&self) -> PriceRange {
        self.local
    }

    #[must_use]
    pub fn last_committed(&self) -> PriceRange {
        self.last_committed
    }

    #[must_use]
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Track fill as `(min, max)` fractions of the remembered ceiling,
    /// each clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_fractions(&self) -> (f64, f64) {
        let ceiling = self.ceiling as f64;
        (
            (self.local.min as f64 / ceiling).min(1.0),
            (self.local.max as f64 / ceiling).min(1.0),
        )
    }

    /// `true` when the handles sit at the full `[0, ceiling]` range, i.e.
    /// no price refinement is active.
    #[must_use]
    pub fn at_full_range(&self) -> bool {
        self.local.min == 0 && self.local.max == self.ceiling
    }

    /// Applies one event and returns the effect the caller must run, if any.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::DragStart(handle) => {
                // A re-drag inside the debounce window resets the timer:
                // cancel now, Release will re-arm.
                let effect = matches!(self.phase, Phase::CommitPending)
                    .then_some(Effect::CancelDebounce);
                self.phase = Phase::Dragging(handle);
                effect
            }
            Event::DragMove(value) => {
                match self.phase {
                    Phase::Dragging(Handle::Min) => {
                        self.local.min = value.min(self.local.max.saturating_sub(MIN_GAP));
                    }
                    Phase::Dragging(Handle::Max) => {
                        // The gap bound wins over the ceiling when they
                        // cross: after a ceiling-shrinking collection swap
                        // the min handle may sit above the new ceiling, and
                        // min < max matters more than max <= ceiling (which
                        // is already transiently violated in that state).
                        self.local.max = value.min(self.ceiling).max(self.local.min + MIN_GAP);
                    }
                    // Move ticks outside a drag carry no handle; drop them.
                    _ => {}
                }
                None
            }
            Event::Release => match self.phase {
                Phase::Dragging(_) => {
                    self.phase = Phase::CommitPending;
                    Some(Effect::StartDebounce)
                }
                _ => None,
            },
            Event::DebounceFired => match self.phase {
                Phase::CommitPending => {
                    // Record the commit before it is pushed upstream, so the
                    // parent's echoed prop update is recognized as our own.
                    self.last_committed = self.local;
                    self.phase = Phase::Committed;
                    Some(Effect::Commit(self.local))
                }
                // A stale timer that lost a race with cancellation.
                _ => None,
            },
            Event::RangeProps(incoming) => self.on_range_props(incoming),
            Event::CollectionChanged { ceiling } => self.on_collection_changed(ceiling),
        }
    }

    fn on_range_props(&mut self, incoming: PriceRange) -> Option<Effect> {
        if matches!(self.phase, Phase::Dragging(_)) {
            // The user's hand beats the props; the drag's own commit will
            // reconcile when it fires.
            return None;
        }
        if incoming == self.last_committed {
            // Self-echo: already applied locally.
            return None;
        }

        tracing::debug!(
            min = incoming.min,
            max = incoming.max,
            "external price range change; overwriting local state"
        );
        let effect =
            matches!(self.phase, Phase::CommitPending).then_some(Effect::CancelDebounce);
        let incoming = normalized(incoming);
        self.local = incoming;
        self.last_committed = incoming;
        self.phase = Phase::Idle;
        effect
    }

    fn on_collection_changed(&mut self, ceiling: u64) -> Option<Effect> {
        let ceiling = ceiling.max(MIN_GAP);
        let fresh_baseline = self.at_full_range() && !matches!(self.phase, Phase::Dragging(_));
        if !fresh_baseline {
            // A refinement (or an in-progress drag) is active: remember the
            // new ceiling but leave the user's handles alone.
            self.ceiling = ceiling;
            return None;
        }

        tracing::debug!(ceiling, "collection changed at full range; resetting handles");
        let effect =
            matches!(self.phase, Phase::CommitPending).then_some(Effect::CancelDebounce);
        self.ceiling = ceiling;
        self.local = PriceRange::new(0, ceiling);
        self.last_committed = self.local;
        self.phase = Phase::Idle;
        effect
    }
}

/// Widens a degenerate range so `min < max` holds. External data (a
/// hand-edited URL echoed through props) can carry `max <= min`; the min
/// value is kept and the max is lifted to restore the gap.
fn normalized(range: PriceRange) -> PriceRange {
    PriceRange::new(range.min, range.max.max(range.min + MIN_GAP))
}

#[cfg(test)]
#[path = "price_range_test.rs"]
mod tests;

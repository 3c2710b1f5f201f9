//! Optimistic overlay for the locally rendered cart.
//!
//! Before server confirmation, line quantities and discount codes are
//! speculatively patched so the UI reflects the click immediately. On
//! confirmation the server snapshot replaces the speculative one outright —
//! last-server-write-wins, never a field-by-field merge.

use storekit_core::{CartIntent, CartSnapshot};

use crate::mutations::CartLineMutation;

/// The cart as currently rendered: the latest server snapshot plus any
/// speculative patches applied since.
#[derive(Debug, Clone)]
pub struct CartView {
    snapshot: CartSnapshot,
}

impl CartView {
    #[must_use]
    pub fn new(snapshot: CartSnapshot) -> Self {
        Self { snapshot }
    }

    #[must_use]
    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    /// Speculatively applies `mutation` to the rendered cart.
    ///
    /// Update patches line quantities (zero removes the line); Remove drops
    /// lines; DiscountUpdate replaces the code list. Gift card mutations are
    /// not speculated — their redacted identifiers are only known to the
    /// server. Line IDs that no longer exist are skipped with a warning;
    /// a stale click is not an error.
    pub fn apply_optimistic(&mut self, mutation: &CartLineMutation) {
        match mutation.intent {
            CartIntent::Update => {
                for input in &mutation.lines {
                    if input.quantity == 0 {
                        self.remove_line(&input.id);
                        continue;
                    }
                    match self.snapshot.lines.iter_mut().find(|l| l.id == input.id) {
                        Some(line) => line.quantity = input.quantity,
                        None => {
                            tracing::warn!(line_id = input.id.as_str(), "optimistic update for unknown cart line");
                        }
                    }
                }
            }
            CartIntent::Remove => {
                for id in &mutation.target_line_ids {
                    self.remove_line(id);
                }
            }
            CartIntent::DiscountUpdate => {
                if let Some(codes) = &mutation.discount_codes {
                    self.snapshot.discount_codes.clone_from(codes);
                }
            }
            CartIntent::GiftCardAdd | CartIntent::GiftCardRemove => {}
        }
    }

    /// Replaces the rendered cart with a confirmed server snapshot,
    /// discarding any speculative patches.
    pub fn replace(&mut self, snapshot: CartSnapshot) {
        self.snapshot = snapshot;
    }

    fn remove_line(&mut self, id: &str) {
        let before = self.snapshot.lines.len();
        self.snapshot.lines.retain(|l| l.id != id);
        if self.snapshot.lines.len() == before {
            tracing::warn!(line_id = id, "optimistic removal of unknown cart line");
        }
    }
}

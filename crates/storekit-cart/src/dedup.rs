//! Last-request-wins deduplication for concurrent cart mutations.
//!
//! Mutations touching the same cart lines share one logical request slot,
//! identified by a dedup key. Issuing a new mutation under a key supersedes
//! any in-flight one: the older response, whenever it arrives, is discarded
//! instead of clobbering newer state. Cancellation is logical only — no
//! network-level abort is involved.

use std::collections::HashMap;

use storekit_core::{CartIntent, CartSnapshot};

use crate::optimistic::CartView;

/// Derives the dedup key for a mutation: the intent joined with the line IDs
/// in caller-supplied order.
///
/// Order is deliberately NOT canonicalized: two calls must present
/// `line_ids` in the same order to collide. Single-line mutations (the
/// dominant case — one plus, one minus, one remove button) always collide
/// correctly; multi-line batch callers are responsible for stable ordering.
#[must_use]
pub fn dedup_key(intent: CartIntent, line_ids: &[String]) -> String {
    let mut parts = Vec::with_capacity(line_ids.len() + 1);
    parts.push(intent.to_string());
    parts.extend(line_ids.iter().cloned());
    parts.join("-")
}

/// Token for one issued request. Holds the key it was issued under and its
/// position in that key's issuance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    key: String,
    seq: u64,
}

impl InFlight {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Tracks the most recent request per dedup key.
///
/// Within one key, issuance order decides which response is observable:
/// only the token most recently returned by [`MutationDeduper::begin`]
/// settles. Across different keys there is no ordering relationship —
/// distinct cart lines are independent.
#[derive(Debug, Default)]
pub struct MutationDeduper {
    latest: HashMap<String, u64>,
    next_seq: u64,
}

impl MutationDeduper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new submission and returns its token, superseding any
    /// earlier in-flight request under the same key.
    pub fn begin(&mut self, intent: CartIntent, line_ids: &[String]) -> InFlight {
        self.next_seq += 1;
        let key = dedup_key(intent, line_ids);
        self.latest.insert(key.clone(), self.next_seq);
        InFlight {
            key,
            seq: self.next_seq,
        }
    }

    /// Returns `true` if `token` is still the most recent submission for
    /// its key.
    #[must_use]
    pub fn is_current(&self, token: &InFlight) -> bool {
        self.latest.get(&token.key) == Some(&token.seq)
    }

    /// Applies a server snapshot for `token`'s request, unless the token
    /// has been superseded — stale responses are discarded silently (debug
    /// log only), per the optimistic-concurrency contract.
    ///
    /// Returns `true` when the snapshot was applied.
    pub fn settle(&mut self, token: &InFlight, snapshot: CartSnapshot, view: &mut CartView) -> bool {
        if !self.is_current(token) {
            tracing::debug!(
                key = token.key.as_str(),
                seq = token.seq,
                "discarding stale cart mutation response"
            );
            return false;
        }
        view.replace(snapshot);
        true
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;

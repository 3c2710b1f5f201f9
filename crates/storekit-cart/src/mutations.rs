//! Cart mutation descriptions and the wire request they submit.
//!
//! A [`CartLineMutation`] is the local description of one user action (a
//! quantity change, a line removal, a discount update). It feeds both the
//! dedup key derivation in [`crate::dedup`] and the optimistic patch in
//! [`crate::optimistic`], and converts into the [`CartMutationRequest`]
//! posted to the single cart mutation endpoint.

use serde::{Deserialize, Serialize};
use storekit_core::CartIntent;

/// One line's target state in an update mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    /// Server-assigned cart line ID.
    pub id: String,
    /// Desired quantity. Zero means the line should be removed.
    pub quantity: u32,
}

/// The JSON body submitted to the cart mutation endpoint. The response is
/// always a full cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMutationRequest {
    pub intent: CartIntent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<CartLineInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_card_code: Option<String>,
}

/// A user action against the cart, before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineMutation {
    pub intent: CartIntent,
    /// Cart line IDs this mutation touches, in caller-supplied order. This
    /// order flows into the dedup key unchanged.
    pub target_line_ids: Vec<String>,
    /// Target line states for `Update` mutations.
    pub lines: Vec<CartLineInput>,
    /// Replacement discount code list for `DiscountUpdate` mutations.
    pub discount_codes: Option<Vec<String>>,
    /// Gift card code for `GiftCardAdd` mutations.
    pub gift_card_code: Option<String>,
}

impl CartLineMutation {
    /// A quantity update for one or more lines.
    #[must_use]
    pub fn update(lines: Vec<CartLineInput>) -> Self {
        Self {
            intent: CartIntent::Update,
            target_line_ids: lines.iter().map(|l| l.id.clone()).collect(),
            lines,
            discount_codes: None,
            gift_card_code: None,
        }
    }

    /// Removal of the given lines.
    #[must_use]
    pub fn remove(line_ids: Vec<String>) -> Self {
        Self {
            intent: CartIntent::Remove,
            target_line_ids: line_ids,
            lines: Vec::new(),
            discount_codes: None,
            gift_card_code: None,
        }
    }

    /// Wholesale replacement of the applied discount codes. Touches no
    /// lines; its dedup key is shared by all discount updates on the cart.
    #[must_use]
    pub fn discount_update(codes: Vec<String>) -> Self {
        Self {
            intent: CartIntent::DiscountUpdate,
            target_line_ids: Vec::new(),
            lines: Vec::new(),
            discount_codes: Some(codes),
            gift_card_code: None,
        }
    }

    /// Application of a gift card code.
    #[must_use]
    pub fn gift_card_add(code: impl Into<String>) -> Self {
        Self {
            intent: CartIntent::GiftCardAdd,
            target_line_ids: Vec::new(),
            lines: Vec::new(),
            discount_codes: None,
            gift_card_code: Some(code.into()),
        }
    }

    /// Removal of all applied gift cards.
    #[must_use]
    pub fn gift_card_remove() -> Self {
        Self {
            intent: CartIntent::GiftCardRemove,
            target_line_ids: Vec::new(),
            lines: Vec::new(),
            discount_codes: None,
            gift_card_code: None,
        }
    }

    /// Builds the wire request for this mutation.
    #[must_use]
    pub fn request(&self) -> CartMutationRequest {
        CartMutationRequest {
            intent: self.intent,
            lines: self.lines.clone(),
            line_ids: match self.intent {
                CartIntent::Remove => self.target_line_ids.clone(),
                _ => Vec::new(),
            },
            discount_codes: self.discount_codes.clone(),
            gift_card_code: self.gift_card_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str, quantity: u32) -> CartLineInput {
        CartLineInput {
            id: id.to_string(),
            quantity,
        }
    }

    #[test]
    fn update_derives_target_ids_from_lines() {
        let m = CartLineMutation::update(vec![input("a", 2), input("b", 1)]);
        assert_eq!(m.target_line_ids, vec!["a", "b"]);
        assert_eq!(m.intent, CartIntent::Update);
    }

    #[test]
    fn update_request_carries_lines_not_line_ids() {
        let m = CartLineMutation::update(vec![input("a", 2)]);
        let json = serde_json::to_value(m.request()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "intent": "update",
                "lines": [{"id": "a", "quantity": 2}],
            })
        );
    }

    #[test]
    fn remove_request_carries_line_ids() {
        let m = CartLineMutation::remove(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_value(m.request()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "intent": "remove",
                "lineIds": ["a", "b"],
            })
        );
    }

    #[test]
    fn discount_update_request_shape() {
        let m = CartLineMutation::discount_update(vec!["SUMMER10".to_string()]);
        let json = serde_json::to_value(m.request()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "intent": "discount-update",
                "discountCodes": ["SUMMER10"],
            })
        );
    }

    #[test]
    fn gift_card_requests() {
        let add = CartLineMutation::gift_card_add("GHJK-1234");
        let json = serde_json::to_value(add.request()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"intent": "gift-card-add", "giftCardCode": "GHJK-1234"})
        );

        let remove = CartLineMutation::gift_card_remove();
        let json = serde_json::to_value(remove.request()).expect("serialize");
        assert_eq!(json, serde_json::json!({"intent": "gift-card-remove"}));
    }

    #[test]
    fn request_round_trips_through_serde() {
        let m = CartLineMutation::update(vec![input("a", 3)]);
        let json = serde_json::to_string(&m.request()).expect("serialize");
        let back: CartMutationRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, m.request());
    }
}

use serde::{Deserialize, Serialize};

/// The kind of cart mutation being submitted. Serializes to the kebab-case
/// intent strings the cart endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CartIntent {
    Update,
    Remove,
    DiscountUpdate,
    GiftCardAdd,
    GiftCardRemove,
}

impl std::fmt::Display for CartIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CartIntent::Update => "update",
            CartIntent::Remove => "remove",
            CartIntent::DiscountUpdate => "discount-update",
            CartIntent::GiftCardAdd => "gift-card-add",
            CartIntent::GiftCardRemove => "gift-card-remove",
        };
        write!(f, "{s}")
    }
}

/// One line of the cart: a merchandise (variant) at a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Server-assigned cart line ID.
    pub id: String,
    /// Variant GID this line points at.
    pub merchandise_id: String,
    pub quantity: u32,
}

/// A full cart snapshot as returned by the cart mutation endpoint. Responses
/// replace the local view wholesale; snapshots are never merged field by
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub id: String,
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub discount_codes: Vec<String>,
    /// Redacted gift card identifiers (last characters only).
    #[serde(default)]
    pub gift_card_last_characters: Vec<String>,
    /// Cart total in whole currency units, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl CartSnapshot {
    /// Sum of all line quantities, as shown on the header badge.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Looks up a line by its server-assigned ID.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }
}

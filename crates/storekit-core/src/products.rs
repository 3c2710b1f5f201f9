use serde::{Deserialize, Serialize};

/// A single option choice on a variant, e.g. `Color = "Red"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A purchasable variant snapshot, fetched once per page/modal load and never
/// mutated in place. Resolution hands out references into the fetched
/// collection rather than cloning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Storefront variant ID (GID string).
    pub id: String,
    /// One entry per product option, e.g. `[Color=Red, Size=M]`.
    pub selected_options: Vec<SelectedOption>,
    pub available_for_sale: bool,
    /// URL handle of the product this variant belongs to. Variants from a
    /// shared style grouping may carry a different handle than the page
    /// being displayed.
    pub product_handle: String,
    /// Price in whole currency units, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

impl ProductVariant {
    /// Returns this variant's value for the named option, if it has one.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.value.as_str())
    }

    /// Returns `true` if this variant carries the exact `{name, value}` pair.
    #[must_use]
    pub fn has_option(&self, name: &str, value: &str) -> bool {
        self.option_value(name) == Some(value)
    }
}

/// One entry of a product's ordered option schema, e.g.
/// `Color: [Red, Blue, Green]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<String>,
}

/// Returns `true` if at least one variant in the collection is purchasable.
#[must_use]
pub fn has_available_variants(variants: &[ProductVariant]) -> bool {
    variants.iter().any(|v| v.available_for_sale)
}

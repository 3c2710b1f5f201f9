use serde::{Deserialize, Serialize};

/// A structured filter predicate attached to a facet option.
///
/// Serializes to the storefront wire shapes:
///
/// ```text
/// {"price":{"min":10,"max":150}}
/// {"variantOption":{"name":"Color","value":"Red"}}
/// {"available":true}
/// ```
///
/// Predicates carry no identity beyond their shape; equality is structural,
/// which for this closed set of shapes is exactly what derived `PartialEq`
/// provides. The active predicate list is the single source of truth for
/// both the sidebar UI and the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductFilter {
    Price { min: u64, max: u64 },
    VariantOption { name: String, value: String },
    Available(bool),
}

impl ProductFilter {
    #[must_use]
    pub fn price(min: u64, max: u64) -> Self {
        Self::Price { min, max }
    }

    #[must_use]
    pub fn variant_option(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::VariantOption {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn available(available: bool) -> Self {
        Self::Available(available)
    }

    /// Returns `true` for the price-range predicate. There is at most one
    /// active price predicate in a well-formed filter list.
    #[must_use]
    pub fn is_price(&self) -> bool {
        matches!(self, Self::Price { .. })
    }

    /// Human-readable chip label for this predicate.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Price { min, max } => format!("${min} - ${max}"),
            Self::VariantOption { value, .. } => value.clone(),
            Self::Available(true) => "In stock".to_string(),
            Self::Available(false) => "Out of stock".to_string(),
        }
    }
}

/// A predicate paired with its display label, as rendered on a removable
/// filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilter {
    pub label: String,
    pub filter: ProductFilter,
}

/// Maps the active filter list to chip labels, preserving order.
#[must_use]
pub fn applied_filters_with_labels(filters: &[ProductFilter]) -> Vec<AppliedFilter> {
    filters
        .iter()
        .map(|f| AppliedFilter {
            label: f.label(),
            filter: f.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_serializes_to_wire_shape() {
        let json = serde_json::to_value(ProductFilter::price(10, 150)).expect("serialize");
        assert_eq!(json, serde_json::json!({"price": {"min": 10, "max": 150}}));
    }

    #[test]
    fn variant_option_serializes_to_wire_shape() {
        let json =
            serde_json::to_value(ProductFilter::variant_option("Color", "Red")).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"variantOption": {"name": "Color", "value": "Red"}})
        );
    }

    #[test]
    fn available_serializes_to_wire_shape() {
        let json = serde_json::to_value(ProductFilter::available(true)).expect("serialize");
        assert_eq!(json, serde_json::json!({"available": true}));
    }

    #[test]
    fn independently_built_predicates_compare_equal() {
        assert_eq!(
            ProductFilter::variant_option("Size", "M"),
            ProductFilter::variant_option("Size", "M")
        );
        assert_ne!(
            ProductFilter::variant_option("Size", "M"),
            ProductFilter::variant_option("Size", "L")
        );
    }

    #[test]
    fn labels_for_each_shape() {
        assert_eq!(ProductFilter::price(10, 150).label(), "$10 - $150");
        assert_eq!(ProductFilter::variant_option("Color", "Red").label(), "Red");
        assert_eq!(ProductFilter::available(true).label(), "In stock");
        assert_eq!(ProductFilter::available(false).label(), "Out of stock");
    }

    #[test]
    fn applied_filters_preserve_order() {
        let filters = vec![
            ProductFilter::variant_option("Color", "Red"),
            ProductFilter::price(0, 80),
        ];
        let applied = applied_filters_with_labels(&filters);
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].label, "Red");
        assert_eq!(applied[1].label, "$0 - $80");
        assert_eq!(applied[1].filter, filters[1]);
    }
}

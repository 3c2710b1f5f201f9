//! Pure reducers over the active filter list.
//!
//! The filter list is the single source of truth shared by the sidebar, the
//! mobile drawer, and the URL; every change goes through one of these
//! functions and is then re-encoded via [`crate::codec::encode_filters`].
//! Equality is structural, so the same predicate built at two call sites
//! toggles the same entry.

use storekit_core::ProductFilter;

/// Adds `filter` when `checked` and absent; removes it when unchecked and
/// present. Idempotent in both directions.
#[must_use]
pub fn toggle_filter(
    filters: &[ProductFilter],
    filter: &ProductFilter,
    checked: bool,
) -> Vec<ProductFilter> {
    if checked {
        let mut out = filters.to_vec();
        if !out.contains(filter) {
            out.push(filter.clone());
        }
        out
    } else {
        remove_filter(filters, filter)
    }
}

/// Replaces the active price predicate, or inserts one if absent. There is
/// never more than one price predicate in the list.
#[must_use]
pub fn update_price_filter(filters: &[ProductFilter], min: u64, max: u64) -> Vec<ProductFilter> {
    let mut out: Vec<ProductFilter> = filters.iter().filter(|f| !f.is_price()).cloned().collect();
    out.push(ProductFilter::price(min, max));
    out
}

/// Removes every entry structurally equal to `filter`.
#[must_use]
pub fn remove_filter(filters: &[ProductFilter], filter: &ProductFilter) -> Vec<ProductFilter> {
    filters.iter().filter(|f| *f != filter).cloned().collect()
}

/// Drops all active filters unconditionally.
#[must_use]
pub fn clear_all_filters() -> Vec<ProductFilter> {
    Vec::new()
}

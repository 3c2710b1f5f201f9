//! Option-to-variant resolution over an already-fetched variant collection.
//!
//! Resolution is a pure lookup: no network calls, no side effects, and a
//! selection with no matching variant is `None`, never an error. Option
//! combinations are unique per product by construction; if the data is
//! inconsistent and more than one variant matches, the first match in
//! iteration order wins so callers stay responsive.

use serde::Serialize;
use storekit_core::{ProductOption, ProductVariant, SelectedOption};

/// Resolves the variant matching `desired`, if any.
///
/// A variant matches iff every `{name, value}` pair in `desired` appears in
/// its `selected_options`, order-independent. A partial selection (fewer
/// pairs than the product has options) returns the first variant consistent
/// with it.
#[must_use]
pub fn resolve<'a>(
    variants: &'a [ProductVariant],
    desired: &[SelectedOption],
) -> Option<&'a ProductVariant> {
    variants.iter().find(|v| matches_selection(v, desired))
}

fn matches_selection(variant: &ProductVariant, desired: &[SelectedOption]) -> bool {
    desired.iter().all(|d| variant.has_option(&d.name, &d.value))
}

/// A resolved variant plus whether it lives on a different product page.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVariant<'a> {
    pub variant: &'a ProductVariant,
    /// `true` when the match belongs to a different product handle than the
    /// page being displayed (shared style groupings). The caller renders a
    /// navigable link instead of updating state in place.
    pub is_different_product: bool,
}

/// Resolves `desired` against `variants` and flags cross-product matches
/// relative to `current_handle`.
#[must_use]
pub fn resolve_for_page<'a>(
    variants: &'a [ProductVariant],
    desired: &[SelectedOption],
    current_handle: &str,
) -> Option<ResolvedVariant<'a>> {
    resolve(variants, desired).map(|variant| ResolvedVariant {
        variant,
        is_different_product: variant.product_handle != current_handle,
    })
}

/// Per-value state for one option row in the picker UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValueState {
    pub value: String,
    /// Matches the active selection for this option.
    pub selected: bool,
    /// Some variant carries this value combined with the other currently
    /// chosen options.
    pub exists: bool,
    /// The substituted match exists and is purchasable.
    pub available: bool,
    /// ID of the substituted match, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
}

/// One annotated option row: the option name plus the state of each value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedOption {
    pub name: String,
    pub values: Vec<OptionValueState>,
}

/// Annotates every option value with `{selected, exists, available}` flags
/// against the current selection.
///
/// `exists`/`available` use hold-others-fixed substitution: only this
/// option's value is swapped into the current selection, every other chosen
/// option stays fixed. This matches the one-option-at-a-time picker
/// affordance and avoids re-resolving the full combination space.
#[must_use]
pub fn annotate_options(
    options: &[ProductOption],
    variants: &[ProductVariant],
    current: &[SelectedOption],
) -> Vec<AnnotatedOption> {
    options
        .iter()
        .map(|option| {
            let current_value = current
                .iter()
                .find(|s| s.name == option.name)
                .map(|s| s.value.as_str());

            let values = option
                .values
                .iter()
                .map(|value| {
                    let substituted = substitute(current, &option.name, value);
                    let hit = resolve(variants, &substituted);
                    OptionValueState {
                        value: value.clone(),
                        selected: current_value == Some(value.as_str()),
                        exists: hit.is_some(),
                        available: hit.is_some_and(|v| v.available_for_sale),
                        variant_id: hit.map(|v| v.id.clone()),
                    }
                })
                .collect();

            AnnotatedOption {
                name: option.name.clone(),
                values,
            }
        })
        .collect()
}

/// Returns `current` with `name` forced to `value`, appending the pair if
/// the option was not part of the selection yet.
fn substitute(current: &[SelectedOption], name: &str, value: &str) -> Vec<SelectedOption> {
    let mut out: Vec<SelectedOption> = current
        .iter()
        .filter(|s| s.name != name)
        .cloned()
        .collect();
    out.push(SelectedOption::new(name, value));
    out
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;

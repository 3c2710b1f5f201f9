use super::*;

fn variant(
    id: &str,
    handle: &str,
    pairs: &[(&str, &str)],
    available: bool,
) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        selected_options: pairs
            .iter()
            .map(|(n, v)| SelectedOption::new(*n, *v))
            .collect(),
        available_for_sale: available,
        product_handle: handle.to_string(),
        price: None,
    }
}

fn selection(pairs: &[(&str, &str)]) -> Vec<SelectedOption> {
    pairs
        .iter()
        .map(|(n, v)| SelectedOption::new(*n, *v))
        .collect()
}

/// A 2x2 Color/Size grid on one product, with Blue/L sold out.
fn tee_variants() -> Vec<ProductVariant> {
    vec![
        variant("v1", "aurora-tee", &[("Color", "Red"), ("Size", "M")], true),
        variant("v2", "aurora-tee", &[("Color", "Red"), ("Size", "L")], true),
        variant("v3", "aurora-tee", &[("Color", "Blue"), ("Size", "M")], true),
        variant("v4", "aurora-tee", &[("Color", "Blue"), ("Size", "L")], false),
    ]
}

#[test]
fn full_selection_resolves_exact_variant() {
    let variants = tee_variants();
    let hit = resolve(&variants, &selection(&[("Color", "Blue"), ("Size", "M")]))
        .expect("expected a match");
    assert_eq!(hit.id, "v3");
}

#[test]
fn selection_order_is_irrelevant() {
    let variants = tee_variants();
    let hit = resolve(&variants, &selection(&[("Size", "M"), ("Color", "Blue")]))
        .expect("expected a match");
    assert_eq!(hit.id, "v3");
}

#[test]
fn resolution_is_identity_preserving() {
    let variants = tee_variants();
    let hit = resolve(&variants, &selection(&[("Color", "Red"), ("Size", "L")]))
        .expect("expected a match");
    assert!(std::ptr::eq(hit, &variants[1]));
}

#[test]
fn unmatched_selection_returns_none() {
    let variants = tee_variants();
    assert!(resolve(&variants, &selection(&[("Color", "Green"), ("Size", "M")])).is_none());
}

#[test]
fn empty_collection_returns_none() {
    assert!(resolve(&[], &selection(&[("Color", "Red")])).is_none());
}

#[test]
fn partial_selection_returns_first_consistent_variant() {
    let variants = tee_variants();
    let hit = resolve(&variants, &selection(&[("Color", "Blue")])).expect("expected a match");
    assert_eq!(hit.id, "v3");
}

#[test]
fn empty_selection_returns_first_variant() {
    let variants = tee_variants();
    let hit = resolve(&variants, &[]).expect("expected a match");
    assert_eq!(hit.id, "v1");
}

#[test]
fn duplicate_combination_resolves_first_in_stable_order() {
    // Data-integrity violation: two variants claim the same combination.
    // Resolution must stay deterministic rather than failing.
    let variants = vec![
        variant("dup-a", "aurora-tee", &[("Color", "Red")], true),
        variant("dup-b", "aurora-tee", &[("Color", "Red")], true),
    ];
    let hit = resolve(&variants, &selection(&[("Color", "Red")])).expect("expected a match");
    assert_eq!(hit.id, "dup-a");
}

#[test]
fn same_product_match_is_not_flagged() {
    let variants = tee_variants();
    let resolved = resolve_for_page(
        &variants,
        &selection(&[("Color", "Red"), ("Size", "M")]),
        "aurora-tee",
    )
    .expect("expected a match");
    assert!(!resolved.is_different_product);
}

#[test]
fn cross_product_match_is_flagged() {
    // A shared style grouping: the Linen colorway lives on its own page.
    let mut variants = tee_variants();
    variants.push(variant(
        "v9",
        "aurora-tee-linen",
        &[("Color", "Linen"), ("Size", "M")],
        true,
    ));
    let resolved = resolve_for_page(
        &variants,
        &selection(&[("Color", "Linen"), ("Size", "M")]),
        "aurora-tee",
    )
    .expect("expected a match");
    assert_eq!(resolved.variant.id, "v9");
    assert!(resolved.is_different_product);
}

#[test]
fn resolve_for_page_none_when_no_match() {
    let variants = tee_variants();
    assert!(resolve_for_page(&variants, &selection(&[("Color", "Green")]), "aurora-tee").is_none());
}

fn tee_options() -> Vec<ProductOption> {
    vec![
        ProductOption {
            name: "Color".to_string(),
            values: vec!["Red".to_string(), "Blue".to_string(), "Green".to_string()],
        },
        ProductOption {
            name: "Size".to_string(),
            values: vec!["M".to_string(), "L".to_string()],
        },
    ]
}

#[test]
fn annotate_marks_selected_value() {
    let annotated = annotate_options(
        &tee_options(),
        &tee_variants(),
        &selection(&[("Color", "Red"), ("Size", "M")]),
    );
    let color = &annotated[0];
    assert_eq!(color.name, "Color");
    assert!(color.values[0].selected, "Red should be selected");
    assert!(!color.values[1].selected, "Blue should not be selected");
}

#[test]
fn annotate_holds_other_options_fixed() {
    // With Size=L held fixed, Blue substitutes to v4: exists but sold out.
    let annotated = annotate_options(
        &tee_options(),
        &tee_variants(),
        &selection(&[("Color", "Red"), ("Size", "L")]),
    );
    let blue = &annotated[0].values[1];
    assert_eq!(blue.value, "Blue");
    assert!(blue.exists);
    assert!(!blue.available);
    assert_eq!(blue.variant_id.as_deref(), Some("v4"));
}

#[test]
fn annotate_flags_nonexistent_combination() {
    // No Green variant exists at all.
    let annotated = annotate_options(
        &tee_options(),
        &tee_variants(),
        &selection(&[("Color", "Red"), ("Size", "M")]),
    );
    let green = &annotated[0].values[2];
    assert!(!green.exists);
    assert!(!green.available);
    assert!(green.variant_id.is_none());
}

#[test]
fn annotate_with_partial_selection_appends_substituted_option() {
    // Only Color chosen; Size values are tested against Color=Blue alone.
    let annotated = annotate_options(
        &tee_options(),
        &tee_variants(),
        &selection(&[("Color", "Blue")]),
    );
    let size = &annotated[1];
    let l = &size.values[1];
    assert!(l.exists);
    assert!(!l.available, "Blue/L is sold out");
    assert_eq!(l.variant_id.as_deref(), Some("v4"));
}

#[test]
fn annotate_preserves_schema_order() {
    let annotated = annotate_options(&tee_options(), &tee_variants(), &[]);
    assert_eq!(annotated[0].name, "Color");
    assert_eq!(annotated[1].name, "Size");
    assert_eq!(
        annotated[0]
            .values
            .iter()
            .map(|v| v.value.as_str())
            .collect::<Vec<_>>(),
        vec!["Red", "Blue", "Green"]
    );
}

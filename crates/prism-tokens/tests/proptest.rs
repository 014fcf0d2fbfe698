//! Property-based tests for extraction, classification and palettes.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use prism_tokens::palette::{build_alpha, build_general, step_value};
use prism_tokens::{
    classify, extract, Category, ExtractOptions, PropertyMap, Subcategory, ThemeScopes,
};

// ============================================================================
// Strategies
// ============================================================================

fn token_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "--prism-color-[a-z]{1,6}-[0-9]{2,3}",
        "--prism-color-[a-z]{1,6}-alpha-[0-9]{1,3}",
        "--prism-color-chart-categorical-[0-9]{1,2}",
        "--prism-color-chart-sequential-[a-z]{1,6}-[0-9]{1,2}",
        "--prism-color-chart-[a-z]{1,8}-default",
        "--prism-color-(interactive|background|text|icon|border|outline|elevation)-[a-z]{1,8}",
        "--prism-(gradient|typography|spacing|shadow|border-radius|radius)-[a-z]{1,8}",
        "--color-[a-z]{1,8}",
        "--[a-z]{1,10}",
    ]
}

fn token_value() -> impl Strategy<Value = String> {
    prop_oneof!["#[0-9a-f]{6}", "[0-9]{1,2}px", "var\\(--[a-z]{1,6}\\)"]
}

fn property_map() -> impl Strategy<Value = PropertyMap> {
    prop::collection::btree_map(token_name(), token_value(), 0..40)
}

// ============================================================================
// Classification
// ============================================================================

proptest! {
    /// Classifying the same map twice gives the same catalog.
    #[test]
    fn classification_is_idempotent(map in property_map()) {
        prop_assert_eq!(classify(&map), classify(&map));
    }

    /// Every property lands in exactly one section and once in "All".
    #[test]
    fn classification_covers_every_property(map in property_map()) {
        let catalog = classify(&map);

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for section in catalog.sections() {
            for property in &section.properties {
                *seen.entry(property.name.as_str()).or_default() += 1;
            }
        }
        prop_assert_eq!(seen.len(), map.len());
        prop_assert!(seen.values().all(|&n| n == 1));

        let all: BTreeSet<&str> = catalog.all().iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(all.len(), catalog.all().len());
        prop_assert_eq!(all.len(), map.len());
    }

    /// Chart ramps never show up under Colors/Chart.
    #[test]
    fn chart_ramps_excluded_from_chart_section(map in property_map()) {
        let catalog = classify(&map);
        if let Some(section) = catalog.section(Category::Colors, Some(Subcategory::Chart)) {
            for property in &section.properties {
                prop_assert!(!property.name.starts_with("--prism-color-chart-categorical-"));
                prop_assert!(!property.name.starts_with("--prism-color-chart-sequential-"));
            }
        }
    }
}

// ============================================================================
// Themes
// ============================================================================

proptest! {
    /// Overrides win; everything else keeps its base value.
    #[test]
    fn overrides_take_precedence(base in property_map(), overrides in property_map()) {
        let scopes = ThemeScopes::from_parts(
            base.clone(),
            BTreeMap::from([("dark".to_string(), overrides.clone())]),
        );
        let effective = scopes.effective("dark");

        for (name, value) in &overrides {
            prop_assert_eq!(&effective[name], value);
        }
        for (name, value) in base.iter().filter(|(n, _)| !overrides.contains_key(*n)) {
            prop_assert_eq!(&effective[name], value);
        }
        prop_assert_eq!(scopes.effective("light"), base);
    }

    /// Extraction of a rendered map gives the map back.
    #[test]
    fn extraction_reads_rendered_blocks(map in property_map()) {
        let body: String = map.iter().map(|(k, v)| format!("  {k}: {v};\n")).collect();
        let css = format!("/* tokens */\n:root {{\n{body}}}\n");
        let scopes = extract(&css, &["light"], &ExtractOptions::default());
        prop_assert_eq!(scopes.base(), &map);
    }
}

// ============================================================================
// Palettes
// ============================================================================

proptest! {
    /// Steps ascend numerically within every row, padded or not.
    #[test]
    fn steps_ascend_within_rows(steps in prop::collection::btree_set(0u32..1000, 1..12)) {
        let map: PropertyMap = steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                // Alternate padded and unpadded labels.
                let label = if i % 2 == 0 { format!("{step:03}") } else { format!("{step:02}") };
                (format!("--prism-color-teal-{label}"), "#000".to_string())
            })
            .collect();

        for row in build_general(&map) {
            let values: Vec<u32> = row
                .swatches
                .iter()
                .map(|s| step_value(&s.step).unwrap())
                .collect();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
        }
    }

    /// A property is never in both the alpha and the general set.
    #[test]
    fn alpha_and_general_are_disjoint(map in property_map()) {
        let general: BTreeSet<String> = build_general(&map)
            .into_iter()
            .flat_map(|f| f.swatches.into_iter().map(|s| s.property))
            .collect();
        let alpha: BTreeSet<String> = build_alpha(&map)
            .into_iter()
            .flat_map(|f| f.swatches.into_iter().map(|s| s.property))
            .collect();
        prop_assert!(general.is_disjoint(&alpha));
    }
}

#[test]
fn padded_and_unpadded_steps_compare_equal() {
    assert_eq!(step_value("01"), step_value("1"));
    assert_eq!(step_value("050"), step_value("50"));
}

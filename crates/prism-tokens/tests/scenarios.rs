//! End-to-end behavior of the token pipeline on small stylesheets.

use std::collections::BTreeMap;

use prism_tokens::palette::build_chart;
use prism_tokens::{
    build_palettes, classify, classify_name, classify_themes, extract, load_stylesheet,
    resolve_value, AttemptOutcome, CandidateResolver, Catalog, Category, ExtractOptions,
    FetchError, Fetcher, FileFetcher, LoadError, LoadRequest, SearchPathResolver, Subcategory,
};

const THEMES: &[&str] = &["light", "dark", "highcontrast-light", "highcontrast-dark"];

fn themes() -> Vec<String> {
    THEMES.iter().map(|t| t.to_string()).collect()
}

fn request(themes: &[String]) -> LoadRequest<'_> {
    LoadRequest {
        relative: "css/prism.css",
        themes,
        options: ExtractOptions::default(),
        theme_file_pattern: "prism-{theme}.css",
    }
}

struct Offline;

impl Fetcher for Offline {
    fn fetch(&self, _location: &str) -> Result<String, FetchError> {
        Err(FetchError::Status(404))
    }
}

// ============================================================================
// Extraction and themes
// ============================================================================

#[test]
fn dark_override_wins_over_base() {
    let css = ":root{--prism-spacing-sm:4px;} :root[data-theme='dark']{--prism-spacing-sm:6px;}";
    let scopes = extract(css, THEMES, &ExtractOptions::default());

    assert_eq!(scopes.effective("dark")["--prism-spacing-sm"], "6px");
    assert_eq!(scopes.effective("light")["--prism-spacing-sm"], "4px");
    assert_eq!(scopes.effective("highcontrast-dark")["--prism-spacing-sm"], "4px");
}

#[test]
fn realistic_stylesheet_with_noise() {
    let css = r#"
        /* Generated file. Do not edit. */
        @media (prefers-reduced-motion: reduce) { .x { transition: none; } }
        :root {
            --prism-color-blue-500: #0060e0;
            --prism-color-blue-050: #e0eaff;
            --prism-color-blue-alpha-10: rgba(0, 96, 224, 0.1);
            --prism-color-interactive-primary: var(--prism-color-blue-500);
            --prism-typography-body-family: "Inter", sans-serif;
            --prism-radius-md: 6px;
            --prism-gradient-interactive-hover: linear-gradient(90deg, #fff, #000);
        }
        :root[data-theme="dark"] {
            --prism-color-interactive-primary: var(--prism-color-blue-050);
        }
        :root[data-theme="sepia"] { --prism-radius-md: 99px; }
        .button { color: var(--prism-color-interactive-primary); }
    "#;
    let scopes = extract(css, THEMES, &ExtractOptions::default());

    assert_eq!(scopes.base().len(), 7);
    assert_eq!(scopes.base()["--prism-typography-body-family"], r#""Inter", sans-serif"#);
    assert!(scopes.overrides("sepia").is_none());

    let dark = scopes.effective("dark");
    assert_eq!(resolve_value(&dark["--prism-color-interactive-primary"], &dark), "#e0eaff");

    let catalog = classify(&dark);
    let interactive = catalog
        .section(Category::Colors, Some(Subcategory::Interactive))
        .unwrap();
    assert_eq!(interactive.properties.len(), 1);
    assert!(catalog
        .section(Category::Gradients, Some(Subcategory::Interactive))
        .is_some());
    assert_eq!(catalog.category(Category::Typography).count(), 1);
    assert_eq!(catalog.category(Category::BorderRadius).count(), 1);

    let palettes = build_palettes(scopes.base());
    assert_eq!(palettes.general.len(), 1);
    assert_eq!(palettes.alpha.len(), 1);
    assert_eq!(palettes.alpha[0].swatches[0].step, "10");
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn chart_alias_is_chart_but_ramps_are_not() {
    let alias = classify_name("--prism-color-chart-accent-primary-figure-default");
    assert_eq!(alias.category, Category::Colors);
    assert_eq!(alias.subcategory, Some(Subcategory::Chart));

    let css = ":root{--prism-color-chart-accent-primary-figure-default:#123;\
               --prism-color-chart-categorical-01:#456;\
               --prism-color-chart-sequential-info-01:#789;}";
    let scopes = extract(css, THEMES, &ExtractOptions::default());
    let catalog = classify(scopes.base());

    let chart = catalog
        .section(Category::Colors, Some(Subcategory::Chart))
        .unwrap();
    let names: Vec<&str> = chart.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["--prism-color-chart-accent-primary-figure-default"]);
    assert_eq!(catalog.all().len(), 3);
}

#[test]
fn every_theme_is_classified() {
    let css = ":root{--prism-spacing-sm:4px;--prism-color-text-default:#111;}\
               :root[data-theme=highcontrast-dark]{--prism-color-text-default:#fff;}";
    let scopes = extract(css, THEMES, &ExtractOptions::default());
    let catalogs = classify_themes(&scopes, THEMES);

    assert_eq!(catalogs.len(), THEMES.len());
    assert_eq!(catalogs["highcontrast-dark"].get("--prism-color-text-default").unwrap().value, "#fff");
    assert_eq!(catalogs["light"].get("--prism-color-text-default").unwrap().value, "#111");
}

// ============================================================================
// Palettes
// ============================================================================

#[test]
fn sequential_chart_ramp() {
    let css = ":root{--prism-color-chart-sequential-info-01:#e0f2fe;--prism-color-chart-sequential-info-02:#b3e5fc;}";
    let scopes = extract(css, THEMES, &ExtractOptions::default());
    let rows = build_chart(scopes.base());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "info");
    let steps: Vec<(&str, &str)> = rows[0]
        .swatches
        .iter()
        .map(|s| (s.step.as_str(), s.value.as_str()))
        .collect();
    assert_eq!(steps, vec![("01", "#e0f2fe"), ("02", "#b3e5fc")]);
}

#[test]
fn swatch_follows_active_theme() {
    let css = ":root{--prism-color-red-500:#e00;} :root[data-theme=dark]{--prism-color-red-500:#f66;}";
    let scopes = extract(css, THEMES, &ExtractOptions::default());
    let palettes = build_palettes(scopes.base());
    let swatch = &palettes.general[0].swatches[0];

    assert_eq!(swatch.resolve(&scopes.effective("light")), "#e00");
    assert_eq!(swatch.resolve(&scopes.effective("dark")), "#f66");
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn unreachable_stylesheet_lists_every_candidate() {
    let themes = themes();
    let resolver = SearchPathResolver::new(["dist", "public"]);
    let err = load_stylesheet(&request(&themes), &resolver, &Offline).unwrap_err();

    let expected = resolver.candidates("css/prism.css");
    assert_eq!(expected.len(), 3);
    let attempted: Vec<&str> = err.attempts().iter().map(|a| a.location.as_str()).collect();
    assert_eq!(attempted, expected.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(err
        .attempts()
        .iter()
        .all(|a| a.outcome == AttemptOutcome::Failed(FetchError::Status(404))));

    let message = err.to_string();
    for location in &expected {
        assert!(message.contains(location.as_str()), "{message}");
    }

    // With nothing loaded, every theme renders the empty state.
    let catalogs: BTreeMap<String, Catalog> =
        themes.iter().map(|t| (t.clone(), Catalog::empty())).collect();
    assert!(catalogs.values().all(Catalog::is_empty));
    assert!(matches!(err, LoadError::Unreachable { .. }));
}

#[test]
fn loads_from_disk_with_variant_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let css_dir = dir.path().join("dist").join("css");
    std::fs::create_dir_all(&css_dir).unwrap();
    std::fs::write(
        css_dir.join("prism.css"),
        ":root{--prism-spacing-sm:4px;--prism-color-text-default:#111;}",
    )
    .unwrap();
    std::fs::write(
        css_dir.join("prism-dark.css"),
        ":root[data-theme=dark]{--prism-color-text-default:#eee;}",
    )
    .unwrap();

    let themes = themes();
    let resolver = SearchPathResolver::new([dir.path().join("public"), dir.path().join("dist")]);
    let loaded = load_stylesheet(&request(&themes), &resolver, &FileFetcher).unwrap();

    assert_eq!(loaded.attempts.len(), 2);
    assert!(loaded.location.ends_with("prism.css"));
    assert_eq!(loaded.scopes.effective("dark")["--prism-color-text-default"], "#eee");
    assert_eq!(loaded.scopes.effective("light")["--prism-color-text-default"], "#111");

    let failed_variants = loaded
        .variants
        .iter()
        .filter(|a| a.outcome != AttemptOutcome::Loaded)
        .count();
    assert_eq!(failed_variants, 2);
}

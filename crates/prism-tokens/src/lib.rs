//! Prism tokens - design-token extraction and cataloguing.
//!
//! Reads the custom properties (`--name: value;`) a design system ships in its
//! stylesheet and turns them into data a documentation front end can render:
//!
//! - **Extraction**: `:root` and `:root[data-theme=NAME]` blocks become one base
//!   map plus one override map per theme ([`extract`], [`ThemeScopes`])
//! - **Classification**: every effective property lands in exactly one
//!   category/subcategory section ([`classify`], [`Catalog`])
//! - **Palettes**: numbered color ramps are grouped into families of swatches
//!   ([`build_palettes`])
//! - **Resolution**: `var()` references are followed through the active theme
//!   ([`resolve_value`])
//! - **Loading**: the stylesheet is found by trying candidate locations in order
//!   ([`load_stylesheet`])
//!
//! # Quick Start
//!
//! ```rust
//! use prism_tokens::{build_palettes, classify, extract, Category, ExtractOptions};
//!
//! let css = r#"
//!     :root {
//!         --prism-color-blue-500: #0060e0;
//!         --prism-color-blue-050: #e0eaff;
//!         --prism-color-background-default: var(--prism-color-blue-050);
//!         --prism-spacing-md: 8px;
//!     }
//!     :root[data-theme="dark"] {
//!         --prism-color-background-default: #10141a;
//!     }
//! "#;
//!
//! let scopes = extract(css, &["light", "dark"], &ExtractOptions::default());
//!
//! let dark = classify(&scopes.effective("dark"));
//! assert_eq!(dark.category(Category::Spacing).count(), 1);
//! assert_eq!(dark.get("--prism-color-background-default").unwrap().value, "#10141a");
//!
//! let palettes = build_palettes(scopes.base());
//! assert_eq!(palettes.general[0].label, "Blue");
//! assert_eq!(palettes.general[0].swatches[0].step, "050");
//! ```
//!
//! # Themes
//!
//! The base scope is the `light` theme. Any other theme is the base map with its
//! overrides applied on top, so an override always wins over the base value of
//! the same name. Blocks for themes that are not configured are ignored.
//!
//! # Failure handling
//!
//! Extraction never fails: malformed input produces fewer properties, never an
//! error. Loading reports every attempted location in [`LoadError`].

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod palette;
pub mod prefix;
pub mod preference;
pub mod property;
pub mod resolve;
pub mod scheme;
pub mod source;
pub mod theme;

pub use classify::{
    classify, classify_name, classify_themes, Catalog, Category, Placement, Section, Subcategory,
};
pub use config::PrismConfig;
pub use error::{ConfigError, FetchError, LoadError};
pub use extract::{extract, ExtractOptions, DEFAULT_MIN_DECLARATIONS};
pub use palette::{build_palettes, Family, PaletteKind, Palettes, Swatch};
pub use preference::{initial_theme, PreferenceStore, STORAGE_KEY};
pub use property::{Property, PropertyMap, TokenType};
pub use resolve::{resolve_property, resolve_value};
pub use scheme::{detect_color_scheme, set_scheme_detector, ColorScheme};
pub use source::{
    load_stylesheet, Attempt, AttemptOutcome, CandidateResolver, FileFetcher, Fetcher,
    LoadRequest, LoadedStylesheet, SearchPathResolver,
};
pub use theme::{ThemeScopes, BASE_THEME};

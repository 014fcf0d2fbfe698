//! Token extraction: stylesheet text to per-scope property maps.
//!
//! Two kinds of blocks are recognised:
//!
//! - base blocks, whose selector is exactly `:root`
//! - theme blocks, `:root[data-theme=NAME]` with the name quoted or bare
//!
//! Bodies are located with the brace-depth [`scanner`] and split with the
//! [`declarations`] pipeline. Blocks of the same scope merge in encounter order,
//! so a later declaration of a name replaces an earlier one.
//!
//! ```rust
//! use prism_tokens::{extract, ExtractOptions};
//!
//! let css = ":root{--prism-spacing-sm:4px;} :root[data-theme='dark']{--prism-spacing-sm:6px;}";
//! let scopes = extract(css, &["dark"], &ExtractOptions::default());
//!
//! assert_eq!(scopes.base()["--prism-spacing-sm"], "4px");
//! assert_eq!(scopes.effective("dark")["--prism-spacing-sm"], "6px");
//! ```

pub mod declarations;
pub mod scanner;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

pub use declarations::{parse_declarations, Declaration, Plausibility};

use crate::theme::{ThemeScopes, BASE_THEME};

/// Default expectation for the declaration validator.
///
/// A block that yields fewer declarations than this is re-read by the fallback
/// splitter. Stylesheets with a known token volume should raise it through
/// configuration.
pub const DEFAULT_MIN_DECLARATIONS: usize = 1;

static BASE_SELECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r":root\s*\{").unwrap());

static THEME_SELECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#":root\s*\[\s*data-theme\s*=\s*(?:"([^"]*)"|'([^']*)'|([A-Za-z0-9_-]+))\s*\]\s*\{"#,
    )
    .unwrap()
});

/// Settings for the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Minimum declarations a block is expected to hold before the fallback
    /// splitter is tried.
    pub min_declarations: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_declarations: DEFAULT_MIN_DECLARATIONS,
        }
    }
}

/// Extracts base and theme-override property maps from stylesheet text.
///
/// Only themes listed in `themes` are collected; blocks for other theme names
/// are ignored. The base theme name is accepted in `themes` and skipped, since
/// its values live in the base map.
pub fn extract<S: AsRef<str>>(css: &str, themes: &[S], options: &ExtractOptions) -> ThemeScopes {
    let css = declarations::strip_comments(css);
    let mut scopes = ThemeScopes::new();

    for body in base_blocks(&css) {
        scopes.extend_base(into_pairs(parse_declarations(body, options)));
    }

    for (theme, body) in theme_blocks(&css) {
        if theme == BASE_THEME || !themes.iter().any(|t| t.as_ref() == theme) {
            debug!(theme, "skipping block for undeclared theme");
            continue;
        }
        scopes.extend_override(theme, into_pairs(parse_declarations(body, options)));
    }

    debug!(
        base = scopes.base().len(),
        themes = scopes.override_names().count(),
        "extracted custom properties"
    );
    scopes
}

/// Bodies of every `:root { ... }` block, in encounter order.
pub fn base_blocks(css: &str) -> Vec<&str> {
    let mut bodies = Vec::new();
    let mut pos = 0;
    while let Some(found) = BASE_SELECTOR.find_at(css, pos) {
        let open = found.end() - 1;
        let Some((body, end)) = scanner::block_with_end(css, open) else {
            break;
        };
        bodies.push(body);
        pos = end;
    }
    bodies
}

/// `(theme name, body)` for every `:root[data-theme=...] { ... }` block.
pub fn theme_blocks(css: &str) -> Vec<(&str, &str)> {
    let mut blocks = Vec::new();
    let mut pos = 0;
    while let Some(caps) = THEME_SELECTOR.captures_at(css, pos) {
        let (Some(whole), Some(name)) = (
            caps.get(0),
            caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)),
        ) else {
            break;
        };
        let open = whole.end() - 1;
        let Some((body, end)) = scanner::block_with_end(css, open) else {
            break;
        };
        blocks.push((name.as_str().trim(), body));
        pos = end;
    }
    blocks
}

fn into_pairs(decls: Vec<Declaration>) -> impl Iterator<Item = (String, String)> {
    decls.into_iter().map(|d| (d.name, d.value))
}

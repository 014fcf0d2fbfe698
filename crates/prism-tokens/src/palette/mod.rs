//! Palette descriptors.
//!
//! Three independent sets are built from the base theme:
//!
//! | Set | Property pattern | Step |
//! |-----|------------------|------|
//! | general | `--prism-color-<family>-<step>` | 2-3 digits |
//! | alpha | `--prism-color-<family>-alpha-<step>` | 2-3 digits |
//! | chart | `--prism-color-chart-sequential-<family>-<step>` | 2 digits |
//! | chart | `--prism-color-chart-categorical-<step>` | 1-3 digits |
//!
//! General skips alpha variants and anything under `--prism-color-chart-`, so a
//! property never appears in more than one set. Rows are ordered by a per-set
//! preference list, then by label.
//!
//! ```rust
//! use prism_tokens::{build_palettes, extract, ExtractOptions};
//!
//! let css = ":root{--prism-color-chart-sequential-info-02:#b3e5fc;--prism-color-chart-sequential-info-01:#e0f2fe;}";
//! let scopes = extract(css, &[] as &[&str], &ExtractOptions::default());
//! let palettes = build_palettes(scopes.base());
//!
//! let info = &palettes.chart[0];
//! assert_eq!(info.id, "info");
//! assert_eq!(info.swatches[0].step, "01");
//! assert_eq!(info.swatches[1].value, "#b3e5fc");
//! ```

pub mod family;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use family::{compare_steps, display_label, step_value, Family, Swatch};

use crate::prefix;
use crate::property::PropertyMap;

/// Preferred row order of the general set.
pub const GENERAL_ORDER: &[&str] = &[
    "neutral",
    "brand",
    "brand-sunset",
    "brand-ocean",
    "info",
    "success",
    "warning",
    "critical",
    "accent",
];

/// Preferred row order of the alpha set.
pub const ALPHA_ORDER: &[&str] = &[
    "neutral", "white", "black", "brand", "info", "success", "warning", "critical",
];

/// Preferred row order of the chart set.
pub const CHART_ORDER: &[&str] = &[
    "categorical",
    "info",
    "success",
    "warning",
    "critical",
    "brand",
    "neutral",
];

/// Family id given to the categorical chart ramp.
pub const CATEGORICAL_FAMILY: &str = "categorical";

static GENERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--prism-color-([A-Za-z0-9-]+)-(\d{2,3})$").unwrap());

static ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--prism-color-([A-Za-z0-9-]+)-alpha-(\d{2,3})$").unwrap());

static CHART_SEQUENTIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^--prism-color-chart-sequential-([A-Za-z0-9-]+)-(\d{2})$").unwrap()
});

static CHART_CATEGORICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--prism-color-chart-categorical-(\d{1,3})$").unwrap());

/// Which palette set to build or display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    General,
    Alpha,
    Chart,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 3] = [PaletteKind::General, PaletteKind::Alpha, PaletteKind::Chart];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::General => "general",
            PaletteKind::Alpha => "alpha",
            PaletteKind::Chart => "chart",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "general" => Ok(PaletteKind::General),
            "alpha" => Ok(PaletteKind::Alpha),
            "chart" => Ok(PaletteKind::Chart),
            _ => Err(format!("unknown palette set '{}'", s)),
        }
    }
}

/// The three palette sets of one stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Palettes {
    pub general: Vec<Family>,
    pub alpha: Vec<Family>,
    pub chart: Vec<Family>,
}

impl Palettes {
    pub fn get(&self, kind: PaletteKind) -> &[Family] {
        match kind {
            PaletteKind::General => &self.general,
            PaletteKind::Alpha => &self.alpha,
            PaletteKind::Chart => &self.chart,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.alpha.is_empty() && self.chart.is_empty()
    }
}

/// Builds all three sets from the base effective map.
pub fn build_palettes(base: &PropertyMap) -> Palettes {
    Palettes {
        general: build_general(base),
        alpha: build_alpha(base),
        chart: build_chart(base),
    }
}

/// Solid semantic ramps.
pub fn build_general(base: &PropertyMap) -> Vec<Family> {
    let mut groups = Groups::new();
    for (name, value) in base {
        if name.contains(prefix::ALPHA_INFIX) || name.starts_with(prefix::COLOR_CHART) {
            continue;
        }
        if let Some(caps) = GENERAL.captures(name) {
            groups.push(&caps[1], &caps[2], name, value);
        }
    }
    groups.into_rows(GENERAL_ORDER)
}

/// Transparency-variant ramps.
pub fn build_alpha(base: &PropertyMap) -> Vec<Family> {
    let mut groups = Groups::new();
    for (name, value) in base {
        if name.starts_with(prefix::COLOR_CHART) {
            continue;
        }
        if let Some(caps) = ALPHA.captures(name) {
            groups.push(&caps[1], &caps[2], name, value);
        }
    }
    groups.into_rows(ALPHA_ORDER)
}

/// Sequential and categorical chart ramps, with steps padded to two digits.
pub fn build_chart(base: &PropertyMap) -> Vec<Family> {
    let mut groups = Groups::new();
    for (name, value) in base {
        if let Some(caps) = CHART_SEQUENTIAL.captures(name) {
            groups.push(&caps[1], &caps[2], name, value);
        } else if let Some(caps) = CHART_CATEGORICAL.captures(name) {
            groups.push(CATEGORICAL_FAMILY, &caps[1], name, value);
        }
    }
    let mut rows = groups.into_rows(CHART_ORDER);
    for row in &mut rows {
        for swatch in &mut row.swatches {
            if let Some(n) = swatch.numeric_step() {
                swatch.step = format!("{:02}", n);
            }
        }
    }
    rows
}

/// Swatches grouped by family id.
struct Groups(BTreeMap<String, Vec<Swatch>>);

impl Groups {
    fn new() -> Self {
        Self(BTreeMap::new())
    }

    fn push(&mut self, family: &str, step: &str, property: &str, value: &str) {
        self.0.entry(family.to_string()).or_default().push(Swatch {
            step: step.to_string(),
            value: value.to_string(),
            property: property.to_string(),
        });
    }

    fn into_rows(self, preferred: &[&str]) -> Vec<Family> {
        let mut rows: Vec<Family> = self
            .0
            .into_iter()
            .map(|(id, swatches)| Family::new(id, swatches))
            .collect();
        rows.sort_by(|a, b| {
            rank(preferred, &a.id)
                .cmp(&rank(preferred, &b.id))
                .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
        });
        rows
    }
}

fn rank(preferred: &[&str], id: &str) -> usize {
    preferred
        .iter()
        .position(|p| *p == id)
        .unwrap_or(preferred.len())
}

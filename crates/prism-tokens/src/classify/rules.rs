//! Classification taxonomy and rule table.
//!
//! Prefixes overlap (`--prism-color-chart-categorical-` is also a
//! `--prism-color-chart-` and a `--prism-color-` name), so the order of
//! [`RULES`] is the semantics: the first matching rule decides.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::prefix;

/// Top-level display category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Colors,
    Gradients,
    Typography,
    Spacing,
    Shadows,
    #[serde(rename = "Border Radius")]
    BorderRadius,
    Other,
}

impl Category {
    /// Display order of the categories.
    pub const ORDER: [Category; 7] = [
        Category::Colors,
        Category::Gradients,
        Category::Typography,
        Category::Spacing,
        Category::Shadows,
        Category::BorderRadius,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Colors => "Colors",
            Category::Gradients => "Gradients",
            Category::Typography => "Typography",
            Category::Spacing => "Spacing",
            Category::Shadows => "Shadows",
            Category::BorderRadius => "Border Radius",
            Category::Other => "Other",
        }
    }

    /// Subcategories of this category, in display order. Empty for categories
    /// that are not split.
    pub fn subcategories(self) -> &'static [Subcategory] {
        match self {
            Category::Colors => &[
                Subcategory::Interactive,
                Subcategory::Background,
                Subcategory::Text,
                Subcategory::Icon,
                Subcategory::Border,
                Subcategory::Elevation,
                Subcategory::Chart,
                Subcategory::Palette,
                Subcategory::Legacy,
            ],
            Category::Gradients => &[Subcategory::Interactive, Subcategory::General],
            _ => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a label case-insensitively; hyphens, underscores and spaces are
    /// interchangeable (`border-radius` matches "Border Radius").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ORDER
            .into_iter()
            .find(|c| normalize(c.label()) == wanted)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Second-level grouping inside Colors and Gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Subcategory {
    Interactive,
    Background,
    Text,
    Icon,
    Border,
    Elevation,
    Chart,
    Palette,
    Legacy,
    General,
}

impl Subcategory {
    pub fn label(self) -> &'static str {
        match self {
            Subcategory::Interactive => "Interactive",
            Subcategory::Background => "Background",
            Subcategory::Text => "Text",
            Subcategory::Icon => "Icon",
            Subcategory::Border => "Border",
            Subcategory::Elevation => "Elevation",
            Subcategory::Chart => "Chart",
            Subcategory::Palette => "Palette",
            Subcategory::Legacy => "Legacy",
            Subcategory::General => "General",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a property lands in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Placement {
    pub category: Category,
    pub subcategory: Option<Subcategory>,
}

impl Placement {
    pub const fn new(category: Category, subcategory: Option<Subcategory>) -> Self {
        Self {
            category,
            subcategory,
        }
    }

    /// Placement for names no rule matches.
    pub const OTHER: Placement = Placement::new(Category::Other, None);

    /// Every placement in display order.
    pub fn display_order() -> Vec<Placement> {
        Category::ORDER
            .into_iter()
            .flat_map(|category| {
                let subs = category.subcategories();
                if subs.is_empty() {
                    vec![Placement::new(category, None)]
                } else {
                    subs.iter()
                        .map(|sub| Placement::new(category, Some(*sub)))
                        .collect()
                }
            })
            .collect()
    }
}

/// Predicate over a property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Prefix(&'static str),
    /// Name starts with the prefix and contains the needle.
    PrefixContaining(&'static str, &'static str),
}

impl NameMatch {
    pub fn matches(self, name: &str) -> bool {
        match self {
            NameMatch::Prefix(p) => name.starts_with(p),
            NameMatch::PrefixContaining(p, needle) => name.starts_with(p) && name.contains(needle),
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub predicate: NameMatch,
    pub placement: Placement,
}

const fn rule(predicate: NameMatch, category: Category, sub: Option<Subcategory>) -> Rule {
    Rule {
        predicate,
        placement: Placement::new(category, sub),
    }
}

use Category as C;
use NameMatch::{Prefix, PrefixContaining};
use Subcategory as S;

/// Classification rules in priority order.
pub const RULES: &[Rule] = &[
    // Explicit type prefixes.
    rule(
        PrefixContaining(prefix::GRADIENT, "interactive"),
        C::Gradients,
        Some(S::Interactive),
    ),
    rule(Prefix(prefix::GRADIENT), C::Gradients, Some(S::General)),
    rule(Prefix(prefix::TYPOGRAPHY), C::Typography, None),
    rule(Prefix(prefix::SPACING), C::Spacing, None),
    rule(Prefix(prefix::SHADOW), C::Shadows, None),
    rule(Prefix(prefix::BORDER_RADIUS), C::BorderRadius, None),
    rule(Prefix(prefix::BORDER_RADIUS_LEGACY), C::BorderRadius, None),
    // Chart ramps belong to the palette explorer, never to Colors/Chart.
    rule(Prefix(prefix::CHART_CATEGORICAL), C::Colors, Some(S::Palette)),
    rule(Prefix(prefix::CHART_SEQUENTIAL), C::Colors, Some(S::Palette)),
    // Semantic colors.
    rule(Prefix(prefix::COLOR_INTERACTIVE), C::Colors, Some(S::Interactive)),
    rule(Prefix(prefix::COLOR_BACKGROUND), C::Colors, Some(S::Background)),
    rule(Prefix(prefix::COLOR_TEXT), C::Colors, Some(S::Text)),
    rule(Prefix(prefix::COLOR_ICON), C::Colors, Some(S::Icon)),
    rule(Prefix(prefix::COLOR_BORDER), C::Colors, Some(S::Border)),
    rule(Prefix(prefix::COLOR_OUTLINE), C::Colors, Some(S::Border)),
    rule(Prefix(prefix::COLOR_ELEVATION), C::Colors, Some(S::Elevation)),
    rule(Prefix(prefix::COLOR_CHART), C::Colors, Some(S::Chart)),
    rule(Prefix(prefix::COLOR), C::Colors, Some(S::Palette)),
    rule(Prefix(prefix::COLOR_LEGACY), C::Colors, Some(S::Legacy)),
];

/// Classifies a property name with [`RULES`]; unmatched names go to Other.
pub fn classify_name(name: &str) -> Placement {
    RULES
        .iter()
        .find(|r| r.predicate.matches(name))
        .map(|r| r.placement)
        .unwrap_or(Placement::OTHER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str) -> (Category, Option<Subcategory>) {
        let p = classify_name(name);
        (p.category, p.subcategory)
    }

    #[test]
    fn test_type_prefixes() {
        assert_eq!(place("--prism-typography-h1-size"), (C::Typography, None));
        assert_eq!(place("--prism-spacing-lg"), (C::Spacing, None));
        assert_eq!(place("--prism-shadow-overlay"), (C::Shadows, None));
        assert_eq!(place("--prism-border-radius-sm"), (C::BorderRadius, None));
        assert_eq!(place("--prism-radius-pill"), (C::BorderRadius, None));
    }

    #[test]
    fn test_gradient_split() {
        assert_eq!(
            place("--prism-gradient-interactive-primary"),
            (C::Gradients, Some(S::Interactive))
        );
        assert_eq!(
            place("--prism-gradient-brand-sunset"),
            (C::Gradients, Some(S::General))
        );
    }

    #[test]
    fn test_color_subcategories() {
        assert_eq!(
            place("--prism-color-interactive-primary-default"),
            (C::Colors, Some(S::Interactive))
        );
        assert_eq!(
            place("--prism-color-background-surface"),
            (C::Colors, Some(S::Background))
        );
        assert_eq!(place("--prism-color-text-muted"), (C::Colors, Some(S::Text)));
        assert_eq!(place("--prism-color-icon-info"), (C::Colors, Some(S::Icon)));
        assert_eq!(
            place("--prism-color-border-subtle"),
            (C::Colors, Some(S::Border))
        );
        assert_eq!(
            place("--prism-color-outline-focus"),
            (C::Colors, Some(S::Border))
        );
        assert_eq!(
            place("--prism-color-elevation-raised"),
            (C::Colors, Some(S::Elevation))
        );
        assert_eq!(place("--prism-color-info-500"), (C::Colors, Some(S::Palette)));
        assert_eq!(place("--color-blue"), (C::Colors, Some(S::Legacy)));
    }

    #[test]
    fn test_chart_aliases_and_ramps() {
        assert_eq!(
            place("--prism-color-chart-accent-primary-figure-default"),
            (C::Colors, Some(S::Chart))
        );
        assert_ne!(
            place("--prism-color-chart-categorical-01").1,
            Some(S::Chart)
        );
        assert_ne!(
            place("--prism-color-chart-sequential-info-01").1,
            Some(S::Chart)
        );
    }

    #[test]
    fn test_unmatched_goes_to_other() {
        assert_eq!(classify_name("--page-max-width"), Placement::OTHER);
        assert_eq!(classify_name("--prism-z-index-modal"), Placement::OTHER);
    }

    #[test]
    fn test_rule_placements_are_in_display_order() {
        let order = Placement::display_order();
        for rule in RULES {
            assert!(order.contains(&rule.placement), "{:?}", rule);
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("colors".parse::<Category>(), Ok(C::Colors));
        assert_eq!("border-radius".parse::<Category>(), Ok(C::BorderRadius));
        assert_eq!("Border Radius".parse::<Category>(), Ok(C::BorderRadius));
        assert!("widgets".parse::<Category>().is_err());
    }
}

//! Palette rows and swatches.

use std::cmp::Ordering;

use serde::Serialize;

use crate::property::PropertyMap;
use crate::resolve::resolve_value;

/// One color step of a ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Step label as displayed, e.g. `"500"` or `"01"`.
    pub step: String,
    /// Base-theme value, used when the active theme has no value for the
    /// property.
    pub value: String,
    /// Source property name.
    pub property: String,
}

impl Swatch {
    /// Numeric value of the step, or `None` if the label is not a number.
    pub fn numeric_step(&self) -> Option<u32> {
        step_value(&self.step)
    }

    /// Value to display for the given theme.
    ///
    /// Re-reads the property from the theme's effective map and expands any
    /// `var()` references, so the swatch follows the active theme even though
    /// the row structure was built from the base theme.
    pub fn resolve(&self, effective: &PropertyMap) -> String {
        match effective.get(&self.property) {
            Some(raw) => resolve_value(raw, effective),
            None => resolve_value(&self.value, effective),
        }
    }
}

/// A named ramp of swatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    pub id: String,
    pub label: String,
    pub swatches: Vec<Swatch>,
}

impl Family {
    pub(crate) fn new(id: impl Into<String>, mut swatches: Vec<Swatch>) -> Self {
        let id = id.into();
        swatches.sort_by(|a, b| compare_steps(&a.step, &b.step));
        Self {
            label: display_label(&id),
            id,
            swatches,
        }
    }
}

/// Parses a step label; leading zeros are ignored (`"01"` and `"1"` are both 1).
pub fn step_value(step: &str) -> Option<u32> {
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = step.trim_start_matches('0');
    if trimmed.is_empty() {
        Some(0)
    } else {
        trimmed.parse().ok()
    }
}

/// Ascending numeric order; labels that are not numbers sort last, and equal
/// numbers fall back to the label so the order is total.
pub fn compare_steps(a: &str, b: &str) -> Ordering {
    match (step_value(a), step_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Turns a family id into a display label: `brand-sunset` becomes
/// `Brand Sunset`.
pub fn display_label(id: &str) -> String {
    id.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Token classification.
//!
//! [`classify`] turns one theme's effective map into a [`Catalog`]: properties
//! grouped into sections by [`Placement`], plus a flat "All" view. Both follow
//! the fixed display order of [`Category::ORDER`] and
//! [`Category::subcategories`], with names sorted within each section.
//!
//! Classification depends only on property names, so the same name lands in
//! the same section for every theme.

pub mod rules;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

pub use rules::{classify_name, Category, NameMatch, Placement, Rule, Subcategory, RULES};

use crate::property::{Property, PropertyMap};
use crate::theme::ThemeScopes;

/// Properties sharing one placement, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,
    pub properties: Vec<Property>,
}

impl Section {
    pub fn placement(&self) -> Placement {
        Placement::new(self.category, self.subcategory)
    }

    /// Heading used by text views, e.g. "Colors / Interactive".
    pub fn title(&self) -> String {
        match self.subcategory {
            Some(sub) => format!("{} / {}", self.category, sub),
            None => self.category.to_string(),
        }
    }
}

/// Classified, ordered view of one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    sections: Vec<Section>,
    all: Vec<Property>,
}

impl Catalog {
    /// A catalog with no properties, used as the empty-state view.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Non-empty sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The synthetic "All" view.
    pub fn all(&self) -> &[Property] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.all.iter().find(|p| p.name == name)
    }

    /// Returns the section for a placement, if it holds any property.
    pub fn section(&self, category: Category, subcategory: Option<Subcategory>) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.category == category && s.subcategory == subcategory)
    }

    /// All sections of one category, in display order.
    pub fn category(&self, category: Category) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.category == category)
    }

    /// Keeps only properties whose name or raw value contains `query`,
    /// compared case-insensitively. Ordering is preserved and empty sections
    /// are dropped. An empty query keeps everything.
    pub fn filter(&self, query: &str) -> Catalog {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.clone();
        }
        let keep = |p: &Property| {
            p.name.to_lowercase().contains(&query) || p.value.to_lowercase().contains(&query)
        };

        let sections = self
            .sections
            .iter()
            .filter_map(|s| {
                let properties: Vec<Property> =
                    s.properties.iter().filter(|p| keep(p)).cloned().collect();
                (!properties.is_empty()).then(|| Section {
                    category: s.category,
                    subcategory: s.subcategory,
                    properties,
                })
            })
            .collect();
        let all = self.all.iter().filter(|p| keep(p)).cloned().collect();
        Catalog { sections, all }
    }
}

/// Classifies an effective property map.
pub fn classify(effective: &PropertyMap) -> Catalog {
    let mut groups: BTreeMap<Placement, Vec<Property>> = BTreeMap::new();
    for (name, value) in effective {
        groups
            .entry(classify_name(name))
            .or_default()
            .push(Property::new(name.as_str(), value.as_str()));
    }

    let mut sections = Vec::with_capacity(groups.len());
    for placement in Placement::display_order() {
        if let Some(properties) = groups.remove(&placement) {
            sections.push(section(placement, properties));
        }
    }
    // Placements outside the declared traversal keep their properties, after
    // everything else.
    for (placement, properties) in groups {
        warn!(?placement, count = properties.len(), "placement outside display order");
        sections.push(section(placement, properties));
    }

    let all = sections
        .iter()
        .flat_map(|s| s.properties.iter().cloned())
        .collect();
    Catalog { sections, all }
}

/// Classifies the effective map of every listed theme.
pub fn classify_themes<S: AsRef<str>>(
    scopes: &ThemeScopes,
    themes: &[S],
) -> BTreeMap<String, Catalog> {
    themes
        .iter()
        .map(|t| (t.as_ref().to_string(), classify(&scopes.effective(t.as_ref()))))
        .collect()
}

fn section(placement: Placement, mut properties: Vec<Property>) -> Section {
    properties.sort_by(|a, b| a.name.cmp(&b.name));
    Section {
        category: placement.category,
        subcategory: placement.subcategory,
        properties,
    }
}

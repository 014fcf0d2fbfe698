//! Theme scopes and effective property maps.
//!
//! A stylesheet defines one base scope (the implicit `light` theme) and any
//! number of partial override scopes. A theme's effective map is the base map
//! with that theme's overrides applied per name:
//!
//! 1. Start with every base declaration
//! 2. Each override entry replaces the base value of the same name
//! 3. Names without an override keep their base value
//!
//! Effective maps are computed on demand and returned by value. Nothing here is
//! mutated after loading, so a theme switch simply asks for another map.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::property::PropertyMap;

/// Name of the implicit base theme.
pub const BASE_THEME: &str = "light";

/// Base declarations plus per-theme overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeScopes {
    base: PropertyMap,
    overrides: BTreeMap<String, PropertyMap>,
}

impl ThemeScopes {
    /// Creates scopes with an empty base and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(base: PropertyMap, overrides: BTreeMap<String, PropertyMap>) -> Self {
        Self { base, overrides }
    }

    /// Returns the base declarations.
    pub fn base(&self) -> &PropertyMap {
        &self.base
    }

    /// Returns the raw override map of a theme, if the theme declared any.
    pub fn overrides(&self, theme: &str) -> Option<&PropertyMap> {
        self.overrides.get(theme)
    }

    /// Names of the themes that carry overrides, sorted.
    pub fn override_names(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }

    /// Returns `true` if no base declarations were found.
    ///
    /// Loaders treat this as a failed load.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Merges declarations into the base scope; later values win.
    pub fn extend_base<I>(&mut self, declarations: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.base.extend(declarations);
    }

    /// Merges declarations into a theme's override scope; later values win.
    pub fn extend_override<I>(&mut self, theme: &str, declarations: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.overrides
            .entry(theme.to_string())
            .or_default()
            .extend(declarations);
    }

    /// Computes the effective map for a theme.
    ///
    /// The base theme, and any theme without overrides, resolves to a copy of
    /// the base map.
    pub fn effective(&self, theme: &str) -> PropertyMap {
        let mut map = self.base.clone();
        if theme != BASE_THEME {
            if let Some(overrides) = self.overrides.get(theme) {
                map.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        map
    }

    /// Computes effective maps for several themes at once.
    pub fn effective_maps<S: AsRef<str>>(&self, themes: &[S]) -> BTreeMap<String, PropertyMap> {
        themes
            .iter()
            .map(|t| (t.as_ref().to_string(), self.effective(t.as_ref())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn scopes() -> ThemeScopes {
        let mut overrides = BTreeMap::new();
        overrides.insert("dark".to_string(), map(&[("--bg", "#000"), ("--new", "1")]));
        ThemeScopes::from_parts(map(&[("--bg", "#fff"), ("--fg", "#111")]), overrides)
    }

    #[test]
    fn test_override_wins() {
        let dark = scopes().effective("dark");
        assert_eq!(dark["--bg"], "#000");
        assert_eq!(dark["--fg"], "#111");
        assert_eq!(dark["--new"], "1");
    }

    #[test]
    fn test_base_theme_ignores_overrides() {
        let light = scopes().effective(BASE_THEME);
        assert_eq!(light["--bg"], "#fff");
        assert!(!light.contains_key("--new"));
    }

    #[test]
    fn test_absent_theme_falls_back_to_base() {
        let s = scopes();
        assert_eq!(s.effective("highcontrast-light"), *s.base());
    }

    #[test]
    fn test_effective_does_not_mutate_scopes() {
        let s = scopes();
        let before = s.clone();
        let _ = s.effective("dark");
        assert_eq!(s, before);
    }

    #[test]
    fn test_effective_maps() {
        let maps = scopes().effective_maps(&["light", "dark"]);
        assert_eq!(maps.len(), 2);
        assert_eq!(maps["dark"]["--bg"], "#000");
        assert_eq!(maps["light"]["--bg"], "#fff");
    }
}

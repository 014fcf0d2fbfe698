//! Custom properties and their derived token types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::prefix;

/// Flat `name -> raw value` mapping for one scope.
///
/// A sorted map keeps every derived structure deterministic; consumers must not
/// rely on declaration order, which is not preserved.
pub type PropertyMap = BTreeMap<String, String>;

/// Preview kind of a token, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Color,
    Gradient,
    Typography,
    Spacing,
    Shadow,
    BorderRadius,
    /// Anything outside the known prefix families.
    Variable,
}

impl TokenType {
    /// Derives the token type from a property name.
    ///
    /// Uses the same prefix families as the classifier, so a property in the
    /// Colors category is always typed [`TokenType::Color`], and so on.
    pub fn for_name(name: &str) -> Self {
        if name.starts_with(prefix::GRADIENT) {
            TokenType::Gradient
        } else if name.starts_with(prefix::TYPOGRAPHY) {
            TokenType::Typography
        } else if name.starts_with(prefix::SPACING) {
            TokenType::Spacing
        } else if name.starts_with(prefix::SHADOW) {
            TokenType::Shadow
        } else if name.starts_with(prefix::BORDER_RADIUS)
            || name.starts_with(prefix::BORDER_RADIUS_LEGACY)
        {
            TokenType::BorderRadius
        } else if name.starts_with(prefix::COLOR) || name.starts_with(prefix::COLOR_LEGACY) {
            TokenType::Color
        } else {
            TokenType::Variable
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Gradient => "gradient",
            TokenType::Typography => "typography",
            TokenType::Spacing => "spacing",
            TokenType::Shadow => "shadow",
            TokenType::BorderRadius => "border-radius",
            TokenType::Variable => "variable",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single custom property as seen in one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let token_type = TokenType::for_name(&name);
        Self {
            name,
            value: value.into(),
            token_type,
        }
    }

    /// Returns `true` if the raw value references another property.
    pub fn is_reference(&self) -> bool {
        self.value.contains("var(")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_by_prefix() {
        assert_eq!(
            TokenType::for_name("--prism-gradient-interactive-hover"),
            TokenType::Gradient
        );
        assert_eq!(
            TokenType::for_name("--prism-typography-body-size"),
            TokenType::Typography
        );
        assert_eq!(TokenType::for_name("--prism-spacing-sm"), TokenType::Spacing);
        assert_eq!(TokenType::for_name("--prism-shadow-raised"), TokenType::Shadow);
        assert_eq!(
            TokenType::for_name("--prism-border-radius-md"),
            TokenType::BorderRadius
        );
        assert_eq!(
            TokenType::for_name("--prism-radius-md"),
            TokenType::BorderRadius
        );
        assert_eq!(
            TokenType::for_name("--prism-color-text-primary"),
            TokenType::Color
        );
        assert_eq!(TokenType::for_name("--color-blue"), TokenType::Color);
        assert_eq!(TokenType::for_name("--page-width"), TokenType::Variable);
    }

    #[test]
    fn test_property_serializes_type_field() {
        let prop = Property::new("--prism-radius-sm", "2px");
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "border-radius");
        assert_eq!(json["value"], "2px");
    }

    #[test]
    fn test_is_reference() {
        assert!(Property::new("--a", "var(--b)").is_reference());
        assert!(!Property::new("--a", "#fff").is_reference());
    }
}

//! Name prefixes of the Prism authoring conventions.
//!
//! Every rule in the classifier and the palette builder is expressed in terms
//! of these constants, so the naming scheme lives in one place.

/// Marker that starts every custom property name.
pub const SENTINEL: &str = "--";

pub const GRADIENT: &str = "--prism-gradient-";
pub const TYPOGRAPHY: &str = "--prism-typography-";
pub const SPACING: &str = "--prism-spacing-";
pub const SHADOW: &str = "--prism-shadow-";
pub const BORDER_RADIUS: &str = "--prism-border-radius-";
/// Older spelling of [`BORDER_RADIUS`], still present in shipped stylesheets.
pub const BORDER_RADIUS_LEGACY: &str = "--prism-radius-";

pub const COLOR: &str = "--prism-color-";
/// Un-namespaced color prefix from before the `prism` namespace existed.
pub const COLOR_LEGACY: &str = "--color-";

pub const COLOR_INTERACTIVE: &str = "--prism-color-interactive-";
pub const COLOR_BACKGROUND: &str = "--prism-color-background-";
pub const COLOR_TEXT: &str = "--prism-color-text-";
pub const COLOR_ICON: &str = "--prism-color-icon-";
pub const COLOR_BORDER: &str = "--prism-color-border-";
pub const COLOR_OUTLINE: &str = "--prism-color-outline-";
pub const COLOR_ELEVATION: &str = "--prism-color-elevation-";
pub const COLOR_CHART: &str = "--prism-color-chart-";

pub const CHART_CATEGORICAL: &str = "--prism-color-chart-categorical-";
pub const CHART_SEQUENTIAL: &str = "--prism-color-chart-sequential-";

/// Infix that marks a transparency variant of a palette color.
pub const ALPHA_INFIX: &str = "-alpha-";

//! YAML configuration.
//!
//! Every field is optional; a missing file section falls back to the defaults
//! below.
//!
//! ```yaml
//! stylesheet: css/prism.css
//! search_roots: [dist, public, "."]
//! themes: [light, dark, highcontrast-light, highcontrast-dark]
//! theme_file_pattern: "prism-{theme}.css"
//! min_declarations: 200
//! preference_path: .prism/preferences.json
//! default_theme: dark
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::extract::{ExtractOptions, DEFAULT_MIN_DECLARATIONS};
use crate::source::{SearchPathResolver, DEFAULT_THEME_FILE_PATTERN};
use crate::theme::BASE_THEME;

/// Settings shared by the loader, the extractor and the front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrismConfig {
    /// Relative path of the base stylesheet.
    pub stylesheet: String,
    /// Directories searched, in order, for the stylesheet.
    pub search_roots: Vec<PathBuf>,
    /// Known theme names, base theme included.
    pub themes: Vec<String>,
    /// Variant sheet file name; `{theme}` is replaced by the theme name.
    pub theme_file_pattern: String,
    /// Expected minimum declarations per block before the fallback splitter runs.
    pub min_declarations: usize,
    /// Where the theme preference record is kept.
    pub preference_path: PathBuf,
    /// Theme used when no preference is stored.
    pub default_theme: Option<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            stylesheet: "css/prism.css".to_string(),
            search_roots: vec![
                PathBuf::from("dist"),
                PathBuf::from("public"),
                PathBuf::from("."),
            ],
            themes: vec![
                BASE_THEME.to_string(),
                "dark".to_string(),
                "highcontrast-light".to_string(),
                "highcontrast-dark".to_string(),
            ],
            theme_file_pattern: DEFAULT_THEME_FILE_PATTERN.to_string(),
            min_declarations: DEFAULT_MIN_DECLARATIONS,
            preference_path: PathBuf::from(".prism/preferences.json"),
            default_theme: None,
        }
    }
}

impl PrismConfig {
    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed YAML or unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    /// Reads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?;
        config.ensure_base_theme();
        Ok(config)
    }

    /// The base theme is always known, even if the file leaves it out.
    fn ensure_base_theme(&mut self) {
        if !self.themes.iter().any(|t| t == BASE_THEME) {
            self.themes.insert(0, BASE_THEME.to_string());
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_declarations: self.min_declarations,
        }
    }

    pub fn resolver(&self) -> SearchPathResolver {
        SearchPathResolver::new(self.search_roots.iter().cloned())
    }

    /// Returns `true` if `theme` is one of the configured themes.
    pub fn knows_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}

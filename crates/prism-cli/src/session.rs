//! Per-invocation state: configuration, preferences and the active theme.

use std::path::Path;

use anyhow::{bail, Context, Result};
use prism_tokens::{
    initial_theme, load_stylesheet, FileFetcher, LoadError, LoadRequest, LoadedStylesheet,
    PreferenceStore, PrismConfig,
};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::output::OutputMode;

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "prism.yaml";

pub struct Session {
    pub config: PrismConfig,
    pub store: PreferenceStore,
    pub theme: String,
    pub mode: OutputMode,
}

impl Session {
    /// Builds the session from configuration and command-line flags.
    ///
    /// Flags win over the configuration file. Without `--theme`, the theme is
    /// the stored preference, then the configured default, then the OS scheme.
    pub fn open(args: &GlobalArgs) -> Result<Self> {
        let mut config = load_config(args.config.as_deref())?;
        if let Some(stylesheet) = &args.stylesheet {
            config.stylesheet = stylesheet.clone();
        }
        if !args.roots.is_empty() {
            config.search_roots = args.roots.clone();
        }

        let store = PreferenceStore::new(&config.preference_path);
        let theme = match &args.theme {
            Some(theme) if config.knows_theme(theme) => theme.clone(),
            Some(theme) => bail!(unknown_theme(theme, &config.themes)),
            None => initial_theme(
                store.load().as_deref(),
                config.default_theme.as_deref(),
                &config.themes,
            ),
        };
        debug!(theme = %theme, stylesheet = %config.stylesheet, "session ready");

        Ok(Self {
            config,
            store,
            theme,
            mode: args.output,
        })
    }

    /// Loads the stylesheet from the configured search roots.
    pub fn load(&self) -> Result<LoadedStylesheet, LoadError> {
        let request = LoadRequest {
            relative: &self.config.stylesheet,
            themes: &self.config.themes,
            options: self.config.extract_options(),
            theme_file_pattern: &self.config.theme_file_pattern,
        };
        load_stylesheet(&request, &self.config.resolver(), &FileFetcher)
    }
}

fn load_config(path: Option<&Path>) -> Result<PrismConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(PrismConfig::default()),
    };
    PrismConfig::from_file(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Error message for a theme name that is not configured.
pub fn unknown_theme(theme: &str, known: &[String]) -> String {
    format!("unknown theme '{}' (known: {})", theme, known.join(", "))
}

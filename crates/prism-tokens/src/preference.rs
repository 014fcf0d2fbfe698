//! Persisted theme preference.
//!
//! The record is a small JSON object stored at a configurable path, with the
//! selected theme under [`STORAGE_KEY`]. Other keys in the file are left
//! untouched. Reads and writes are best-effort: a missing, unreadable or
//! malformed record behaves like no preference, and a failed write is logged
//! and otherwise ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::scheme::{detect_color_scheme, ColorScheme};
use crate::theme::BASE_THEME;

/// Key of the selected theme inside the preference record.
pub const STORAGE_KEY: &str = "prism-docs-theme";

/// Theme used for a dark OS scheme when no preference exists.
pub const DARK_THEME: &str = "dark";

/// File-backed preference record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored theme, if any.
    pub fn load(&self) -> Option<String> {
        match self.read_record() {
            Ok(record) => record
                .get(STORAGE_KEY)
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(reason) => {
                debug!(path = %self.path.display(), %reason, "no theme preference");
                None
            }
        }
    }

    /// Stores the theme. Returns `true` if the record was written.
    pub fn save(&self, theme: &str) -> bool {
        let mut record = self.read_record().unwrap_or_default();
        record.insert(STORAGE_KEY.to_string(), Value::String(theme.to_string()));

        match self.write_record(&record) {
            Ok(()) => true,
            Err(reason) => {
                warn!(path = %self.path.display(), %reason, "failed to store theme preference");
                false
            }
        }
    }

    fn read_record(&self) -> Result<BTreeMap<String, Value>, String> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| e.to_string())?;
        serde_json::from_str(&text).map_err(|e| e.to_string())
    }

    fn write_record(&self, record: &BTreeMap<String, Value>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
        }
        let text = serde_json::to_string_pretty(record).map_err(|e| e.to_string())?;
        std::fs::write(&self.path, text).map_err(|e| e.to_string())
    }
}

/// Picks the theme to start with.
///
/// In order: the stored preference, the configured default, then the OS
/// scheme (`dark` if known and the OS prefers dark). Names that are not in
/// `known` are skipped. Falls back to the base theme.
pub fn initial_theme(stored: Option<&str>, configured: Option<&str>, known: &[String]) -> String {
    initial_theme_for_scheme(stored, configured, known, detect_color_scheme())
}

/// [`initial_theme`] with an explicit OS scheme.
pub fn initial_theme_for_scheme(
    stored: Option<&str>,
    configured: Option<&str>,
    known: &[String],
    scheme: ColorScheme,
) -> String {
    let is_known = |name: &str| known.iter().any(|k| k == name);

    if let Some(theme) = stored.filter(|t| is_known(t)) {
        return theme.to_string();
    }
    if let Some(theme) = configured.filter(|t| is_known(t)) {
        return theme.to_string();
    }
    if scheme == ColorScheme::Dark && is_known(DARK_THEME) {
        return DARK_THEME.to_string();
    }
    BASE_THEME.to_string()
}

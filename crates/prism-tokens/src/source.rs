//! Stylesheet loading.
//!
//! Loading is split into two seams so the engine stays free of environment
//! access:
//!
//! - a [`CandidateResolver`] turns a relative path into an ordered list of
//!   locations to try (first success wins)
//! - a [`Fetcher`] reads one location as text
//!
//! [`load_stylesheet`] records every attempt. If nothing loads, the returned
//! [`LoadError`] lists each location with its outcome so the caller can show
//! the full picture. Variant theme sheets live next to the resolved base sheet
//! and are optional.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{FetchError, LoadError};
use crate::extract::{extract, ExtractOptions};
use crate::theme::{ThemeScopes, BASE_THEME};

/// Default file name pattern for per-theme variant sheets.
pub const DEFAULT_THEME_FILE_PATTERN: &str = "prism-{theme}.css";

/// Produces candidate locations for a relative path.
pub trait CandidateResolver {
    fn candidates(&self, relative: &str) -> Vec<String>;
}

/// Reads a location as text.
pub trait Fetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Resolves relative paths against a list of search roots.
///
/// Absolute paths are returned as-is. Otherwise each root joined with the
/// relative path is a candidate, in root order, followed by the relative path
/// itself. Duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPathResolver {
    roots: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl CandidateResolver for SearchPathResolver {
    fn candidates(&self, relative: &str) -> Vec<String> {
        let path = Path::new(relative);
        if path.is_absolute() {
            return vec![relative.to_string()];
        }
        let mut out: Vec<String> = Vec::with_capacity(self.roots.len() + 1);
        let joined = self.roots.iter().map(|root| root.join(path));
        for candidate in joined.chain(std::iter::once(path.to_path_buf())) {
            let candidate = candidate.to_string_lossy().into_owned();
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
        out
    }
}

/// Reads locations from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        std::fs::read_to_string(location).map_err(|e| FetchError::Unreachable(e.to_string()))
    }
}

/// Result of trying one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum AttemptOutcome {
    Loaded,
    #[serde(serialize_with = "serialize_display")]
    Failed(FetchError),
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Loaded => f.write_str("loaded"),
            AttemptOutcome::Failed(err) => write!(f, "{}", err),
        }
    }
}

fn serialize_display<S: serde::Serializer>(err: &FetchError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}

/// One location that was tried, and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub location: String,
    pub outcome: AttemptOutcome,
}

/// What to load and how.
#[derive(Debug, Clone)]
pub struct LoadRequest<'a> {
    /// Relative path of the base stylesheet.
    pub relative: &'a str,
    /// Theme names to collect overrides for.
    pub themes: &'a [String],
    pub options: ExtractOptions,
    /// File name of a theme's variant sheet; `{theme}` is replaced by the name.
    pub theme_file_pattern: &'a str,
}

/// A successfully loaded stylesheet snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedStylesheet {
    /// Location the base sheet was read from.
    pub location: String,
    pub scopes: ThemeScopes,
    /// Base-sheet attempts, the last one being the success.
    pub attempts: Vec<Attempt>,
    /// Variant-sheet attempts, successful or not.
    pub variants: Vec<Attempt>,
}

/// Loads the base stylesheet and any variant theme sheets.
///
/// # Errors
///
/// - [`LoadError::Unreachable`] if no candidate location could be read
/// - [`LoadError::NoBaseScope`] if the sheet that loaded has no `:root`
///   declarations
pub fn load_stylesheet(
    request: &LoadRequest<'_>,
    resolver: &dyn CandidateResolver,
    fetcher: &dyn Fetcher,
) -> Result<LoadedStylesheet, LoadError> {
    let mut attempts = Vec::new();
    let mut loaded = None;

    for location in resolver.candidates(request.relative) {
        match fetcher.fetch(&location) {
            Ok(text) => {
                attempts.push(Attempt {
                    location: location.clone(),
                    outcome: AttemptOutcome::Loaded,
                });
                loaded = Some((location, text));
                break;
            }
            Err(err) => {
                debug!(location = %location, error = %err, "stylesheet candidate failed");
                attempts.push(Attempt {
                    location,
                    outcome: AttemptOutcome::Failed(err),
                });
            }
        }
    }

    let Some((location, text)) = loaded else {
        return Err(LoadError::Unreachable {
            relative: request.relative.to_string(),
            attempts,
        });
    };

    let mut scopes = extract(&text, request.themes, &request.options);
    if scopes.is_empty() {
        return Err(LoadError::NoBaseScope { location, attempts });
    }

    let variants = load_variants(&location, request, fetcher, &mut scopes);
    info!(
        location = %location,
        properties = scopes.base().len(),
        "stylesheet loaded"
    );

    Ok(LoadedStylesheet {
        location,
        scopes,
        attempts,
        variants,
    })
}

/// Location of a theme's variant sheet, next to the base sheet.
pub fn variant_location(base_location: &str, pattern: &str, theme: &str) -> String {
    let file = pattern.replace("{theme}", theme);
    match Path::new(base_location).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file).to_string_lossy().into_owned(),
        _ => file,
    }
}

fn load_variants(
    base_location: &str,
    request: &LoadRequest<'_>,
    fetcher: &dyn Fetcher,
    scopes: &mut ThemeScopes,
) -> Vec<Attempt> {
    let mut attempts = Vec::new();
    for theme in request.themes.iter().filter(|t| t.as_str() != BASE_THEME) {
        let location = variant_location(base_location, request.theme_file_pattern, theme);
        match fetcher.fetch(&location) {
            Ok(text) => {
                let variant = extract(&text, std::slice::from_ref(theme), &request.options);
                let mut merged = variant.base().clone();
                if let Some(overrides) = variant.overrides(theme) {
                    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                debug!(theme = %theme, count = merged.len(), "merged variant sheet");
                scopes.extend_override(theme, merged);
                attempts.push(Attempt {
                    location,
                    outcome: AttemptOutcome::Loaded,
                });
            }
            Err(err) => {
                warn!(theme = %theme, location = %location, error = %err, "variant sheet unavailable");
                attempts.push(Attempt {
                    location,
                    outcome: AttemptOutcome::Failed(err),
                });
            }
        }
    }
    attempts
}

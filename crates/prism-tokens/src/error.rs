//! Error types for loading and configuration.
//!
//! Extraction and classification never fail: malformed input degrades to
//! empty scopes or the Other category. Only getting hold of a usable
//! stylesheet, and reading configuration, can fail.

use std::path::PathBuf;

use thiserror::Error;

use crate::source::Attempt;

/// Why a single candidate location could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The location answered with a non-success status.
    #[error("status {0}")]
    Status(u16),

    /// The location could not be reached or read at all.
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// Errors raised while loading a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// No candidate location produced any text.
    #[error("no stylesheet could be loaded for '{relative}'{}", render_attempts(.attempts))]
    Unreachable {
        relative: String,
        attempts: Vec<Attempt>,
    },

    /// A stylesheet loaded but declared no `:root` custom properties.
    #[error("stylesheet '{location}' has no :root declarations{}", render_attempts(.attempts))]
    NoBaseScope {
        location: String,
        attempts: Vec<Attempt>,
    },
}

impl LoadError {
    /// Every location that was tried, in order.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            LoadError::Unreachable { attempts, .. } | LoadError::NoBaseScope { attempts, .. } => {
                attempts
            }
        }
    }
}

fn render_attempts(attempts: &[Attempt]) -> String {
    if attempts.is_empty() {
        return " (no candidate locations)".to_string();
    }
    attempts
        .iter()
        .map(|a| format!("\n  - {}: {}", a.location, a.outcome))
        .collect()
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config{}: {message}", .path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
}

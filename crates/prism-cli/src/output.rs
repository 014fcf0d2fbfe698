//! Output mode control.
//!
//! [`OutputMode`] is the value of the `--output` flag. Text modes go through
//! the templates in [`crate::render`]; structured modes serialize the command's
//! view directly.

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

/// How command output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled on a terminal, plain otherwise
    #[default]
    Auto,
    /// Always styled
    Term,
    /// Never styled
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl OutputMode {
    /// Returns true for modes that skip templates.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml)
    }

    /// Resolves `Auto` to `Term` or `Text` depending on whether stdout is a
    /// terminal. Other modes are returned unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().is_term() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }

    /// Returns true if text output should carry ANSI styling.
    pub fn use_color(&self) -> bool {
        self.resolve_auto() == OutputMode::Term
    }
}

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("not a structured output mode")]
    NotStructured,
}

/// Serializes a view for a structured mode.
pub fn serialize_structured<T: Serialize>(
    data: &T,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        _ => Err(SerializeError::NotStructured),
    }
}

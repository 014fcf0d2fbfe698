//! Declaration splitting.
//!
//! Splitting a block body runs as a two-stage pipeline:
//!
//! 1. [`split_primary`] matches `name: value;` with a regular expression that
//!    honours backslash escapes inside the value. The whole name is captured and
//!    must start with `--`, so `foo--bar: 1px;` is dropped rather than read as
//!    `--bar`.
//! 2. [`validate`] compares the number of declarations found against the
//!    configured expectation.
//! 3. When the count is implausibly low, [`split_fallback`] re-reads the body one
//!    semicolon-terminated segment at a time. It accepts any name that starts
//!    with `--` and a final declaration without a trailing semicolon.
//!
//! [`parse_declarations`] wires the stages together. The fallback result is only
//! adopted when it recovers more declarations than the primary pass.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::ExtractOptions;
use crate::prefix::SENTINEL;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\s;:{}]+)\s*:\s*((?:\\.|[^;\\])*);").unwrap());

/// A single `name: value` pair, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

impl Declaration {
    /// Builds a declaration from raw text, rejecting empty names or values and
    /// names that do not start with the `--` sentinel.
    fn from_raw(name: &str, value: &str) -> Option<Self> {
        let name = name.trim();
        let value = value.trim();
        if name.len() <= SENTINEL.len() || !name.starts_with(SENTINEL) || value.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Outcome of the validation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plausibility {
    Plausible,
    Implausible { found: usize, expected: usize },
}

/// Removes `/* ... */` comment spans.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT.replace_all(text, "")
}

/// Primary splitter: one regex match per well-formed declaration.
pub fn split_primary(body: &str) -> Vec<Declaration> {
    DECLARATION
        .captures_iter(body)
        .filter_map(|caps| Declaration::from_raw(&caps[1], &caps[2]))
        .collect()
}

/// Checks a declaration count against the configured expectation.
pub fn validate(found: usize, options: &ExtractOptions) -> Plausibility {
    if found < options.min_declarations {
        Plausibility::Implausible {
            found,
            expected: options.min_declarations,
        }
    } else {
        Plausibility::Plausible
    }
}

/// Fallback splitter: each semicolon-separated segment is parsed on its own,
/// splitting name from value at the first colon.
pub fn split_fallback(body: &str) -> Vec<Declaration> {
    body.split(';')
        .filter_map(|segment| {
            let (name, value) = segment.split_once(':')?;
            let name = name.trim();
            if name.chars().any(char::is_whitespace) {
                return None;
            }
            Declaration::from_raw(name, value)
        })
        .collect()
}

/// Runs the full pipeline over one block body.
pub fn parse_declarations(body: &str, options: &ExtractOptions) -> Vec<Declaration> {
    let body = strip_comments(body);
    let primary = split_primary(&body);

    match validate(primary.len(), options) {
        Plausibility::Plausible => primary,
        Plausibility::Implausible { found, expected } => {
            let fallback = split_fallback(&body);
            debug!(
                found,
                expected,
                recovered = fallback.len(),
                "declaration count below expectation, trying line splitter"
            );
            if fallback.len() > primary.len() {
                fallback
            } else {
                primary
            }
        }
    }
}

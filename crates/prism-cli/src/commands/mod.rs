//! Subcommand handlers.
//!
//! Each handler builds a serializable view, then [`emit`] writes it as JSON,
//! YAML or rendered text depending on the output mode.

pub mod copy;
pub mod palette;
pub mod themes;
pub mod tokens;
pub mod use_theme;

use std::io::Write;

use anyhow::Result;
use minijinja::context;
use prism_tokens::{LoadError, LoadedStylesheet};
use serde::Serialize;

use crate::output::{serialize_structured, OutputMode};
use crate::render::Renderer;
use crate::session::Session;

/// Where command output goes.
pub struct Io<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The command ran but had nothing to show, e.g. no stylesheet loaded.
    Failure,
}

/// Writes a view in the session's output mode.
pub(crate) fn emit<T: Serialize>(
    mode: OutputMode,
    renderer: &Renderer,
    template: &str,
    view: &T,
    width: usize,
    out: &mut dyn Write,
) -> Result<()> {
    if mode.is_structured() {
        let text = serialize_structured(view, mode)?;
        writeln!(out, "{}", text.trim_end())?;
    } else {
        let text = renderer.render(template, context! { view => view, width => width })?;
        write!(out, "{}", text)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct BannerView {
    headline: String,
    attempts: Vec<AttemptView>,
}

#[derive(Debug, Serialize)]
struct AttemptView {
    location: String,
    outcome: String,
}

/// Loads the stylesheet, printing the failure banner to stderr if it cannot
/// be used. Callers render their empty state on `None`.
pub(crate) fn load_or_report(
    session: &Session,
    renderer: &Renderer,
    io: &mut Io<'_>,
) -> Result<Option<LoadedStylesheet>> {
    match session.load() {
        Ok(loaded) => Ok(Some(loaded)),
        Err(err) => {
            report_load_failure(&err, renderer, io.err)?;
            Ok(None)
        }
    }
}

fn report_load_failure(err: &LoadError, renderer: &Renderer, out: &mut dyn Write) -> Result<()> {
    let headline = match err {
        LoadError::Unreachable { relative, .. } => {
            format!("no location for '{}' could be read", relative)
        }
        LoadError::NoBaseScope { location, .. } => {
            format!("'{}' has no :root declarations", location)
        }
    };
    let view = BannerView {
        headline,
        attempts: err
            .attempts()
            .iter()
            .map(|a| AttemptView {
                location: a.location.clone(),
                outcome: a.outcome.to_string(),
            })
            .collect(),
    };
    let text = renderer.render("banner", context! { view => view })?;
    write!(out, "{}", text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_tokens::{Attempt, AttemptOutcome, FetchError};

    #[test]
    fn test_banner_lists_attempts() {
        let renderer = Renderer::new(OutputMode::Text).unwrap();
        let err = LoadError::Unreachable {
            relative: "css/prism.css".into(),
            attempts: vec![
                Attempt {
                    location: "dist/css/prism.css".into(),
                    outcome: AttemptOutcome::Failed(FetchError::Status(404)),
                },
                Attempt {
                    location: "css/prism.css".into(),
                    outcome: AttemptOutcome::Failed(FetchError::Unreachable("gone".into())),
                },
            ],
        };
        let mut out = Vec::new();
        report_load_failure(&err, &renderer, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Stylesheet unavailable: no location for 'css/prism.css' could be read\n\
             \x20 dist/css/prism.css  status 404\n\
             \x20 css/prism.css  unreachable: gone\n"
        );
    }
}

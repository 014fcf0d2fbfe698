use anyhow::Result;
use prism_tokens::ThemeScopes;
use serde::Serialize;
use tracing::debug;

use super::{emit, Io, Status};
use crate::render::Renderer;
use crate::session::Session;

#[derive(Debug, Serialize)]
pub struct ThemesView {
    pub active: String,
    pub themes: Vec<ThemeRow>,
}

#[derive(Debug, Serialize)]
pub struct ThemeRow {
    pub name: String,
    pub active: bool,
    /// Number of properties the theme overrides; zero for the base theme.
    pub overrides: usize,
}

pub fn build_view(active: &str, known: &[String], scopes: Option<&ThemeScopes>) -> ThemesView {
    ThemesView {
        active: active.to_string(),
        themes: known
            .iter()
            .map(|name| ThemeRow {
                name: name.clone(),
                active: name == active,
                overrides: scopes
                    .and_then(|s| s.overrides(name))
                    .map_or(0, |o| o.len()),
            })
            .collect(),
    }
}

/// Lists the configured themes. Works without a stylesheet; override counts
/// are then zero.
pub fn run(session: &Session, renderer: &Renderer, io: &mut Io<'_>) -> Result<Status> {
    let loaded = match session.load() {
        Ok(loaded) => Some(loaded),
        Err(err) => {
            debug!(error = %err, "listing themes without a stylesheet");
            None
        }
    };
    let view = build_view(
        &session.theme,
        &session.config.themes,
        loaded.as_ref().map(|l| &l.scopes),
    );
    emit(session.mode, renderer, "themes", &view, 0, io.out)?;
    Ok(Status::Success)
}

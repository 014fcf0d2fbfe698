use anyhow::{bail, Result};
use serde::Serialize;

use super::{emit, Io, Status};
use crate::cli::UseArgs;
use crate::render::Renderer;
use crate::session::{unknown_theme, Session};

#[derive(Debug, Serialize)]
pub struct UseView {
    pub theme: String,
    pub stored: bool,
    pub path: String,
}

/// Stores the theme preference. A failed write is reported but does not fail
/// the command.
pub fn run(
    session: &Session,
    renderer: &Renderer,
    args: &UseArgs,
    io: &mut Io<'_>,
) -> Result<Status> {
    if !session.config.knows_theme(&args.theme) {
        bail!(unknown_theme(&args.theme, &session.config.themes));
    }
    let view = UseView {
        theme: args.theme.clone(),
        stored: session.store.save(&args.theme),
        path: session.store.path().display().to_string(),
    };
    emit(session.mode, renderer, "use", &view, 0, io.out)?;
    Ok(Status::Success)
}

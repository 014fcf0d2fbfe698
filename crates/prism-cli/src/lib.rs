//! The `prism` command-line front end.
//!
//! Loads a stylesheet through [`prism_tokens`], then shows the token catalog,
//! the palettes or the theme list for the active theme. Everything a command
//! prints goes through an [`Io`] pair so the whole front end runs in tests:
//!
//! ```rust,no_run
//! use clap::Parser;
//! use prism_cli::{run, Cli, Io, Status};
//!
//! let cli = Cli::parse_from(["prism", "--root", "dist", "tokens", "--output", "json"]);
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! let status = run(&cli, Io { out: &mut out, err: &mut err }).unwrap();
//! assert_eq!(status, Status::Success);
//! ```

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod render;
pub mod session;
pub mod templates;

use anyhow::Result;
use prism_pipe::{clipboard, CommandPipe, PipeTarget};

pub use cli::{Cli, Command};
pub use commands::{Io, Status};
pub use output::OutputMode;
pub use session::Session;

use render::Renderer;

/// Environment variable naming a command to use instead of the platform
/// clipboard.
pub const CLIPBOARD_ENV: &str = "PRISM_CLIPBOARD";

/// Clipboard target: `PRISM_CLIPBOARD` if set, else the platform clipboard.
pub fn clipboard_target() -> Option<CommandPipe> {
    match std::env::var(CLIPBOARD_ENV) {
        Ok(command) if !command.trim().is_empty() => Some(CommandPipe::new(command)),
        _ => clipboard(),
    }
}

/// Runs one parsed invocation.
///
/// # Errors
///
/// Usage problems such as an unknown theme or token, unreadable
/// configuration, or output that cannot be written. A stylesheet that cannot
/// be loaded is not an error: the banner goes to `io.err` and the result is
/// [`Status::Failure`].
pub fn run(cli: &Cli, mut io: Io<'_>) -> Result<Status> {
    let session = Session::open(&cli.global)?;
    let renderer = Renderer::new(session.mode)?;

    match &cli.command {
        Command::Tokens(args) => commands::tokens::run(&session, &renderer, args, &mut io),
        Command::Palette(args) => commands::palette::run(&session, &renderer, args, &mut io),
        Command::Themes => commands::themes::run(&session, &renderer, &mut io),
        Command::Use(args) => commands::use_theme::run(&session, &renderer, args, &mut io),
        Command::Copy(args) => {
            let target = clipboard_target();
            let target = target.as_ref().map(|t| t as &dyn PipeTarget);
            commands::copy::run(&session, &renderer, args, target, &mut io)
        }
    }
}

//! Delivers text to external commands.
//!
//! The only consumer today is the copy action of the `prism` front end, which
//! sends a token name or value to the system clipboard:
//!
//! ```rust,no_run
//! use prism_pipe::{clipboard, PipeTarget};
//!
//! if let Some(target) = clipboard() {
//!     target.deliver("--prism-color-blue-500").ok();
//! }
//! ```

pub mod pipe;
pub mod platform;
pub mod shell;

pub use pipe::{CommandPipe, PipeError, PipeTarget, DEFAULT_TIMEOUT};
pub use platform::{clipboard, clipboard_command};
pub use shell::{feed, run_with_input, ShellError};

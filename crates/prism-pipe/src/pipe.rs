use std::time::Duration;

use crate::shell::{feed, ShellError};

/// How long a command may take before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("copy command failed: {0}")]
    Shell(#[from] ShellError),
}

/// Something that accepts text, such as the clipboard.
pub trait PipeTarget: Send + Sync {
    /// Hands `text` over. The target keeps no output of its own.
    fn deliver(&self, text: &str) -> Result<(), PipeError>;

    /// Human-readable name used in notifications.
    fn describe(&self) -> String;
}

/// A shell command that receives text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPipe {
    command: String,
    timeout: Duration,
}

impl CommandPipe {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl PipeTarget for CommandPipe {
    fn deliver(&self, text: &str) -> Result<(), PipeError> {
        feed(&self.command, text, Some(self.timeout))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("`{}`", self.command)
    }
}

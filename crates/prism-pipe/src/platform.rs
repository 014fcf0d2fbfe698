use crate::pipe::CommandPipe;

/// Clipboard command of the current platform, if there is one.
#[cfg(target_os = "macos")]
pub fn clipboard_command() -> Option<&'static str> {
    Some("pbcopy")
}

/// Clipboard command of the current platform, if there is one.
#[cfg(target_os = "linux")]
pub fn clipboard_command() -> Option<&'static str> {
    Some("xclip -selection clipboard")
}

/// Clipboard command of the current platform, if there is one.
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn clipboard_command() -> Option<&'static str> {
    None
}

/// Returns a pipe to the system clipboard, or `None` on unsupported platforms.
pub fn clipboard() -> Option<CommandPipe> {
    clipboard_command().map(CommandPipe::new)
}

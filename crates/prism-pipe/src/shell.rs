use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("`{command}` did not finish within {after:?}")]
    TimedOut { command: String, after: Duration },
    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
    #[error("output was not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Runs `command` through the platform shell with `input` on stdin.
///
/// Returns everything the command wrote to stdout. With a `timeout`, a command
/// still running when it expires is killed and reported as
/// [`ShellError::TimedOut`]. Stdout is buffered until the command exits, so
/// this suits short outputs only.
pub fn run_with_input(
    command: &str,
    input: &str,
    timeout: Option<Duration>,
) -> Result<String, ShellError> {
    let mut child = spawn_with_input(command, input, Stdio::piped())?;
    wait(&mut child, command, timeout)?;

    let mut bytes = Vec::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout.read_to_end(&mut bytes)?;
    }
    Ok(String::from_utf8(bytes)?)
}

/// Like [`run_with_input`], with stdout sent to the null device.
///
/// Clipboard tools such as `xclip` leave a process behind that holds stdout
/// open; nothing here waits on it.
pub fn feed(command: &str, input: &str, timeout: Option<Duration>) -> Result<(), ShellError> {
    let mut child = spawn_with_input(command, input, Stdio::null())?;
    wait(&mut child, command, timeout)
}

fn spawn_with_input(command: &str, input: &str, stdout: Stdio) -> Result<Child, ShellError> {
    let mut child = shell(command)
        .stdin(Stdio::piped())
        .stdout(stdout)
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

    // Dropping stdin closes it, which is how clipboard tools know the text ended.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }
    Ok(child)
}

fn wait(child: &mut Child, command: &str, timeout: Option<Duration>) -> Result<(), ShellError> {
    let status = match timeout {
        Some(after) => match child.wait_timeout(after)? {
            Some(status) => status,
            None => {
                child.kill()?;
                child.wait()?;
                return Err(ShellError::TimedOut {
                    command: command.to_string(),
                    after,
                });
            }
        },
        None => child.wait()?,
    };
    if !status.success() {
        return Err(ShellError::Failed {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}

fn shell(command: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

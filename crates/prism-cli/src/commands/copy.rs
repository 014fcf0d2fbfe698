use anyhow::{anyhow, Result};
use prism_pipe::PipeTarget;
use prism_tokens::{resolve_value, PropertyMap};
use serde::Serialize;
use tracing::warn;

use super::{emit, load_or_report, Io, Status};
use crate::cli::CopyArgs;
use crate::render::Renderer;
use crate::session::Session;

#[derive(Debug, Serialize)]
pub struct CopyView {
    pub name: String,
    pub text: String,
    pub copied: bool,
    pub message: String,
}

/// Finds a token by name; the leading `--` may be left out.
pub fn lookup<'a>(effective: &'a PropertyMap, name: &str) -> Option<(&'a str, &'a str)> {
    let name = if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{}", name)
    };
    effective
        .get_key_value(&name)
        .map(|(k, v)| (k.as_str(), v.as_str()))
}

/// Hands the text to the clipboard and describes the outcome. Never fails.
pub fn deliver(text: &str, target: Option<&dyn PipeTarget>) -> (bool, String) {
    match target {
        None => (false, "Clipboard is not available on this platform".to_string()),
        Some(target) => match target.deliver(text) {
            Ok(()) => (true, format!("Copied {}", text)),
            Err(err) => {
                warn!(error = %err, "copy failed");
                (false, format!("Could not copy to {}: {}", target.describe(), err))
            }
        },
    }
}

pub fn run(
    session: &Session,
    renderer: &Renderer,
    args: &CopyArgs,
    target: Option<&dyn PipeTarget>,
    io: &mut Io<'_>,
) -> Result<Status> {
    let Some(loaded) = load_or_report(session, renderer, io)? else {
        return Ok(Status::Failure);
    };
    let effective = loaded.scopes.effective(&session.theme);
    let (name, raw) =
        lookup(&effective, &args.name).ok_or_else(|| anyhow!("unknown token '{}'", args.name))?;

    let text = if args.resolved {
        resolve_value(raw, &effective)
    } else {
        raw.to_string()
    };
    let (copied, message) = deliver(&text, target);
    let view = CopyView {
        name: name.to_string(),
        text,
        copied,
        message,
    };
    emit(session.mode, renderer, "copy", &view, 0, io.out)?;
    Ok(Status::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_pipe::PipeError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl PipeTarget for Recorder {
        fn deliver(&self, text: &str) -> Result<(), PipeError> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "recorder".into()
        }
    }

    #[test]
    fn test_lookup_with_and_without_dashes() {
        let map = PropertyMap::from([("--prism-spacing-sm".to_string(), "4px".to_string())]);
        assert_eq!(lookup(&map, "--prism-spacing-sm"), Some(("--prism-spacing-sm", "4px")));
        assert_eq!(lookup(&map, "prism-spacing-sm"), Some(("--prism-spacing-sm", "4px")));
        assert_eq!(lookup(&map, "prism-spacing-lg"), None);
    }

    #[test]
    fn test_deliver() {
        let recorder = Recorder::default();
        let (copied, message) = deliver("#fff", Some(&recorder));
        assert!(copied);
        assert_eq!(message, "Copied #fff");
        assert_eq!(*recorder.0.lock().unwrap(), vec!["#fff".to_string()]);

        let (copied, _) = deliver("#fff", None);
        assert!(!copied);
    }
}

//! Log output on stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a full filter directive, e.g.
/// `PRISM_LOG=prism_tokens=debug`.
pub const LOG_ENV: &str = "PRISM_LOG";

/// Filter used when `PRISM_LOG` is unset, by `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 2)
                .without_time(),
        )
        .with(filter)
        .try_init();
}

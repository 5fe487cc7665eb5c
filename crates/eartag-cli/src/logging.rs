//! Tracing subscriber setup for the `eartag` binary.
//!
//! Log events go to stderr so that stdout carries only normalized tags.
//! `RUST_LOG` takes precedence; otherwise the level follows `--quiet` and
//! `--verbose`.
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Returns the default filter directive for the given verbosity flags.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn init(quiet: bool, verbose: bool, colors: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(colors)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

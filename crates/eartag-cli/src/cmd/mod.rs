//! Command module for the `eartag` CLI.
//!
//! Each submodule implements one subcommand. Its `run` function takes the
//! parsed arguments and returns `Ok(())` on success or a
//! [`crate::error::CliError`] on failure.
pub mod normalize;
pub mod scan;

use crate::error::CliError;

/// Wraps a write failure on stdout or stderr as a [`CliError::IoError`].
pub(crate) fn write_error(sink: &str) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |e| CliError::IoError {
        source: sink.to_owned(),
        detail: e.to_string(),
    }
}

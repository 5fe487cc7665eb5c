//! Implementation of `eartag normalize <TAG>...`.
//!
//! Normalizes each argument independently. Accepted tags are written to
//! stdout, rejections to stderr.
//!
//! Exit codes:
//! - 0 = every argument is a recognized ear tag
//! - 1 = at least one argument was rejected
use std::io::Write;
use std::time::Instant;

use eartag_core::Normalizer;

use crate::cmd::write_error;
use crate::error::CliError;
use crate::format::{FormatterConfig, write_rejection, write_tag, write_timing};

/// Runs the `normalize` command against the process's stdout and stderr.
///
/// # Errors
///
/// - [`CliError::RejectedTags`] if any argument was rejected.
/// - [`CliError::IoError`] if writing output fails.
pub fn run(
    tags: &[String],
    normalizer: &Normalizer,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(tags, normalizer, config, &mut stdout.lock(), &mut stderr.lock())
}

/// Runs the `normalize` command with explicit output sinks.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<O: Write, E: Write>(
    tags: &[String],
    normalizer: &Normalizer,
    config: &FormatterConfig,
    out: &mut O,
    err: &mut E,
) -> Result<(), CliError> {
    let start = Instant::now();
    let mut rejected = 0usize;

    for candidate in tags {
        match normalizer.normalize(candidate) {
            Ok(tag) => {
                tracing::debug!(tag = %tag, format = %tag.format(), "accepted");
                write_tag(out, &tag, config).map_err(write_error("stdout"))?;
            }
            Err(reason) => {
                rejected += 1;
                write_rejection(err, candidate, reason, None, config)
                    .map_err(write_error("stderr"))?;
            }
        }
    }

    write_timing(err, "normalized", start.elapsed(), config).map_err(write_error("stderr"))?;

    if rejected > 0 {
        Err(CliError::RejectedTags { count: rejected })
    } else {
        Ok(())
    }
}

//! Implementation of `eartag scan <FILE|->`.
//!
//! Treats each non-blank line as one scanner read and feeds it through a
//! [`ScanSession`] with no time window, so a line identical (after
//! normalization) to the previous accepted read is a repeat. Accepted tags go
//! to stdout; rejections, verbose repeat reports and the summary go to
//! stderr.
//!
//! Exit codes:
//! - 0 = no line was rejected
//! - 1 = at least one line was rejected
//! - 2 = the input could not be read
use std::io::Write;
use std::time::Instant;

use eartag_core::{Normalizer, ScanEvent, ScanSession};

use crate::cli::PathOrStdin;
use crate::cmd::write_error;
use crate::error::CliError;
use crate::format::{
    FormatterConfig, write_rejection, write_repeat, write_summary, write_tag, write_timing,
};
use crate::io::read_input;

/// Reads `source` and runs the `scan` command against stdout and stderr.
///
/// # Errors
///
/// - Input failures from [`read_input`] (exit code 2).
/// - [`CliError::RejectedTags`] if any line was rejected.
/// - [`CliError::IoError`] if writing output fails.
pub fn run(
    source: &PathOrStdin,
    max_file_size: u64,
    normalizer: &Normalizer,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let content = read_input(source, max_file_size)?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(
        &content,
        normalizer,
        config,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Runs the `scan` command over already-read `content`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<O: Write, E: Write>(
    content: &str,
    normalizer: &Normalizer,
    config: &FormatterConfig,
    out: &mut O,
    err: &mut E,
) -> Result<(), CliError> {
    let start = Instant::now();
    let mut session = ScanSession::new(normalizer.clone(), None);

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = Some(idx + 1);
        match session.submit(line, Instant::now()) {
            ScanEvent::Accepted(tag) => {
                write_tag(out, &tag, config).map_err(write_error("stdout"))?;
            }
            ScanEvent::Repeat(tag) => {
                write_repeat(err, line, &tag, line_no, config).map_err(write_error("stderr"))?;
            }
            ScanEvent::Rejected { raw, reason } => {
                write_rejection(err, &raw, reason, line_no, config)
                    .map_err(write_error("stderr"))?;
            }
        }
    }

    let stats = session.stats();
    write_summary(err, stats, config).map_err(write_error("stderr"))?;
    write_timing(err, "scanned", start.elapsed(), config).map_err(write_error("stderr"))?;

    if stats.rejected > 0 {
        Err(CliError::RejectedTags {
            count: stats.rejected,
        })
    } else {
        Ok(())
    }
}

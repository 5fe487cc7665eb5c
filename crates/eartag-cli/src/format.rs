//! Output formatting for accepted tags, rejections, repeats and summaries.
//!
//! - **Human mode** (default): one line per tag on stdout; rejections are
//!   tagged `[E]` on stderr, colored red when colors are enabled. Colors are
//!   disabled by `--no-color`, the `NO_COLOR` environment variable, or a
//!   non-TTY stderr.
//! - **JSON mode**: one JSON object per line (NDJSON).
//!
//! `quiet` suppresses the summary; `verbose` adds repeat reports and timing.
//! Rejections are always written.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use eartag_core::{NormalizedTag, RejectionReason, ScanStats};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// NDJSON output.
    Json,
}

/// Formatter settings derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Output mode.
    pub mode: FormatMode,
    /// Whether ANSI colors are enabled on stderr.
    pub colors: bool,
    /// Suppress the summary line.
    pub quiet: bool,
    /// Report repeats and timing.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(mode: FormatMode, no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON line shapes
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TagLine<'a> {
    canonical: String,
    #[serde(flatten)]
    tag: &'a NormalizedTag,
}

#[derive(Serialize)]
struct RejectionLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    raw: &'a str,
    error: String,
}

#[derive(Serialize)]
struct RepeatLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    raw: &'a str,
    repeat_of: String,
}

#[derive(Serialize)]
struct SummaryLine {
    summary: SummaryCounts,
}

#[derive(Serialize)]
struct SummaryCounts {
    accepted: usize,
    repeats: usize,
    rejected: usize,
}

fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value).map_err(std::io::Error::from)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Writes an accepted tag.
///
/// Human: `TR010203040506  standard  region 01, holding 020304, animal 0506`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_tag<W: Write>(
    writer: &mut W,
    tag: &NormalizedTag,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => writeln!(
            writer,
            "{}  {}  {}",
            tag.canonical(),
            tag.format(),
            tag.describe()
        ),
        FormatMode::Json => write_json_line(
            writer,
            &TagLine {
                canonical: tag.canonical(),
                tag,
            },
        ),
    }
}

/// Writes a rejection. `line` is the 1-based input line for `scan`.
///
/// Human: `[E] line 3 "TR12345": unrecognized ear-tag format`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_rejection<W: Write>(
    writer: &mut W,
    raw: &str,
    reason: RejectionReason,
    line: Option<usize>,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => {
            let (color, reset) = if config.colors {
                (ANSI_RED, ANSI_RESET)
            } else {
                ("", "")
            };
            let location = line.map(|n| format!("line {n} ")).unwrap_or_default();
            writeln!(writer, "{color}[E]{reset} {location}{raw:?}: {reason}")
        }
        FormatMode::Json => write_json_line(
            writer,
            &RejectionLine {
                line,
                raw,
                error: reason.to_string(),
            },
        ),
    }
}

/// Writes a suppressed repeat scan. No-op unless `config.verbose`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_repeat<W: Write>(
    writer: &mut W,
    raw: &str,
    tag: &NormalizedTag,
    line: Option<usize>,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => {
            let (color, reset) = if config.colors {
                (ANSI_CYAN, ANSI_RESET)
            } else {
                ("", "")
            };
            let location = line.map(|n| format!("line {n} ")).unwrap_or_default();
            writeln!(
                writer,
                "{color}[I]{reset} {location}{raw:?}: repeat of {}",
                tag.canonical()
            )
        }
        FormatMode::Json => write_json_line(
            writer,
            &RepeatLine {
                line,
                raw,
                repeat_of: tag.canonical(),
            },
        ),
    }
}

/// Writes the scan summary. Suppressed in quiet mode.
///
/// Human: `3 accepted, 1 repeat, 0 rejected`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    stats: ScanStats,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => writeln!(
            writer,
            "{} accepted, {} {}, {} rejected",
            stats.accepted,
            stats.repeats,
            pluralize(stats.repeats, "repeat", "repeats"),
            stats.rejected,
        ),
        FormatMode::Json => write_json_line(
            writer,
            &SummaryLine {
                summary: SummaryCounts {
                    accepted: stats.accepted,
                    repeats: stats.repeats,
                    rejected: stats.rejected,
                },
            },
        ),
    }
}

/// Writes timing information in verbose human mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose || config.mode == FormatMode::Json {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

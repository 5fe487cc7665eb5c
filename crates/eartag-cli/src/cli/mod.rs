//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eartag_core::{LegacySplit, PrefixPolicy};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints one line per tag. `Json` prints one JSON object per line
/// (NDJSON) on stdout for accepted tags and on stderr for rejections.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// NDJSON output.
    Json,
}

/// Which letter prefixes are accepted, mirroring [`PrefixPolicy`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PrefixPolicyArg {
    /// Any two letters.
    Any,
    /// Only the configured country prefix.
    Fixed,
}

impl From<PrefixPolicyArg> for PrefixPolicy {
    fn from(arg: PrefixPolicyArg) -> Self {
        match arg {
            PrefixPolicyArg::Any => PrefixPolicy::AnyLetters,
            PrefixPolicyArg::Fixed => PrefixPolicy::Fixed,
        }
    }
}

/// How legacy ten-digit tags are split, mirroring [`LegacySplit`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LegacySplitArg {
    /// Region (2) + opaque holding block (8).
    Opaque,
    /// Region (2) + holding (6) + animal (2).
    Provincial,
}

impl From<LegacySplitArg> for LegacySplit {
    fn from(arg: LegacySplitArg) -> Self {
        match arg {
            LegacySplitArg::Opaque => LegacySplit::Opaque,
            LegacySplitArg::Provincial => LegacySplit::Provincial,
        }
    }
}

/// All top-level subcommands exposed by the `eartag` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize and validate one or more ear-tag codes given as arguments.
    Normalize {
        /// Raw tag codes as scanned or typed (quote codes containing spaces).
        #[arg(value_name = "TAG", num_args = 1.., required = true)]
        tags: Vec<String>,
    },

    /// Normalize a file of scanned codes, one per line, suppressing repeats.
    Scan {
        /// Path to a text file of scanned codes, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `eartag` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "eartag",
    version,
    about = "Livestock ear-tag normalizer",
    long_about = "Normalizes and validates livestock ear-tag identifiers.\n\
                  Accepts standard (2 letters + 12 digits), legacy (2 letters + 10 digits)\n\
                  and numeric-only (12 digits) codes."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report repeat scans, timing and debug logs on stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `EARTAG_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "EARTAG_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Colors are also off whenever the `NO_COLOR` environment variable is
    /// set to any value, per <https://no-color.org>. The variable is read by
    /// the formatter, not parsed as a flag value.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON file with normalizer settings (`country_prefix`, `prefix_policy`,
    /// `legacy_split`). Flags below override it.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Country prefix inserted in front of 12-digit numeric-only codes
    /// (default: TR).
    #[arg(long, global = true, env = "EARTAG_COUNTRY_PREFIX", value_name = "CC")]
    pub country_prefix: Option<String>,

    /// Accept any two-letter prefix, or only the configured country prefix.
    #[arg(long, global = true, value_enum)]
    pub prefix_policy: Option<PrefixPolicyArg>,

    /// Split of the 10 digits of a legacy code.
    #[arg(long, global = true, value_enum)]
    pub legacy_split: Option<LegacySplitArg>,
}

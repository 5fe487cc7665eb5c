mod cli;
mod cmd;
mod config;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser;
use eartag_core::Normalizer;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig};

fn main() {
    let cli = Cli::parse();

    let mode = match cli.format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(mode, cli.no_color, cli.quiet, cli.verbose);
    logging::init(cli.quiet, cli.verbose, fmt_config.colors);

    if let Err(e) = run(&cli, &fmt_config) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli, fmt_config: &FormatterConfig) -> Result<(), CliError> {
    let normalizer = Normalizer::new(config::resolve(cli)?);

    match &cli.command {
        Command::Normalize { tags } => cmd::normalize::run(tags, &normalizer, fmt_config),
        Command::Scan { file } => {
            cmd::scan::run(file, cli.max_file_size, &normalizer, fmt_config)
        }
    }
}

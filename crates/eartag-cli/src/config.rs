//! Resolution of the normalizer configuration from file, environment and flags.
//!
//! Precedence, lowest to highest: built-in defaults, the `--config` JSON file,
//! then `--country-prefix` (or `EARTAG_COUNTRY_PREFIX`), `--prefix-policy` and
//! `--legacy-split`.
use eartag_core::{CountryCode, NormalizerConfig};

use crate::cli::Cli;
use crate::error::CliError;
use crate::io::read_file;

/// Builds the [`NormalizerConfig`] for this invocation.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) if the config file cannot be read or
/// parsed, or if the country prefix is not two letters.
pub fn resolve(cli: &Cli) -> Result<NormalizerConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = read_file(path, cli.max_file_size)?;
            NormalizerConfig::from_json(&text).map_err(|e| CliError::InvalidConfig {
                source: path.display().to_string(),
                detail: e.to_string(),
            })?
        }
        None => NormalizerConfig::default(),
    };

    if let Some(prefix) = &cli.country_prefix {
        config.country_prefix = parse_country_prefix(prefix)?;
    }
    if let Some(policy) = cli.prefix_policy {
        config.prefix_policy = policy.into();
    }
    if let Some(split) = cli.legacy_split {
        config.legacy_split = split.into();
    }

    tracing::debug!(
        country_prefix = %config.country_prefix,
        prefix_policy = ?config.prefix_policy,
        legacy_split = ?config.legacy_split,
        "normalizer configured"
    );
    Ok(config)
}

/// Parses a `--country-prefix` value, tolerating surrounding whitespace and
/// lower case.
fn parse_country_prefix(raw: &str) -> Result<CountryCode, CliError> {
    let cleaned = raw.trim().to_ascii_uppercase();
    CountryCode::try_from(cleaned.as_str()).map_err(|e| CliError::InvalidConfig {
        source: "--country-prefix".to_owned(),
        detail: e.to_string(),
    })
}

//! Normalizer configuration.
//!
//! The country prefix, whether letter prefixes other than it are accepted,
//! and how the ten legacy digits are split are deployment choices rather than
//! fixed rules, so they live here instead of in the matching code.
use serde::{Deserialize, Serialize};

use crate::newtypes::CountryCode;

/// Which two-letter prefixes are accepted on letter-prefixed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixPolicy {
    /// Any two ASCII letters are accepted as the country prefix.
    #[default]
    #[serde(rename = "any")]
    AnyLetters,
    /// Only the configured [`NormalizerConfig::country_prefix`] is accepted.
    #[serde(rename = "fixed")]
    Fixed,
}

impl PrefixPolicy {
    /// Returns `true` if `prefix` is acceptable given the configured prefix.
    ///
    /// `prefix` has already been shape-checked as two uppercase letters.
    pub fn accepts(self, prefix: &str, configured: &CountryCode) -> bool {
        match self {
            Self::AnyLetters => true,
            Self::Fixed => prefix == &**configured,
        }
    }
}

/// How the ten digits of a legacy tag are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacySplit {
    /// Region (2) followed by an opaque eight-digit holding/animal block.
    #[default]
    Opaque,
    /// Region (2), holding (6), animal (2).
    Provincial,
}

/// Configuration for [`crate::Normalizer`].
///
/// Deserializes from a JSON object in which every field is optional; missing
/// fields take their [`Default`] values and unknown fields are rejected.
///
/// ```
/// use eartag_core::{LegacySplit, NormalizerConfig, PrefixPolicy};
///
/// let config = NormalizerConfig::from_json(r#"{"prefix_policy": "fixed"}"#).unwrap();
/// assert_eq!(&*config.country_prefix, "TR");
/// assert_eq!(config.prefix_policy, PrefixPolicy::Fixed);
/// assert_eq!(config.legacy_split, LegacySplit::Opaque);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Prefix inserted in front of twelve-digit numeric-only input.
    pub country_prefix: CountryCode,
    /// Which letter prefixes are accepted.
    pub prefix_policy: PrefixPolicy,
    /// Decoding of the legacy ten-digit layout.
    pub legacy_split: LegacySplit,
}

impl NormalizerConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a JSON object of the
    /// expected shape, names an unknown field, or carries an invalid prefix.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = NormalizerConfig::from_json("{}").expect("empty config");
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn all_fields_parse() {
        let config = NormalizerConfig::from_json(
            r#"{"country_prefix":"DE","prefix_policy":"fixed","legacy_split":"provincial"}"#,
        )
        .expect("full config");
        assert_eq!(&*config.country_prefix, "DE");
        assert_eq!(config.prefix_policy, PrefixPolicy::Fixed);
        assert_eq!(config.legacy_split, LegacySplit::Provincial);
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        let err = NormalizerConfig::from_json(r#"{"country_prefix":"tr"}"#)
            .expect_err("lowercase prefix");
        assert!(err.to_string().contains("CountryCode"), "error: {err}");
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(NormalizerConfig::from_json(r#"{"prefix":"TR"}"#).is_err());
    }

    #[test]
    fn fixed_policy_only_accepts_configured_prefix() {
        let tr = CountryCode::default();
        assert!(PrefixPolicy::Fixed.accepts("TR", &tr));
        assert!(!PrefixPolicy::Fixed.accepts("AB", &tr));
        assert!(PrefixPolicy::AnyLetters.accepts("AB", &tr));
    }
}

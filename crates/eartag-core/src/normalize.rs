//! Classification and decoding of raw ear-tag candidates.
//!
//! A candidate is trimmed and upper-cased, given the configured country
//! prefix if it is twelve bare digits, and then matched against the standard
//! (2 letters + 12 digits) and legacy (2 letters + 10 digits) layouts. The two
//! layouts differ in length, so at most one can match.
//!
//! Normalization is pure. Repeat-scan suppression belongs to
//! [`crate::ScanSession`].
use crate::config::{LegacySplit, NormalizerConfig};
use crate::newtypes::{AnimalCode, CountryCode, HoldingCode, RegionCode};
use crate::patterns::{LEGACY_RE, NUMERIC_ONLY_RE, STANDARD_RE};
use crate::tag::{NormalizedTag, TagFormat};

/// Why a candidate was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RejectionReason {
    /// The input matched none of the recognized layouts.
    #[error("unrecognized ear-tag format")]
    UnrecognizedFormat,
}

/// Normalizes candidates according to a [`NormalizerConfig`].
///
/// Holds only immutable configuration and is therefore `Send + Sync`; one
/// instance can serve any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Creates a normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Classifies `candidate` and decodes it into a [`NormalizedTag`].
    ///
    /// Surrounding whitespace is trimmed and ASCII letters are upper-cased.
    /// Non-ASCII letters are not folded, so `ç` stays `ç` and the candidate is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionReason::UnrecognizedFormat`] if the cleaned input is
    /// neither standard, legacy nor numeric-only, or if its letter prefix is
    /// refused by the configured [`crate::PrefixPolicy`].
    pub fn normalize(&self, candidate: &str) -> Result<NormalizedTag, RejectionReason> {
        let cleaned = candidate.trim().to_ascii_uppercase();

        let (prefixed, numeric_only) = if NUMERIC_ONLY_RE.is_match(&cleaned) {
            (format!("{}{cleaned}", self.config.country_prefix), true)
        } else {
            (cleaned, false)
        };

        let format = if STANDARD_RE.is_match(&prefixed) {
            if numeric_only {
                TagFormat::NumericOnly
            } else {
                TagFormat::Standard
            }
        } else if LEGACY_RE.is_match(&prefixed) {
            TagFormat::Legacy
        } else {
            return Err(RejectionReason::UnrecognizedFormat);
        };

        // Both layouts are pure ASCII, so byte offsets are char offsets.
        let (Some(prefix), Some(digits)) = (prefixed.get(..2), prefixed.get(2..)) else {
            return Err(RejectionReason::UnrecognizedFormat);
        };

        if !numeric_only
            && !self
                .config
                .prefix_policy
                .accepts(prefix, &self.config.country_prefix)
        {
            return Err(RejectionReason::UnrecognizedFormat);
        }

        let (region, holding, animal) = split_digits(digits, format, self.config.legacy_split)
            .ok_or(RejectionReason::UnrecognizedFormat)?;

        Ok(NormalizedTag::new(
            CountryCode::try_from(prefix).map_err(|_| RejectionReason::UnrecognizedFormat)?,
            RegionCode::try_from(region).map_err(|_| RejectionReason::UnrecognizedFormat)?,
            HoldingCode::try_from(holding).map_err(|_| RejectionReason::UnrecognizedFormat)?,
            animal
                .map(AnimalCode::try_from)
                .transpose()
                .map_err(|_| RejectionReason::UnrecognizedFormat)?,
            candidate.to_owned(),
            format,
        ))
    }
}

/// Splits the numeric suffix into region, holding and optional animal digits.
///
/// Returns `None` only if `digits` is shorter than the layout requires, which
/// the regex pre-check rules out.
fn split_digits(
    digits: &str,
    format: TagFormat,
    legacy_split: LegacySplit,
) -> Option<(&str, &str, Option<&str>)> {
    let region = digits.get(..2)?;
    match (format, legacy_split) {
        (TagFormat::Standard | TagFormat::NumericOnly, _)
        | (TagFormat::Legacy, LegacySplit::Provincial) => {
            Some((region, digits.get(2..8)?, Some(digits.get(8..)?)))
        }
        (TagFormat::Legacy, LegacySplit::Opaque) => Some((region, digits.get(2..)?, None)),
    }
}

/// Normalizes `candidate` with the default configuration: prefix `TR`, any
/// two-letter prefix accepted, legacy digits split 2 + 8.
///
/// # Errors
///
/// Returns [`RejectionReason::UnrecognizedFormat`] for any input that is not
/// a recognized ear-tag layout.
///
/// # Examples
///
/// ```
/// use eartag_core::{RejectionReason, TagFormat, normalize};
///
/// let tag = normalize("  tr010203040506 ").unwrap();
/// assert_eq!(tag.format(), TagFormat::Standard);
/// assert_eq!(tag.canonical(), "TR010203040506");
/// assert_eq!(tag.animal_code().map(|a| &**a), Some("0506"));
///
/// assert_eq!(normalize("TR12345"), Err(RejectionReason::UnrecognizedFormat));
/// ```
pub fn normalize(candidate: &str) -> Result<NormalizedTag, RejectionReason> {
    Normalizer::default().normalize(candidate)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::config::PrefixPolicy;

    fn parts(tag: &NormalizedTag) -> (String, String, String, Option<String>) {
        (
            tag.country_code().to_string(),
            tag.region_code().to_string(),
            tag.holding_code().to_string(),
            tag.animal_code().map(ToString::to_string),
        )
    }

    fn fixed_tr() -> Normalizer {
        Normalizer::new(NormalizerConfig {
            prefix_policy: PrefixPolicy::Fixed,
            ..NormalizerConfig::default()
        })
    }

    // ── standard ─────────────────────────────────────────────────────────────

    #[test]
    fn standard_splits_region_holding_animal() {
        let tag = normalize("TR010203040506").expect("standard tag");
        assert_eq!(tag.format(), TagFormat::Standard);
        assert_eq!(
            parts(&tag),
            (
                "TR".to_owned(),
                "01".to_owned(),
                "020304".to_owned(),
                Some("0506".to_owned())
            )
        );
        assert_eq!(tag.raw(), "TR010203040506");
    }

    #[test]
    fn whitespace_and_case_are_ignored() {
        let padded = normalize("  tr010203040506  ").expect("padded tag");
        let plain = normalize("TR010203040506").expect("plain tag");
        assert!(padded.same_identifier(&plain));
        assert_eq!(padded.format(), plain.format());
        assert_eq!(padded.raw(), "  tr010203040506  ");
    }

    #[test]
    fn tabs_and_newlines_are_trimmed() {
        let tag = normalize("\tTR010203040506\r\n").expect("scanner line ending");
        assert_eq!(tag.canonical(), "TR010203040506");
    }

    // ── numeric-only ─────────────────────────────────────────────────────────

    #[test]
    fn numeric_only_gets_default_prefix() {
        let tag = normalize("010203040506").expect("numeric-only tag");
        assert_eq!(tag.format(), TagFormat::NumericOnly);
        let prefixed = normalize("TR010203040506").expect("standard tag");
        assert!(tag.same_identifier(&prefixed));
        assert_eq!(tag.canonical(), prefixed.canonical());
        assert_eq!(tag.raw(), "010203040506");
    }

    #[test]
    fn numeric_only_uses_configured_prefix() {
        let normalizer = Normalizer::new(NormalizerConfig {
            country_prefix: CountryCode::try_from("DE").expect("cc"),
            ..NormalizerConfig::default()
        });
        let tag = normalizer.normalize("010203040506").expect("numeric-only");
        assert_eq!(tag.canonical(), "DE010203040506");
    }

    #[test]
    fn numeric_only_passes_fixed_policy() {
        let tag = fixed_tr().normalize("010203040506").expect("implied prefix");
        assert_eq!(&**tag.country_code(), "TR");
    }

    #[test]
    fn ten_bare_digits_are_not_numeric_only() {
        assert_eq!(
            normalize("0102030405"),
            Err(RejectionReason::UnrecognizedFormat)
        );
    }

    // ── legacy ───────────────────────────────────────────────────────────────

    #[test]
    fn legacy_opaque_split() {
        let tag = normalize("TR0102030405").expect("legacy tag");
        assert_eq!(tag.format(), TagFormat::Legacy);
        assert_eq!(&**tag.region_code(), "01");
        assert_eq!(&**tag.holding_code(), "02030405");
        assert!(tag.animal_code().is_none());
        assert_eq!(tag.digits(), "0102030405");
    }

    #[test]
    fn legacy_provincial_split() {
        let normalizer = Normalizer::new(NormalizerConfig {
            legacy_split: LegacySplit::Provincial,
            ..NormalizerConfig::default()
        });
        let tag = normalizer.normalize("tr0102030405").expect("legacy tag");
        assert_eq!(
            parts(&tag),
            (
                "TR".to_owned(),
                "01".to_owned(),
                "020304".to_owned(),
                Some("05".to_owned())
            )
        );
    }

    // ── prefix policy ────────────────────────────────────────────────────────

    #[test]
    fn any_letters_accepts_foreign_prefix() {
        let tag = normalize("AB010203040506").expect("foreign prefix");
        assert_eq!(&**tag.country_code(), "AB");
        assert_eq!(tag.digits(), "010203040506");
    }

    #[test]
    fn fixed_policy_rejects_foreign_prefix() {
        assert_eq!(
            fixed_tr().normalize("AB010203040506"),
            Err(RejectionReason::UnrecognizedFormat)
        );
        assert!(fixed_tr().normalize("tr010203040506").is_ok());
    }

    // ── rejection ────────────────────────────────────────────────────────────

    #[test]
    fn rejects_malformed_shapes() {
        for input in [
            "",
            "   ",
            "TR12345",
            "TR0102030405060",
            "TR01020304050",
            "T1010203040506",
            "1R010203040506",
            "TR01020304050A",
            "TR 010203040506",
            "TRR010203040506",
            "0102030405067",
            "01020304050",
            "ÇR010203040506",
        ] {
            assert_eq!(
                normalize(input),
                Err(RejectionReason::UnrecognizedFormat),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_ascii_letters_are_not_folded() {
        // `ß` upper-cases to `SS` under full Unicode rules; ASCII-only
        // upper-casing keeps it out of the letter class.
        assert!(normalize("ß0102030405").is_err());
    }

    #[test]
    fn non_ascii_lowercase_prefix_is_not_upper_cased() {
        // `çr` would become `ÇR` under Unicode rules; neither form is accepted.
        assert!(normalize("çr010203040506").is_err());
        assert!(normalize("tr010203040506").is_ok());
    }

    #[test]
    fn very_long_input_is_rejected() {
        let long = "9".repeat(1 << 16);
        assert_eq!(normalize(&long), Err(RejectionReason::UnrecognizedFormat));
    }

    #[test]
    fn rejection_message() {
        assert_eq!(
            RejectionReason::UnrecognizedFormat.to_string(),
            "unrecognized ear-tag format"
        );
    }

    // ── idempotence ──────────────────────────────────────────────────────────

    #[test]
    fn renormalizing_raw_yields_same_result() {
        for input in ["  tr010203040506", "010203040506", "TR0102030405"] {
            let first = normalize(input).expect("accepted");
            let second = normalize(first.raw()).expect("accepted again");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn normalizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Normalizer>();
    }
}

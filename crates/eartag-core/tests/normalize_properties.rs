//! Property-based tests for `normalize`.
//!
//! Generates candidates of each recognized shape (with random case and
//! surrounding whitespace) and arbitrary strings, and checks classification,
//! decoding, prefix insertion and idempotence.
#![allow(clippy::expect_used)]

use eartag_core::{
    DEFAULT_COUNTRY_PREFIX, Normalizer, NormalizerConfig, PrefixPolicy, RejectionReason, TagFormat,
    normalize,
};
use proptest::prelude::*;

/// Whitespace the scanner or a human might leave around a code.
const PADDING: &str = "[ \t\r\n]{0,3}";

/// Lower-cases the characters of `s` at the positions where `mask` is set.
fn mix_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().chain(std::iter::repeat(&false)))
        .map(|(c, lower)| if *lower { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Mirror of the recognized shapes, written without regexes.
fn is_recognized_shape(candidate: &str) -> bool {
    let cleaned = candidate.trim().to_ascii_uppercase();
    let bytes = cleaned.as_bytes();
    let all_digits = |b: &[u8]| b.iter().all(u8::is_ascii_digit);
    let letters = |b: &[u8]| b.iter().all(u8::is_ascii_uppercase);
    match bytes.len() {
        12 => all_digits(bytes) || (letters(&bytes[..2]) && all_digits(&bytes[2..])),
        14 => letters(&bytes[..2]) && all_digits(&bytes[2..]),
        _ => false,
    }
}

proptest! {
    #[test]
    fn standard_shape_decodes_suffix(
        prefix in "[A-Z]{2}",
        digits in "[0-9]{12}",
        mask in proptest::collection::vec(any::<bool>(), 14),
        lead in PADDING,
        trail in PADDING,
    ) {
        let candidate = format!("{lead}{}{trail}", mix_case(&format!("{prefix}{digits}"), &mask));
        let tag = normalize(&candidate).expect("standard shape accepted");
        prop_assert_eq!(tag.format(), TagFormat::Standard);
        prop_assert_eq!(tag.digits(), digits.clone());
        prop_assert_eq!(&**tag.region_code(), &digits[..2]);
        prop_assert_eq!(&**tag.holding_code(), &digits[2..8]);
        prop_assert_eq!(tag.animal_code().map(|a| a.to_string()), Some(digits[8..].to_owned()));
        prop_assert_eq!(&**tag.country_code(), prefix.as_str());
        prop_assert_eq!(tag.raw(), candidate.as_str());
    }

    #[test]
    fn numeric_only_matches_prefixed_form(digits in "[0-9]{12}", lead in PADDING) {
        let bare = normalize(&format!("{lead}{digits}")).expect("numeric-only accepted");
        let prefixed = normalize(&format!("{DEFAULT_COUNTRY_PREFIX}{digits}"))
            .expect("prefixed accepted");
        prop_assert_eq!(bare.format(), TagFormat::NumericOnly);
        prop_assert!(bare.same_identifier(&prefixed));
        prop_assert_eq!(bare.canonical(), prefixed.canonical());
    }

    #[test]
    fn legacy_shape_is_legacy(
        prefix in "[A-Za-z]{2}",
        digits in "[0-9]{10}",
        trail in PADDING,
    ) {
        let tag = normalize(&format!("{prefix}{digits}{trail}")).expect("legacy accepted");
        prop_assert_eq!(tag.format(), TagFormat::Legacy);
        prop_assert_eq!(tag.digits(), digits);
    }

    #[test]
    fn unrecognized_shapes_are_rejected(candidate in any::<String>()) {
        prop_assume!(!is_recognized_shape(&candidate));
        prop_assert_eq!(normalize(&candidate), Err(RejectionReason::UnrecognizedFormat));
    }

    #[test]
    fn near_miss_lengths_are_rejected(prefix in "[A-Z]{2}", digits in "[0-9]{0,20}") {
        prop_assume!(digits.len() != 10 && digits.len() != 12);
        let candidate = format!("{prefix}{digits}");
        prop_assert!(normalize(&candidate).is_err(), "accepted {}", candidate);
    }

    #[test]
    fn renormalizing_raw_is_idempotent(
        candidate in "[ ]{0,2}([A-Za-z]{2}[0-9]{12}|[A-Za-z]{2}[0-9]{10}|[0-9]{12})[ ]{0,2}",
    ) {
        let first = normalize(&candidate).expect("generated shape accepted");
        let second = normalize(first.raw()).expect("raw accepted again");
        prop_assert_eq!(&first, &second);
        let from_canonical = normalize(&first.canonical()).expect("canonical accepted");
        prop_assert!(from_canonical.same_identifier(&first));
    }

    #[test]
    fn fixed_policy_accepts_only_configured_prefix(
        prefix in "[A-Z]{2}",
        digits in "[0-9]{12}",
    ) {
        let fixed = Normalizer::new(NormalizerConfig {
            prefix_policy: PrefixPolicy::Fixed,
            ..NormalizerConfig::default()
        });
        let result = fixed.normalize(&format!("{prefix}{digits}"));
        prop_assert_eq!(result.is_ok(), prefix == DEFAULT_COUNTRY_PREFIX);
    }
}

//! Compiled regular expressions shared by the newtypes and the normalizer.
//!
//! Every pattern is a string literal, so compilation cannot fail in practice.
//! The workspace bans `expect()` and `unwrap()`, so [`compile`] falls back to
//! `a^`, a valid pattern that never matches anything.
use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
}

/// Two uppercase ASCII letters.
pub(crate) static COUNTRY_CODE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2}$"));

/// Two ASCII digits.
pub(crate) static REGION_CODE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{2}$"));

/// Six digits (standard layout) or eight digits (opaque legacy layout).
pub(crate) static HOLDING_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:[0-9]{6}|[0-9]{8})$"));

/// Four digits (standard layout) or two digits (provincial legacy layout).
pub(crate) static ANIMAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:[0-9]{4}|[0-9]{2})$"));

/// Twelve digits with no country prefix.
pub(crate) static NUMERIC_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{12}$"));

/// Two letters followed by twelve digits.
pub(crate) static STANDARD_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2}[0-9]{12}$"));

/// Two letters followed by ten digits.
pub(crate) static LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2}[0-9]{10}$"));

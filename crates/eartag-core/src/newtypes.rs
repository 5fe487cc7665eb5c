//! Validated newtype wrappers for the parts of an ear-tag identifier.
//!
//! Each newtype enforces a regex shape constraint at construction time via
//! [`TryFrom<&str>`]. Once constructed, the inner value is immutable (no
//! `DerefMut`). Serde `Deserialize` impls re-run validation so malformed data
//! cannot enter the type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::patterns::{ANIMAL_CODE_RE, COUNTRY_CODE_RE, HOLDING_CODE_RE, REGION_CODE_RE};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    #[error("invalid {type_name}: expected {expected}, got {got:?}")]
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

// ---------------------------------------------------------------------------
// Shared trait impls
// ---------------------------------------------------------------------------

/// Implements `TryFrom<&str>`, `Deref`, `Display`, `AsRef<str>` and the serde
/// traits for a `struct Name(String)` newtype validated by `$re`.
macro_rules! validated_string {
    ($name:ident, $re:expr, $expected:literal) => {
        impl TryFrom<&str> for $name {
            type Error = NewtypeError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                let re: &LazyLock<Regex> = &$re;
                if re.is_match(s) {
                    Ok(Self(s.to_owned()))
                } else {
                    Err(NewtypeError::InvalidFormat {
                        type_name: stringify!($name),
                        expected: $expected,
                        got: s.to_owned(),
                    })
                }
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let s = String::deserialize(d)?;
                Self::try_from(s.as_str()).map_err(de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// CountryCode
// ---------------------------------------------------------------------------

/// Prefix inserted in front of twelve-digit numeric-only input unless
/// configured otherwise.
pub const DEFAULT_COUNTRY_PREFIX: &str = "TR";

/// Issuing-country prefix of an ear tag: exactly two uppercase ASCII letters.
///
/// Regex: `^[A-Z]{2}$`. No lookup against the ISO 3166-1 list is performed;
/// whether a prefix other than the configured one is acceptable is decided by
/// [`crate::PrefixPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

validated_string!(
    CountryCode,
    COUNTRY_CODE_RE,
    "two uppercase ASCII letters (e.g. TR, DE)"
);

impl Default for CountryCode {
    fn default() -> Self {
        Self(DEFAULT_COUNTRY_PREFIX.to_owned())
    }
}

// ---------------------------------------------------------------------------
// RegionCode
// ---------------------------------------------------------------------------

/// Two-digit regional (province) code following the country prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode(String);

validated_string!(RegionCode, REGION_CODE_RE, "two ASCII digits (e.g. 01)");

// ---------------------------------------------------------------------------
// HoldingCode
// ---------------------------------------------------------------------------

/// Holding (farm) code.
///
/// Six digits in the standard layout. Eight digits when a legacy tag is
/// decoded with [`crate::LegacySplit::Opaque`], where the holding and animal
/// digits are not separated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoldingCode(String);

validated_string!(HoldingCode, HOLDING_CODE_RE, "six or eight ASCII digits");

// ---------------------------------------------------------------------------
// AnimalCode
// ---------------------------------------------------------------------------

/// Animal sequence number within a holding.
///
/// Four digits in the standard layout, two digits for a legacy tag decoded
/// with [`crate::LegacySplit::Provincial`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimalCode(String);

validated_string!(AnimalCode, ANIMAL_CODE_RE, "four or two ASCII digits");

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

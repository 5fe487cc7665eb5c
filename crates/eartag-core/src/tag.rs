//! The decoded form of an accepted ear-tag identifier.
//!
//! A [`NormalizedTag`] can only be produced by [`crate::Normalizer`] or by
//! deserializing a record whose parts are consistent with its format, so
//! holding one means the identifier matched exactly one recognized layout.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::newtypes::{AnimalCode, CountryCode, HoldingCode, NewtypeError, RegionCode};

// ---------------------------------------------------------------------------
// TagFormat
// ---------------------------------------------------------------------------

/// The layout an input was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFormat {
    /// Two letters followed by twelve digits (14 characters).
    Standard,
    /// Two letters followed by ten digits (12 characters).
    Legacy,
    /// Twelve digits with the country prefix implied. Decoded like
    /// [`TagFormat::Standard`] once the prefix is inserted.
    NumericOnly,
}

impl TagFormat {
    /// Returns the serialized name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
            Self::NumericOnly => "numeric_only",
        }
    }

    /// Number of digits following the country prefix.
    pub fn digit_count(self) -> usize {
        match self {
            Self::Standard | Self::NumericOnly => 12,
            Self::Legacy => 10,
        }
    }
}

impl fmt::Display for TagFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NormalizedTag
// ---------------------------------------------------------------------------

/// An accepted ear-tag identifier split into its parts.
///
/// `raw` keeps the caller's input exactly as given, for audit. The record
/// lookup key is [`NormalizedTag::canonical`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TagRecord")]
pub struct NormalizedTag {
    country_code: CountryCode,
    region_code: RegionCode,
    holding_code: HoldingCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    animal_code: Option<AnimalCode>,
    raw: String,
    format: TagFormat,
}

impl NormalizedTag {
    pub(crate) fn new(
        country_code: CountryCode,
        region_code: RegionCode,
        holding_code: HoldingCode,
        animal_code: Option<AnimalCode>,
        raw: String,
        format: TagFormat,
    ) -> Self {
        Self {
            country_code,
            region_code,
            holding_code,
            animal_code,
            raw,
            format,
        }
    }

    /// The two-letter country prefix (inserted for numeric-only input).
    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    /// The two-digit region code.
    pub fn region_code(&self) -> &RegionCode {
        &self.region_code
    }

    /// The holding code: six digits, or eight for an opaque legacy split.
    pub fn holding_code(&self) -> &HoldingCode {
        &self.holding_code
    }

    /// The animal sequence number, absent for an opaque legacy split.
    pub fn animal_code(&self) -> Option<&AnimalCode> {
        self.animal_code.as_ref()
    }

    /// The input exactly as supplied, before trimming and upper-casing.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The layout the input was recognized as.
    pub fn format(&self) -> TagFormat {
        self.format
    }

    /// Region, holding and animal digits concatenated.
    pub fn digits(&self) -> String {
        let mut out = String::with_capacity(self.format.digit_count());
        out.push_str(&self.region_code);
        out.push_str(&self.holding_code);
        if let Some(animal) = &self.animal_code {
            out.push_str(animal);
        }
        out
    }

    /// Country prefix followed by [`NormalizedTag::digits`].
    ///
    /// Numeric-only input gains its prefix here, so `010203040506` and
    /// `TR010203040506` share one canonical value.
    pub fn canonical(&self) -> String {
        format!("{}{}", self.country_code, self.digits())
    }

    /// One-line summary of the decoded parts, e.g.
    /// `region 01, holding 020304, animal 0506`.
    pub fn describe(&self) -> String {
        match &self.animal_code {
            Some(animal) => format!(
                "region {}, holding {}, animal {animal}",
                self.region_code, self.holding_code
            ),
            None => format!("region {}, holding {}", self.region_code, self.holding_code),
        }
    }

    /// Returns `true` if both tags decode to the same parts, ignoring `raw`
    /// and the numeric-only/standard distinction.
    pub fn same_identifier(&self, other: &Self) -> bool {
        self.country_code == other.country_code
            && self.region_code == other.region_code
            && self.holding_code == other.holding_code
            && self.animal_code == other.animal_code
    }
}

impl fmt::Display for NormalizedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Wire shape of a [`NormalizedTag`]. Each part is validated by its newtype;
/// [`TryFrom`] then checks that the parts fit the declared format.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TagRecord {
    country_code: CountryCode,
    region_code: RegionCode,
    holding_code: HoldingCode,
    #[serde(default)]
    animal_code: Option<AnimalCode>,
    raw: String,
    format: TagFormat,
}

impl TryFrom<TagRecord> for NormalizedTag {
    type Error = NewtypeError;

    fn try_from(record: TagRecord) -> Result<Self, Self::Error> {
        let holding_len = record.holding_code.len();
        let animal_len = record.animal_code.as_ref().map(|a| a.len());
        let consistent = match record.format {
            TagFormat::Standard | TagFormat::NumericOnly => {
                holding_len == 6 && animal_len == Some(4)
            }
            TagFormat::Legacy => {
                (holding_len == 8 && animal_len.is_none())
                    || (holding_len == 6 && animal_len == Some(2))
            }
        };
        if !consistent {
            return Err(NewtypeError::InvalidFormat {
                type_name: "NormalizedTag",
                expected: "holding/animal digit counts matching the declared format",
                got: format!(
                    "{} {}{}{}",
                    record.format,
                    record.region_code,
                    record.holding_code,
                    record.animal_code.as_deref().unwrap_or("")
                ),
            });
        }
        Ok(Self::new(
            record.country_code,
            record.region_code,
            record.holding_code,
            record.animal_code,
            record.raw,
            record.format,
        ))
    }
}

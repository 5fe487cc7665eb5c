//! Scanner read generator.
//!
//! Produces a stream of [`Candidate`]s, each tagged with the [`CandidateKind`]
//! that determines whether the default normalizer should accept it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Country prefixes drawn for prefixed candidates.
const PREFIXES: &[&str] = &["TR", "DE", "FR", "AT", "NL", "IE"];

/// Digit counts that match no recognized format, with or without a prefix.
const BAD_LENGTHS: &[usize] = &[5, 7, 9, 11, 13, 15];

/// What a generated candidate is meant to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Two letters plus twelve digits, already canonical.
    Standard,
    /// Two letters plus ten digits.
    Legacy,
    /// Twelve bare digits.
    NumericOnly,
    /// A standard tag in lower case with surrounding whitespace.
    Messy,
    /// Input no format accepts.
    Invalid,
}

/// A single generated scanner read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The raw text as a scanner would deliver it.
    pub text: String,
    /// The shape the text was generated from.
    pub kind: CandidateKind,
}

/// Configuration for the candidate generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of candidates to produce.
    pub count: usize,
    /// Fraction of legacy ten-digit tags (0.0-1.0).
    pub legacy_ratio: f64,
    /// Fraction of bare twelve-digit reads (0.0-1.0).
    pub numeric_ratio: f64,
    /// Fraction of lower-case, padded reads (0.0-1.0).
    pub messy_ratio: f64,
    /// Fraction of unrecognizable reads (0.0-1.0).
    pub invalid_ratio: f64,
    /// Chance that a read repeats the previous one verbatim (0.0-1.0).
    pub duplicate_ratio: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 reads, one pen of animals.
    Small,
    /// 10,000 reads, a day at a large holding.
    Medium,
    /// 250,000 reads, a bulk import.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            SizeTier::Small => 100,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 250_000,
        };
        GeneratorConfig {
            seed,
            count,
            legacy_ratio: 0.1,
            numeric_ratio: 0.15,
            messy_ratio: 0.1,
            invalid_ratio: 0.05,
            duplicate_ratio: 0.2,
        }
    }
}

/// Generates `config.count` candidates.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_candidates(config: &GeneratorConfig) -> Vec<Candidate> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut out: Vec<Candidate> = Vec::with_capacity(config.count);

    let duplicate_ratio = config.duplicate_ratio.clamp(0.0, 1.0);

    while out.len() < config.count {
        let repeat = match out.last() {
            Some(previous) if rng.gen_bool(duplicate_ratio) => Some(previous.clone()),
            Some(_) | None => None,
        };
        let next = repeat.unwrap_or_else(|| {
            let kind = pick_kind(config, &mut rng);
            Candidate {
                text: render(kind, &mut rng),
                kind,
            }
        });
        out.push(next);
    }
    out
}

fn pick_kind(config: &GeneratorConfig, rng: &mut StdRng) -> CandidateKind {
    let roll: f64 = rng.gen_range(0.0..1.0);
    let mut threshold = config.invalid_ratio;
    if roll < threshold {
        return CandidateKind::Invalid;
    }
    threshold += config.legacy_ratio;
    if roll < threshold {
        return CandidateKind::Legacy;
    }
    threshold += config.numeric_ratio;
    if roll < threshold {
        return CandidateKind::NumericOnly;
    }
    threshold += config.messy_ratio;
    if roll < threshold {
        return CandidateKind::Messy;
    }
    CandidateKind::Standard
}

fn render(kind: CandidateKind, rng: &mut StdRng) -> String {
    match kind {
        CandidateKind::Standard => format!("{}{}", prefix(rng), digits(rng, 12)),
        CandidateKind::Legacy => format!("{}{}", prefix(rng), digits(rng, 10)),
        CandidateKind::NumericOnly => digits(rng, 12),
        CandidateKind::Messy => {
            let tag = format!("{}{}", prefix(rng), digits(rng, 12)).to_ascii_lowercase();
            let pad = ["  ", "\t", " ", ""];
            let lead = pad.choose(rng).copied().unwrap_or_default();
            let trail = pad.choose(rng).copied().unwrap_or_default();
            format!("{lead}{tag}{trail}")
        }
        CandidateKind::Invalid => invalid(rng),
    }
}

fn invalid(rng: &mut StdRng) -> String {
    match rng.gen_range(0..4u8) {
        // Wrong digit count after a valid prefix.
        0 => {
            let len = BAD_LENGTHS.choose(rng).copied().unwrap_or(7);
            format!("{}{}", prefix(rng), digits(rng, len))
        }
        // A single letter in the digit run.
        1 => {
            let mut body = digits(rng, 12);
            let at = rng.gen_range(0..body.len());
            body.replace_range(at..=at, "X");
            format!("{}{body}", prefix(rng))
        }
        // Three-letter prefix.
        2 => format!("TUR{}", digits(rng, 12)),
        // Bare digits of the wrong length.
        _ => {
            let len = BAD_LENGTHS.choose(rng).copied().unwrap_or(11);
            digits(rng, len)
        }
    }
}

fn prefix(rng: &mut StdRng) -> &'static str {
    PREFIXES.choose(rng).copied().unwrap_or("TR")
}

fn digits(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_produce_requested_count() {
        assert_eq!(generate_candidates(&SizeTier::Small.config(1)).len(), 100);
        assert_eq!(
            generate_candidates(&SizeTier::Medium.config(1)).len(),
            10_000
        );
    }

    #[test]
    fn zero_ratios_yield_only_standard() {
        let config = GeneratorConfig {
            seed: 9,
            count: 50,
            legacy_ratio: 0.0,
            numeric_ratio: 0.0,
            messy_ratio: 0.0,
            invalid_ratio: 0.0,
            duplicate_ratio: 0.0,
        };
        let all = generate_candidates(&config);
        assert!(all.iter().all(|c| c.kind == CandidateKind::Standard));
        assert!(all.iter().all(|c| c.text.len() == 14));
    }

    #[test]
    fn digits_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let d = digits(&mut rng, 12);
        assert_eq!(d.len(), 12);
        assert!(d.bytes().all(|b| b.is_ascii_digit()));
    }
}

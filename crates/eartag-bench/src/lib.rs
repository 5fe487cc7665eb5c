//! Scanner-input generator and benchmark utilities for `eartag`.
//!
//! This crate provides deterministic generation of realistic scanner reads
//! (clean tags, legacy tags, bare numerics, sloppy keyboard-wedge input and
//! garbage) for benchmarking and property-based testing of `eartag-core`.

pub mod generator;

pub use generator::{Candidate, CandidateKind, GeneratorConfig, SizeTier, generate_candidates};

/// Joins generated candidates into a newline-separated scan log, the shape
/// `eartag scan` reads.
pub fn scan_log(candidates: &[Candidate]) -> String {
    let mut out = String::with_capacity(candidates.len() * 16);
    for candidate in candidates {
        out.push_str(&candidate.text);
        out.push('\n');
    }
    out
}

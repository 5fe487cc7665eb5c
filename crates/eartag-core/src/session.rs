//! Capture-side repeat-scan suppression.
//!
//! A scanner that holds a tag in front of the camera reports the same code
//! many times. [`ScanSession`] remembers the last accepted canonical value and
//! the time it was last seen, and reports an identical value as a
//! [`ScanEvent::Repeat`] instead of a new read. This state is kept out of
//! [`crate::Normalizer`], which stays pure.
use std::time::{Duration, Instant};

use crate::normalize::{Normalizer, RejectionReason};
use crate::tag::NormalizedTag;

/// Outcome of submitting one candidate to a [`ScanSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A new identifier; it is now the session's last-seen value.
    Accepted(NormalizedTag),
    /// The same canonical value as the last accepted read.
    Repeat(NormalizedTag),
    /// The candidate was not a recognized ear tag. Last-seen state is kept.
    Rejected {
        /// The candidate as submitted.
        raw: String,
        /// Why normalization failed.
        reason: RejectionReason,
    },
}

/// Running counts for a [`ScanSession`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidates reported as [`ScanEvent::Accepted`].
    pub accepted: usize,
    /// Candidates reported as [`ScanEvent::Repeat`].
    pub repeats: usize,
    /// Candidates reported as [`ScanEvent::Rejected`].
    pub rejected: usize,
}

#[derive(Debug, Clone)]
struct LastSeen {
    canonical: String,
    at: Instant,
}

/// Per-session debounce state for a capture surface.
///
/// With `window = None` any immediate repeat is suppressed no matter how much
/// time has passed. With `window = Some(d)` a repeat is only suppressed if the
/// previous sighting was at most `d` earlier; each suppressed repeat refreshes
/// the sighting time, so a tag held in view stays suppressed.
#[derive(Debug, Clone)]
pub struct ScanSession {
    normalizer: Normalizer,
    window: Option<Duration>,
    last: Option<LastSeen>,
    stats: ScanStats,
}

impl ScanSession {
    /// Creates an empty session.
    pub fn new(normalizer: Normalizer, window: Option<Duration>) -> Self {
        Self {
            normalizer,
            window,
            last: None,
            stats: ScanStats::default(),
        }
    }

    /// Normalizes `candidate` and classifies it against the last-seen value.
    pub fn submit(&mut self, candidate: &str, at: Instant) -> ScanEvent {
        match self.normalizer.normalize(candidate) {
            Ok(tag) => self.observe(tag, at),
            Err(reason) => {
                self.stats.rejected += 1;
                tracing::debug!(raw = candidate, %reason, "scan rejected");
                ScanEvent::Rejected {
                    raw: candidate.to_owned(),
                    reason,
                }
            }
        }
    }

    /// Applies repeat suppression to an already-normalized tag.
    pub fn observe(&mut self, tag: NormalizedTag, at: Instant) -> ScanEvent {
        let canonical = tag.canonical();
        let repeat = self.last.as_ref().is_some_and(|last| {
            last.canonical == canonical
                && self
                    .window
                    .is_none_or(|window| at.saturating_duration_since(last.at) <= window)
        });

        if repeat {
            if let Some(last) = self.last.as_mut() {
                last.at = at;
            }
            self.stats.repeats += 1;
            tracing::debug!(tag = %canonical, "repeat scan suppressed");
            ScanEvent::Repeat(tag)
        } else {
            self.stats.accepted += 1;
            tracing::debug!(tag = %canonical, format = %tag.format(), "scan accepted");
            self.last = Some(LastSeen { canonical, at });
            ScanEvent::Accepted(tag)
        }
    }

    /// Forgets the last-seen value so the next read is always accepted.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Canonical value of the last accepted read, if any.
    pub fn last_seen(&self) -> Option<&str> {
        self.last.as_ref().map(|last| last.canonical.as_str())
    }

    /// Counts of accepted, repeated and rejected candidates so far.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// The normalizer this session submits candidates to.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

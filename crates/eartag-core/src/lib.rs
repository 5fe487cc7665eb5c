#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod newtypes;
pub mod normalize;
mod patterns;
pub mod session;
pub mod tag;

pub use config::{LegacySplit, NormalizerConfig, PrefixPolicy};
pub use newtypes::{
    AnimalCode, CountryCode, DEFAULT_COUNTRY_PREFIX, HoldingCode, NewtypeError, RegionCode,
};
pub use normalize::{Normalizer, RejectionReason, normalize};
pub use session::{ScanEvent, ScanSession, ScanStats};
pub use tag::{NormalizedTag, TagFormat};

/// Returns the current version of the eartag-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

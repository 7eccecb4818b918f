//! Brokode - Vietnamese text <-> Brokode notation
//!
//! This crate converts Vietnamese text into the Brokode notation and back.
//! Every letter becomes a numeric token, its diacritics become short tags,
//! and each line is wrapped as `C(...)`.
//!
//! # Features
//!
//! - Normalization so that precomposed and combining-mark input encode alike
//! - Lossless round trip for letters with at most one vowel-family tag and
//!   one tone, digits `1`-`9`, space and newline
//! - Graceful degradation: unknown characters and tokens become `?`,
//!   lines without an envelope decode to themselves
//! - Loss reports, auto-detected direction and parallel batches
//!
//! # Example
//!
//! ```rust
//! use brokode::Codec;
//!
//! let codec = Codec::builder().fold_case(true).build();
//!
//! let encoded = codec.encode("ồ");
//! assert_eq!(encoded, "C(24km/hh)");
//! assert_eq!(codec.decode(&encoded), "ồ");
//! ```

// Re-export the alphabet and error types
pub use brokode_core::{CodecError, ModifierTag, Modifiers, Result, Tone, VowelFamily};

// Codec API
pub mod codec;
pub use codec::{Codec, CodecBuilder, CodecConfig, Conversion, Direction};

// Wire notation
pub mod notation;
pub use notation::CharCode;

// Normalization
pub mod normalize;
pub use normalize::{Decomposed, Normalizer};

// Loss reporting
pub mod report;
pub use report::{Loss, LossCause, LossReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode text with the default configuration.
pub fn encode(text: &str) -> String {
    Codec::default().encode(text)
}

/// Decode Brokode text with the default configuration.
pub fn decode(text: &str) -> String {
    Codec::default().decode(text)
}

//! Brokode-core - the Brokode alphabet
//!
//! This crate holds the static, read-only tables that define the Brokode
//! notation, independent of the encoding engine that walks text.
//!
//! # Tables
//!
//! - Base letters (26 Latin letters plus space) and their numeric tokens
//! - Digit tokens, which never carry modifiers
//! - Vowel-modifier families (`kw`, `km`) and the five tone tags
//!
//! Every reverse lookup is derived from its forward table the first time it
//! is used, so the two directions cannot drift apart.
//!
//! # Example
//!
//! ```rust
//! use brokode_core::{letter_token, token_letter, Tone, VowelFamily};
//!
//! assert_eq!(letter_token('a'), Some("78"));
//! assert_eq!(token_letter("78"), Some('a'));
//! assert_eq!(VowelFamily::Km.apply('o'), Some('ô'));
//! assert_eq!(Tone::Grave.tag(), "hh");
//! ```

pub mod error;
pub use error::{CodecError, Result};

pub mod alphabet;
pub use alphabet::{
    decode_digit, digit_token, letter_token, token_letter, ModifierTag, Modifiers, Tone,
    VowelFamily, UNKNOWN, UNKNOWN_TOKEN,
};

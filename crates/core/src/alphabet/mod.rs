//! The Brokode alphabet.
//!
//! Three static tables make up the notation: base letters, digits and
//! modifier tags. None of them is mutated after first use.

pub mod digits;
pub mod letters;
pub mod modifiers;

pub use digits::{decode_digit, digit_token};
pub use letters::{letter_token, token_letter};
pub use modifiers::{ModifierTag, Modifiers, Tone, VowelFamily};

/// Placeholder emitted for anything the notation cannot represent.
pub const UNKNOWN: char = '?';

/// [`UNKNOWN`] as it appears inside an envelope.
pub const UNKNOWN_TOKEN: &str = "?";

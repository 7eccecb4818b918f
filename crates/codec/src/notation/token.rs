//! Single tokens of the notation.

use brokode_core::alphabet::digits::DIGITS;
use brokode_core::{
    digit_token, letter_token, token_letter, CodecError, ModifierTag, Modifiers, Result,
    UNKNOWN_TOKEN,
};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// One encoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharCode {
    /// Base letter token plus modifiers
    Letter {
        token: &'static str,
        modifiers: Modifiers,
    },
    /// Digit token; never carries modifiers
    Digit { digit: char, token: &'static str },
    /// Placeholder for anything outside the alphabet
    Unknown,
}

impl CharCode {
    /// Build the code of a base letter, if the letter has a token.
    pub fn letter(base: char, modifiers: Modifiers) -> Option<Self> {
        letter_token(base).map(|token| CharCode::Letter { token, modifiers })
    }

    /// Build the code of an ASCII digit.
    pub fn digit(digit: char) -> Option<Self> {
        digit_token(digit).map(|token| CharCode::Digit { digit, token })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CharCode::Unknown)
    }

    /// Parse a token, rejecting anything the lenient decoder would turn
    /// into `?`.
    ///
    /// Tags resolve the way the decoder applies them: the first family tag
    /// that knows the base letter takes effect, and the last tone tag wins.
    /// Family tags that fit no letter of the token are rejected.
    pub fn parse_strict(token: &str) -> Result<Self> {
        if let Some(&(digit, known)) = DIGITS.iter().find(|&&(_, t)| t == token) {
            return Ok(CharCode::Digit {
                digit,
                token: known,
            });
        }

        let (code, tags) = split_token(token);
        let base =
            token_letter(code).ok_or_else(|| CodecError::UnknownToken(token.to_string()))?;

        let mut modifiers = Modifiers::default();
        let mut unfit = None;
        if !tags.is_empty() {
            for tag in tags.split('/') {
                match tag.parse::<ModifierTag>()? {
                    ModifierTag::Family(family) => {
                        if modifiers.family.is_none() && family.apply(base).is_some() {
                            modifiers.family = Some(family);
                        } else if family.apply(base).is_none() {
                            unfit = unfit.or(Some(family));
                        }
                    }
                    ModifierTag::Tone(tone) => modifiers.tone = Some(tone),
                }
            }
        }

        if let (None, Some(family)) = (modifiers.family, unfit) {
            return Err(CodecError::UnknownTag(format!(
                "{} on {}",
                family.tag(),
                code
            )));
        }

        CharCode::letter(base, modifiers)
            .ok_or_else(|| CodecError::UnknownToken(token.to_string()))
    }
}

/// Renders the wire form: `78`, `24km/hh`, `9a1` or `?`.
impl fmt::Display for CharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharCode::Letter { token, modifiers } => write!(f, "{}{}", token, modifiers),
            CharCode::Digit { token, .. } => f.write_str(token),
            CharCode::Unknown => f.write_str(UNKNOWN_TOKEN),
        }
    }
}

/// Split a token into its leading numeric code and trailing tag list.
///
/// The tag list starts at the first non-digit character and may be empty.
pub fn split_token(token: &str) -> (&str, &str) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?s)^(?P<code>[0-9]*)(?P<tags>.*)$").expect("Invalid token pattern")
    });

    match re.captures(token) {
        Some(caps) => (
            caps.name("code").map_or("", |m| m.as_str()),
            caps.name("tags").map_or("", |m| m.as_str()),
        ),
        None => ("", token),
    }
}

//! Unicode normalization for the codec.
//!
//! Text is brought to NFC before encoding so that the same visible letter
//! always arrives as the same code point. Each character is then split into
//! a base letter and its modifiers by way of its canonical decomposition.

use brokode_core::{Modifiers, Tone, VowelFamily};
use unicode_normalization::UnicodeNormalization;

/// Normalization form applied to whole input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition
    #[default]
    NFC,
    /// No normalization
    None,
}

/// Unicode normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Normalization form to apply
    form: NormalizationForm,
}

/// A character split into its base letter and ordered modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
    pub base: char,
    pub modifiers: Modifiers,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    /// Create an NFC normalizer (default).
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    /// Create a normalizer that leaves text untouched.
    pub fn disabled() -> Self {
        Self::new(NormalizationForm::None)
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::None => text.to_string(),
        }
    }

    /// Check if normalization is enabled.
    pub fn is_enabled(&self) -> bool {
        self.form != NormalizationForm::None
    }

    /// Split one character into base letter and modifiers.
    ///
    /// The character is decomposed canonically. Tone marks are pulled out;
    /// the base plus every other mark is recomposed and looked up as a
    /// vowel-family variant. `đ` has no decomposition in any form and is
    /// matched directly. Marks that are neither tones nor part of a known
    /// variant are dropped, so `ü` comes back as plain `u`.
    pub fn decompose(ch: char) -> Decomposed {
        let mut parts = std::iter::once(ch).nfd();
        let base = parts.next().unwrap_or(ch);

        let mut tone = None;
        let mut detoned = String::with_capacity(4);
        detoned.push(base);
        for mark in parts {
            match Tone::from_mark(mark) {
                // one tone per character; later ones are ignored
                Some(found) => {
                    tone = tone.or(Some(found));
                }
                None => detoned.push(mark),
            }
        }

        let detoned = single_char(&detoned);

        if base == 'đ' || detoned == Some('đ') {
            return Decomposed {
                base: 'd',
                modifiers: Modifiers::new(Some(VowelFamily::Kw), tone),
            };
        }

        if let Some((origin, family)) = detoned.and_then(VowelFamily::base_of) {
            return Decomposed {
                base: origin,
                modifiers: Modifiers::new(Some(family), tone),
            };
        }

        Decomposed {
            base,
            modifiers: Modifiers::new(None, tone),
        }
    }
}

/// Recompose `text` and return it if it collapses to one code point.
fn single_char(text: &str) -> Option<char> {
    let mut composed = text.nfc();
    match (composed.next(), composed.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

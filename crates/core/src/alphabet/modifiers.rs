//! Modifier tags.
//!
//! A character carries at most one vowel-modifier family tag and at most one
//! tone tag. The family always comes first, the tone last; [`Modifiers`]
//! makes that order part of the type instead of a list convention.

use crate::error::CodecError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Letters transformed by `kw` (breve, horn and the stroked d).
const KW_VARIANTS: [(char, char); 4] = [('a', 'ă'), ('o', 'ơ'), ('u', 'ư'), ('d', 'đ')];

/// Letters transformed by `km` (circumflex).
const KM_VARIANTS: [(char, char); 3] = [('a', 'â'), ('o', 'ô'), ('e', 'ê')];

/// Vowel-modifier family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VowelFamily {
    /// Breve or horn: ă, ơ, ư, plus đ
    Kw,
    /// Circumflex: â, ô, ê
    Km,
}

impl VowelFamily {
    pub const ALL: [VowelFamily; 2] = [VowelFamily::Kw, VowelFamily::Km];

    /// Tag written after the base token.
    pub fn tag(self) -> &'static str {
        match self {
            VowelFamily::Kw => "kw",
            VowelFamily::Km => "km",
        }
    }

    /// Base letter -> variant pairs of this family.
    pub fn variants(self) -> &'static [(char, char)] {
        match self {
            VowelFamily::Kw => &KW_VARIANTS,
            VowelFamily::Km => &KM_VARIANTS,
        }
    }

    /// Transform a base letter into this family's variant.
    pub fn apply(self, base: char) -> Option<char> {
        self.variants()
            .iter()
            .find(|&&(b, _)| b == base)
            .map(|&(_, variant)| variant)
    }

    /// Find the base letter and family a variant letter came from.
    pub fn base_of(variant: char) -> Option<(char, VowelFamily)> {
        static REVERSE: OnceLock<AHashMap<char, (char, VowelFamily)>> = OnceLock::new();
        REVERSE
            .get_or_init(|| {
                VowelFamily::ALL
                    .iter()
                    .flat_map(|&family| {
                        family
                            .variants()
                            .iter()
                            .map(move |&(base, variant)| (variant, (base, family)))
                    })
                    .collect()
            })
            .get(&variant)
            .copied()
    }
}

/// Vietnamese tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// sắc
    Acute,
    /// huyền
    Grave,
    /// hỏi
    HookAbove,
    /// ngã
    Tilde,
    /// nặng
    DotBelow,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Acute,
        Tone::Grave,
        Tone::HookAbove,
        Tone::Tilde,
        Tone::DotBelow,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Tone::Acute => "s",
            Tone::Grave => "hh",
            Tone::HookAbove => "hr",
            Tone::Tilde => "dx",
            Tone::DotBelow => "nn",
        }
    }

    /// Combining mark for this tone.
    pub fn mark(self) -> char {
        match self {
            Tone::Acute => '\u{0301}',
            Tone::Grave => '\u{0300}',
            Tone::HookAbove => '\u{0309}',
            Tone::Tilde => '\u{0303}',
            Tone::DotBelow => '\u{0323}',
        }
    }

    /// Classify a combining mark as a tone.
    pub fn from_mark(mark: char) -> Option<Tone> {
        Tone::ALL.into_iter().find(|tone| tone.mark() == mark)
    }
}

/// Either kind of tag, as it appears in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierTag {
    Family(VowelFamily),
    Tone(Tone),
}

impl ModifierTag {
    pub fn tag(self) -> &'static str {
        match self {
            ModifierTag::Family(family) => family.tag(),
            ModifierTag::Tone(tone) => tone.tag(),
        }
    }
}

impl FromStr for ModifierTag {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(family) = VowelFamily::ALL.into_iter().find(|f| f.tag() == s) {
            return Ok(ModifierTag::Family(family));
        }
        Tone::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .map(ModifierTag::Tone)
            .ok_or_else(|| CodecError::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for ModifierTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Modifiers of one character, in composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub family: Option<VowelFamily>,
    pub tone: Option<Tone>,
}

impl Modifiers {
    pub fn new(family: Option<VowelFamily>, tone: Option<Tone>) -> Self {
        Self { family, tone }
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.tone.is_none()
    }

    /// Tags in the order they are written and reapplied.
    pub fn tags(&self) -> impl Iterator<Item = ModifierTag> {
        self.family
            .map(ModifierTag::Family)
            .into_iter()
            .chain(self.tone.map(ModifierTag::Tone))
    }
}

/// Writes `kw`, `hh` or `km/hh`: first tag bare, the rest `/`-prefixed.
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(tag.tag())?;
        }
        Ok(())
    }
}

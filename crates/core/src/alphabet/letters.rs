//! Base letters and their numeric tokens.
//!
//! The forward table is the single source of truth. The reverse lookup is
//! built from it on first use and shared read-only afterwards.

use ahash::AHashMap;
use std::sync::OnceLock;

/// Forward mapping: base letter -> token
pub type LetterMap = AHashMap<char, &'static str>;

/// Reverse mapping: token -> base letter
pub type TokenMap = AHashMap<&'static str, char>;

/// The 26 unmarked letters plus space, in table order.
pub const LETTERS: [(char, &str); 27] = [
    ('a', "78"),
    ('b', "75"),
    ('c', "72"),
    ('d', "69"),
    ('e', "66"),
    ('f', "63"),
    ('g', "60"),
    ('h', "38"),
    ('i', "36"),
    ('j', "34"),
    ('k', "32"),
    ('l', "30"),
    ('m', "28"),
    ('n', "26"),
    ('o', "24"),
    ('p', "22"),
    ('q', "10"),
    ('r', "9"),
    ('s', "8"),
    ('t', "7"),
    ('u', "6"),
    ('v', "5"),
    ('w', "4"),
    ('x', "3"),
    ('y', "2"),
    ('z', "1"),
    (' ', "0"),
];

struct LetterTables {
    forward: LetterMap,
    reverse: TokenMap,
}

impl LetterTables {
    fn build() -> Self {
        let forward: LetterMap = LETTERS.iter().copied().collect();
        let reverse: TokenMap = forward.iter().map(|(&c, &t)| (t, c)).collect();
        Self { forward, reverse }
    }
}

fn tables() -> &'static LetterTables {
    static TABLES: OnceLock<LetterTables> = OnceLock::new();
    TABLES.get_or_init(LetterTables::build)
}

/// Get the token for a base letter.
#[inline]
pub fn letter_token(letter: char) -> Option<&'static str> {
    tables().forward.get(&letter).copied()
}

/// Get the base letter for a token.
#[inline]
pub fn token_letter(token: &str) -> Option<char> {
    tables().reverse.get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_bijective() {
        let tables = tables();
        assert_eq!(tables.forward.len(), LETTERS.len());
        assert_eq!(tables.reverse.len(), LETTERS.len());

        for (letter, token) in LETTERS {
            assert_eq!(letter_token(letter), Some(token));
            assert_eq!(token_letter(token), Some(letter));
        }
    }

    #[test]
    fn test_space_and_unknown() {
        assert_eq!(letter_token(' '), Some("0"));
        assert_eq!(token_letter("0"), Some(' '));
        assert_eq!(letter_token('ă'), None);
        assert_eq!(letter_token('A'), None);
        assert_eq!(token_letter("780"), None);
        assert_eq!(token_letter(""), None);
    }

    #[test]
    fn test_tokens_are_numeric() {
        for (_, token) in LETTERS {
            assert!(!token.is_empty() && token.len() <= 2);
            assert!(token.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}

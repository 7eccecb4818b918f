//! Digit tokens.
//!
//! Digits use their own fixed tokens and never take modifier tags. The token
//! for `'0'` decodes to a space, not back to `'0'`; existing Brokode text
//! relies on that, so it is kept.

use ahash::AHashMap;
use std::sync::OnceLock;

/// Digits and their tokens, `'1'..='9'` then `'0'`.
pub const DIGITS: [(char, &str); 10] = [
    ('1', "9a1"),
    ('2', "8b1"),
    ('3', "9c1"),
    ('4', "8d1"),
    ('5', "9e1"),
    ('6', "8f1"),
    ('7', "9g1"),
    ('8', "8h1"),
    ('9', "9i1"),
    ('0', "ao"),
];

/// Token of the digit that decodes to a space.
pub const ZERO_TOKEN: &str = "ao";

fn reverse() -> &'static AHashMap<&'static str, char> {
    static REVERSE: OnceLock<AHashMap<&'static str, char>> = OnceLock::new();
    REVERSE.get_or_init(|| {
        DIGITS
            .iter()
            .map(|&(digit, token)| {
                let decoded = if token == ZERO_TOKEN { ' ' } else { digit };
                (token, decoded)
            })
            .collect()
    })
}

/// Get the token for an ASCII digit.
pub fn digit_token(digit: char) -> Option<&'static str> {
    DIGITS
        .iter()
        .find(|&&(d, _)| d == digit)
        .map(|&(_, token)| token)
}

/// Decode a digit token.
///
/// Returns a space for [`ZERO_TOKEN`].
pub fn decode_digit(token: &str) -> Option<char> {
    reverse().get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_tokens() {
        assert_eq!(digit_token('1'), Some("9a1"));
        assert_eq!(digit_token('9'), Some("9i1"));
        assert_eq!(digit_token('0'), Some("ao"));
        assert_eq!(digit_token('a'), None);
    }

    #[test]
    fn test_decode_digits() {
        for (digit, token) in DIGITS.iter().take(9) {
            assert_eq!(decode_digit(token), Some(*digit));
        }
        assert_eq!(decode_digit("9z1"), None);
    }

    #[test]
    fn test_zero_decodes_to_space() {
        assert_eq!(decode_digit(ZERO_TOKEN), Some(' '));
    }
}

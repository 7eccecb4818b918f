//! The `C(...)` line envelope.

/// Envelope opening.
pub const OPEN: &str = "C(";

/// Envelope closing.
pub const CLOSE: &str = ")";

/// Token separator inside an envelope.
pub const SEPARATOR: char = '.';

/// Extract the token list of an enveloped line.
///
/// Surrounding whitespace is ignored. Returns `None` when the trimmed line
/// does not start with `C(` and end with `)`.
pub fn interior(line: &str) -> Option<&str> {
    line.trim().strip_prefix(OPEN)?.strip_suffix(CLOSE)
}

/// Check whether trimmed text looks like Brokode.
pub fn is_enveloped(text: &str) -> bool {
    let text = text.trim();
    text.starts_with(OPEN) && text.ends_with(CLOSE)
}

/// Wrap rendered tokens into one envelope.
pub fn wrap<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out = String::from(OPEN);
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(token.as_ref());
    }
    out.push_str(CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior() {
        assert_eq!(interior("C(78.75)"), Some("78.75"));
        assert_eq!(interior("  C()  "), Some(""));
        assert_eq!(interior("C("), None);
        assert_eq!(interior("hello"), None);
        assert_eq!(interior("c(78)"), None);
    }

    #[test]
    fn test_is_enveloped() {
        assert!(is_enveloped(" C(78)\n"));
        assert!(!is_enveloped("C(78"));
        assert!(!is_enveloped(""));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(["78", "0", "75"]), "C(78.0.75)");
        assert_eq!(wrap(Vec::<String>::new()), "C()");
    }
}

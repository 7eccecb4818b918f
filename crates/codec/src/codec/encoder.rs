//! Text -> Brokode.

use crate::normalize::Normalizer;
use crate::notation::{wrap, CharCode};
use crate::report::{LossCause, LossReport};

/// Per-line encoder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Encoder {
    /// Lowercase characters before lookup
    fold_case: bool,
}

impl Encoder {
    pub(crate) fn new(fold_case: bool) -> Self {
        Self { fold_case }
    }

    /// Classify one character.
    ///
    /// Returns `None` for whitespace that has no token (tab, CR); those are
    /// skipped rather than reported.
    pub(crate) fn classify(&self, ch: char) -> Option<CharCode> {
        // extra chars of a multi-char lowercase mapping are combining marks
        let ch = if self.fold_case {
            ch.to_lowercase().next().unwrap_or(ch)
        } else {
            ch
        };

        if ch.is_ascii_digit() {
            return CharCode::digit(ch);
        }

        let decomposed = Normalizer::decompose(ch);
        match CharCode::letter(decomposed.base, decomposed.modifiers) {
            Some(code) => Some(code),
            None if ch.is_whitespace() => None,
            None => Some(CharCode::Unknown),
        }
    }

    /// Encode one line into its envelope.
    ///
    /// `line_no` is 1-based and only feeds the report.
    pub(crate) fn encode_line(&self, line: &str, line_no: usize, report: &mut LossReport) -> String {
        if line.trim().is_empty() {
            return wrap(std::iter::empty::<&str>());
        }

        let mut tokens = Vec::with_capacity(line.len());
        for (i, ch) in line.chars().enumerate() {
            let Some(code) = self.classify(ch) else {
                continue;
            };
            if code.is_unknown() {
                report.record(line_no, i + 1, LossCause::UnrecognizedChar { ch });
            }
            tokens.push(code.to_string());
        }

        wrap(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(line: &str) -> String {
        Encoder::new(true).encode_line(line, 1, &mut LossReport::new())
    }

    #[test]
    fn test_encode_words() {
        assert_eq!(encode("ba"), "C(75.78)");
        assert_eq!(encode("xin chào"), "C(3.36.26.0.72.38.78hh.24)");
        assert_eq!(encode("Việt"), "C(5.36.66km/nn.7)");
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(encode("ĐÀ"), "C(69kw.78hh)");
        let strict = Encoder::new(false);
        assert_eq!(strict.classify('A'), Some(CharCode::Unknown));
        assert_eq!(strict.classify('Đ'), Some(CharCode::Unknown));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(encode(""), "C()");
        assert_eq!(encode("  \t "), "C()");
    }

    #[test]
    fn test_skips_tokenless_whitespace() {
        assert_eq!(encode("a\tb\r"), "C(78.75)");
    }

    #[test]
    fn test_reports_unknown_chars() {
        let mut report = LossReport::new();
        let line = Encoder::new(true).encode_line("a@b!", 4, &mut report);

        assert_eq!(line, "C(78.?.75.?)");
        assert_eq!(report.len(), 2);
        assert_eq!(report.losses()[0].line, 4);
        assert_eq!(report.losses()[0].column, 2);
        assert_eq!(
            report.losses()[1].cause,
            LossCause::UnrecognizedChar { ch: '!' }
        );
    }
}

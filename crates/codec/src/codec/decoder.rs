//! Brokode -> text.

use crate::notation::{interior, split_token, SEPARATOR};
use crate::report::{LossCause, LossReport};
use brokode_core::{decode_digit, token_letter, ModifierTag, UNKNOWN};
use compact_str::CompactString;
use unicode_normalization::UnicodeNormalization;

/// Decode one token, or `None` when it names no letter or digit.
///
/// Every family tag is applied in turn, so a letter only changes when the
/// family knows it. Of several tone tags the last one wins. Unknown tags
/// are ignored.
pub(crate) fn decode_token(token: &str) -> Option<String> {
    if let Some(digit) = decode_digit(token) {
        return Some(digit.to_string());
    }

    let (code, tags) = split_token(token);
    let mut letter = token_letter(code)?;
    let mut tone = None;

    for tag in tags.split('/').filter_map(|t| t.parse::<ModifierTag>().ok()) {
        match tag {
            ModifierTag::Family(family) => {
                if let Some(variant) = family.apply(letter) {
                    letter = variant;
                }
            }
            ModifierTag::Tone(found) => tone = Some(found),
        }
    }

    Some(match tone {
        Some(tone) => [letter, tone.mark()].into_iter().nfc().collect(),
        None => letter.to_string(),
    })
}

/// Decode one line. Lines without an envelope come back unchanged.
pub(crate) fn decode_line(line: &str, line_no: usize, report: &mut LossReport) -> String {
    let Some(body) = interior(line) else {
        tracing::debug!(line = line_no, "no envelope, passing line through");
        return line.to_string();
    };

    if body.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(body.len());
    for (i, token) in body.split(SEPARATOR).enumerate() {
        match decode_token(token) {
            Some(text) => out.push_str(&text),
            None => {
                report.record(
                    line_no,
                    i + 1,
                    LossCause::UnknownToken {
                        token: CompactString::new(token),
                    },
                );
                out.push(UNKNOWN);
            }
        }
    }
    out
}

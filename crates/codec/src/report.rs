//! Loss reporting.
//!
//! Neither direction fails on bad input; anything that cannot be expressed
//! becomes `?`. A [`LossReport`] records where that happened so a caller can
//! tell the user the conversion was lossy.

use brokode_core::Result;
use compact_str::CompactString;
use serde::Serialize;

/// Why a `?` was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LossCause {
    /// Encoding met a character outside the alphabet
    UnrecognizedChar { ch: char },
    /// Decoding met a token that names no letter or digit
    UnknownToken { token: CompactString },
}

/// One `?` in the output.
///
/// `line` is 1-based. `column` is the 1-based character position on the
/// source line when encoding, or the 1-based token position when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loss {
    pub line: usize,
    pub column: usize,
    #[serde(flatten)]
    pub cause: LossCause,
}

/// All losses of one call, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LossReport {
    losses: Vec<Loss>,
}

impl LossReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, line: usize, column: usize, cause: LossCause) {
        tracing::trace!(line, column, ?cause, "substituted placeholder");
        self.losses.push(Loss {
            line,
            column,
            cause,
        });
    }

    pub fn losses(&self) -> &[Loss] {
        &self.losses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Loss> {
        self.losses.iter()
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    /// True when the conversion was exact.
    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a LossReport {
    type Item = &'a Loss;
    type IntoIter = std::slice::Iter<'a, Loss>;

    fn into_iter(self) -> Self::IntoIter {
        self.losses.iter()
    }
}

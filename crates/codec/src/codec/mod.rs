//! Main codec implementation.
//!
//! This module provides the high-level [`Codec`] that ties normalization,
//! the per-line encoder and the per-line decoder together.

mod decoder;
mod encoder;

use crate::normalize::Normalizer;
use crate::notation::{interior, is_enveloped, CharCode, SEPARATOR};
use crate::report::LossReport;
use brokode_core::{CodecError, Result};
use encoder::Encoder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Line separator of both plain text and Brokode documents.
const LINE_BREAK: char = '\n';

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Text -> Brokode
    Encode,
    /// Brokode -> text
    Decode,
}

impl Direction {
    /// Pick a direction for free-form input.
    ///
    /// Trimmed input that starts with `C(` and ends with `)` is decoded,
    /// anything else is encoded. Blank input has no direction.
    pub fn detect(text: &str) -> Option<Direction> {
        if text.trim().is_empty() {
            None
        } else if is_enveloped(text) {
            Some(Direction::Decode)
        } else {
            Some(Direction::Encode)
        }
    }
}

/// Configuration for building a codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Lowercase input before encoding; the alphabet has no uppercase tokens
    pub fold_case: bool,
    /// Apply NFC to the whole input before encoding
    pub normalize_input: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            fold_case: true,
            normalize_input: true,
        }
    }
}

impl CodecConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| CodecError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

/// Builder for creating a codec.
#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
}

impl CodecBuilder {
    /// Create a new codec builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Lowercase input before encoding.
    pub fn fold_case(mut self, fold: bool) -> Self {
        self.config.fold_case = fold;
        self
    }

    /// Apply NFC to input before encoding.
    pub fn normalize_input(mut self, normalize: bool) -> Self {
        self.config.normalize_input = normalize;
        self
    }

    /// Build the codec.
    pub fn build(self) -> Codec {
        Codec::new(self.config)
    }
}

/// Output of a reported conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Direction that was applied
    pub direction: Direction,
    /// Converted text
    pub text: String,
    /// Every `?` the conversion produced
    pub report: LossReport,
}

/// Brokode codec.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Codec {
    /// Configuration
    config: CodecConfig,
    /// Unicode normalizer
    normalizer: Normalizer,
    /// Per-line encoder
    encoder: Encoder,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl Codec {
    /// Create a new codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        let normalizer = if config.normalize_input {
            Normalizer::nfc()
        } else {
            Normalizer::disabled()
        };
        let encoder = Encoder::new(config.fold_case);

        Self {
            config,
            normalizer,
            encoder,
        }
    }

    /// Create a codec builder.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode text, one envelope per line.
    ///
    /// Never fails: characters outside the alphabet become `?`.
    pub fn encode(&self, text: &str) -> String {
        self.encode_with_report(text).text
    }

    /// Encode text and report every `?` produced.
    pub fn encode_with_report(&self, text: &str) -> Conversion {
        let normalized = self.normalizer.normalize(text);
        let mut report = LossReport::new();

        let lines: Vec<String> = normalized
            .split(LINE_BREAK)
            .enumerate()
            .map(|(i, line)| self.encoder.encode_line(line, i + 1, &mut report))
            .collect();

        if !report.is_empty() {
            tracing::debug!(losses = report.len(), "encoded with placeholders");
        }

        Conversion {
            direction: Direction::Encode,
            text: lines.join("\n"),
            report,
        }
    }

    /// Decode Brokode text line by line.
    ///
    /// Never fails: lines without an envelope pass through unchanged and
    /// unknown tokens become `?`.
    pub fn decode(&self, text: &str) -> String {
        self.decode_with_report(text).text
    }

    /// Decode text and report every `?` produced.
    pub fn decode_with_report(&self, text: &str) -> Conversion {
        let mut report = LossReport::new();

        let lines: Vec<String> = text
            .split(LINE_BREAK)
            .enumerate()
            .map(|(i, line)| decoder::decode_line(line, i + 1, &mut report))
            .collect();

        if !report.is_empty() {
            tracing::debug!(losses = report.len(), "decoded with placeholders");
        }

        Conversion {
            direction: Direction::Decode,
            text: lines.join("\n"),
            report,
        }
    }

    /// Encode or decode depending on what the input looks like.
    ///
    /// The input is trimmed first. Blank input yields an empty string.
    pub fn convert(&self, text: &str) -> String {
        self.convert_with_report(text)
            .map(|conversion| conversion.text)
            .unwrap_or_default()
    }

    /// Like [`Codec::convert`], returning `None` for blank input.
    pub fn convert_with_report(&self, text: &str) -> Option<Conversion> {
        let trimmed = text.trim();
        let direction = Direction::detect(trimmed)?;
        tracing::debug!(?direction, "detected direction");

        Some(match direction {
            Direction::Encode => self.encode_with_report(trimmed),
            Direction::Decode => self.decode_with_report(trimmed),
        })
    }

    /// Encode a batch of texts (parallelized, order preserved).
    pub fn encode_batch(&self, texts: &[String]) -> Vec<String> {
        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Decode a batch of texts (parallelized, order preserved).
    pub fn decode_batch(&self, texts: &[String]) -> Vec<String> {
        texts.par_iter().map(|text| self.decode(text)).collect()
    }

    /// Parse one enveloped line without any fallback.
    ///
    /// Fails on a missing envelope, on a token naming no letter or digit,
    /// and on an unknown tag.
    pub fn parse_line(&self, line: &str) -> Result<Vec<CharCode>> {
        let body =
            interior(line).ok_or_else(|| CodecError::MalformedEnvelope(line.trim().to_string()))?;

        if body.is_empty() {
            return Ok(Vec::new());
        }

        body.split(SEPARATOR).map(CharCode::parse_strict).collect()
    }
}

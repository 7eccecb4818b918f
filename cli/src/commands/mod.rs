//! CLI commands for the brokode codec.

pub mod check;
pub mod convert;
pub mod decode;
pub mod encode;

pub use check::CheckCommand;
pub use convert::ConvertCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;

use anyhow::{Context, Result as AnyhowResult};
use brokode::{Codec, CodecConfig, Conversion};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Where text comes from and goes to.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Text to convert ("-" reads stdin; stdin is also used when omitted)
    #[arg(short, long, conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl IoArgs {
    /// Read the input text.
    ///
    /// One trailing line break from stdin or a file is dropped; it ends the
    /// last line rather than starting a new one.
    pub fn read(&self) -> AnyhowResult<String> {
        let mut buffer = match (&self.input, &self.file) {
            (Some(text), _) if text != "-" => return Ok(text.clone()),
            (_, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            _ => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }

    pub fn write(&self, text: &str) -> AnyhowResult<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!("wrote {} bytes to {}", text.len(), path.display());
            }
            None => println!("{}", text),
        }
        Ok(())
    }
}

/// Codec configuration flags.
#[derive(Args, Debug, Clone, Default)]
pub struct CodecArgs {
    /// JSON codec configuration file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep uppercase letters instead of lowercasing them
    #[arg(long, default_value_t = false)]
    pub keep_case: bool,

    /// Skip NFC normalization of the input
    #[arg(long, default_value_t = false)]
    pub no_normalize: bool,

    /// Print a JSON loss report to stderr
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

impl CodecArgs {
    pub fn build(&self) -> AnyhowResult<Codec> {
        let mut config = match &self.config {
            Some(path) => CodecConfig::from_json_file(path)?,
            None => CodecConfig::default(),
        };
        if self.keep_case {
            config.fold_case = false;
        }
        if self.no_normalize {
            config.normalize_input = false;
        }
        tracing::debug!(?config, "codec configuration");

        Ok(Codec::builder().with_config(config).build())
    }
}

/// Shared body of the converting commands.
pub(crate) fn run_conversion<F>(io: &IoArgs, args: &CodecArgs, convert: F) -> AnyhowResult<()>
where
    F: FnOnce(&Codec, &str) -> Option<Conversion>,
{
    let codec = args.build()?;
    let text = io.read()?;

    let Some(conversion) = convert(&codec, &text) else {
        return io.write("");
    };

    io.write(&conversion.text)?;

    if !conversion.report.is_empty() {
        tracing::warn!(
            "{:?} was lossy: {} placeholder(s) substituted",
            conversion.direction,
            conversion.report.len()
        );
    }
    if args.report {
        eprintln!("{}", conversion.report.to_json()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io(input: Option<&str>, file: Option<PathBuf>) -> IoArgs {
        IoArgs {
            input: input.map(str::to_string),
            file,
            output: None,
        }
    }

    #[test]
    fn test_read_inline_input() {
        let args = io(Some("xin chào\n"), None);
        assert_eq!(args.read().unwrap(), "xin chào\n");
    }

    #[test]
    fn test_read_file_drops_final_newline() {
        let path = std::env::temp_dir().join(format!("brokode-cli-{}.txt", std::process::id()));
        std::fs::write(&path, "C(78)\r\nC(75)\r\n").unwrap();

        let text = io(None, Some(path.clone())).read().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text, "C(78)\r\nC(75)");
    }

    #[test]
    fn test_flags_override_config() {
        let args = CodecArgs {
            keep_case: true,
            no_normalize: true,
            ..Default::default()
        };
        let codec = args.build().unwrap();
        assert!(!codec.config().fold_case);
        assert!(!codec.config().normalize_input);
    }

    #[test]
    fn test_missing_config_file() {
        let args = CodecArgs {
            config: Some(PathBuf::from("/nonexistent/brokode.json")),
            ..Default::default()
        };
        assert!(args.build().is_err());
    }
}

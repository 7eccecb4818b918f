//! Check command implementation.

use super::IoArgs;
use anyhow::{bail, Result as AnyhowResult};
use brokode::{CharCode, Codec};
use clap::Parser;

/// Check command arguments.
///
/// Expects a pure Brokode document: every non-blank line must be a `C(...)`
/// envelope. Plain-text lines, which `decode` passes through, are reported
/// as invalid here.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub io: IoArgs,

    /// Print the parsed tokens as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Outcome of strictly parsing a document.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Parsed codes of each valid line
    pub parsed: Vec<Vec<CharCode>>,
    /// 1-based line number and error message of each invalid line
    pub failures: Vec<(usize, String)>,
}

/// Strictly parse every non-blank line of `text`.
pub fn check_document(codec: &Codec, text: &str) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match codec.parse_line(line) {
            Ok(codes) => summary.parsed.push(codes),
            Err(err) => summary.failures.push((i + 1, err.to_string())),
        }
    }

    summary
}

pub fn run(cmd: CheckCommand) -> AnyhowResult<()> {
    let codec = Codec::default();
    let text = cmd.io.read()?;
    let summary = check_document(&codec, &text);

    for (line, err) in &summary.failures {
        eprintln!("line {}: {}", line, err);
    }

    if cmd.json {
        cmd.io
            .write(&serde_json::to_string_pretty(&summary.parsed)?)?;
    } else {
        let tokens: usize = summary.parsed.iter().map(Vec::len).sum();
        cmd.io.write(&format!(
            "{} line(s) valid, {} token(s), {} invalid line(s)",
            summary.parsed.len(),
            tokens,
            summary.failures.len()
        ))?;
    }

    if !summary.failures.is_empty() {
        bail!("{} line(s) failed strict parsing", summary.failures.len());
    }

    Ok(())
}

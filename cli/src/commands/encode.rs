//! Encode command implementation.

use super::{run_conversion, CodecArgs, IoArgs};
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Encode command arguments.
#[derive(Parser, Debug)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub codec: CodecArgs,
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    run_conversion(&cmd.io, &cmd.codec, |codec, text| {
        Some(codec.encode_with_report(text))
    })
}

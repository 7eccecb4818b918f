//! Decode command implementation.

use super::{run_conversion, CodecArgs, IoArgs};
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Decode command arguments.
#[derive(Parser, Debug)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub codec: CodecArgs,
}

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    run_conversion(&cmd.io, &cmd.codec, |codec, text| {
        Some(codec.decode_with_report(text))
    })
}

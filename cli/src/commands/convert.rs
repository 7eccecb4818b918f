//! Convert command implementation.

use super::{run_conversion, CodecArgs, IoArgs};
use anyhow::Result as AnyhowResult;
use clap::Parser;

/// Convert command arguments.
#[derive(Parser, Debug)]
pub struct ConvertCommand {
    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub codec: CodecArgs,
}

pub fn run(cmd: ConvertCommand) -> AnyhowResult<()> {
    run_conversion(&cmd.io, &cmd.codec, |codec, text| {
        let conversion = codec.convert_with_report(text);
        if let Some(conversion) = &conversion {
            tracing::info!("direction: {:?}", conversion.direction);
        }
        conversion
    })
}

//! Brokode CLI - Command-line interface for the Brokode codec.
//!
//! This is the main entry point for the `brokode` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CheckCommand, ConvertCommand, DecodeCommand, EncodeCommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "brokode")]
#[command(about = "Convert Vietnamese text to and from Brokode", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into Brokode
    Encode(EncodeCommand),
    /// Decode Brokode back into text
    Decode(DecodeCommand),
    /// Encode or decode, depending on what the input looks like
    Convert(ConvertCommand),
    /// Strictly validate a pure Brokode document (blank lines are skipped)
    Check(CheckCommand),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Convert(cmd) => commands::convert::run(cmd)?,
        Commands::Check(cmd) => commands::check::run(cmd)?,
    }

    Ok(())
}

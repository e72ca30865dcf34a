//! CLI commands.

mod decode;
mod encode;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// pubid CLI - encode, decode, and inspect public identifiers.
#[derive(Debug, Parser)]
#[command(name = "pubid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode an integer record key into a public identifier.
    Encode(encode::EncodeCommand),

    /// Decode a public identifier back to its integer key.
    Decode(decode::DecodeCommand),

    /// Inspect how identifier strings parse and resolve.
    Inspect(inspect::InspectCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Encode(cmd) => cmd.run(self.format),
            Commands::Decode(cmd) => cmd.run(self.format),
            Commands::Inspect(cmd) => cmd.run(self.format),
        }
    }
}

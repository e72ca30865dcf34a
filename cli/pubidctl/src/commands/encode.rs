//! Encode command.

use anyhow::Result;
use clap::Args;
use pubid_codec::Codec;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

/// Encode an integer record key.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Integer record key to encode.
    key: u64,

    /// Entity-type prefix to prepend (e.g. 'prod').
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Debug, Serialize)]
struct EncodeOutput {
    key: u64,
    id: String,
}

impl EncodeCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let codec = Codec::new();
        let body = codec.encode(&[self.key]);
        let id = match self.prefix.as_deref() {
            Some(prefix) => format!("{prefix}_{body}"),
            None => body,
        };

        match format {
            OutputFormat::Table => println!("{id}"),
            OutputFormat::Json => print_single(&EncodeOutput { key: self.key, id }),
        }
        Ok(())
    }
}

//! Decode command.

use anyhow::Result;
use clap::Args;
use pubid_codec::Codec;
use pubid_resolve::Resolver;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

/// Decode a public identifier.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Identifier to decode (prefixed, bare encoded body, or legacy integer).
    id: String,
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    id: String,
    key: u64,
}

impl DecodeCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let codec = Codec::new();
        let resolver = Resolver::new(&codec);

        let key = resolver
            .resolve_key(&self.id)
            .ok_or_else(|| CliError::Unresolvable(self.id.clone()))?;

        match format {
            OutputFormat::Table => println!("{key}"),
            OutputFormat::Json => print_single(&DecodeOutput { id: self.id, key }),
        }
        Ok(())
    }
}

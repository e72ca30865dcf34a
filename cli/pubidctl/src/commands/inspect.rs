//! Inspect command.

use anyhow::Result;
use clap::Args;
use pubid_codec::Codec;
use pubid_resolve::{parse, Resolver};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, OutputFormat};

/// Inspect identifiers in batch: how each one parses and what it resolves to.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Identifiers to inspect.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct InspectRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Prefix")]
    prefix: String,

    #[tabled(rename = "Body")]
    body: String,

    #[tabled(rename = "Key")]
    key: String,

    #[tabled(rename = "Via")]
    via: String,
}

impl InspectCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let codec = Codec::new();
        let resolver = Resolver::new(&codec);

        let rows: Vec<InspectRow> = self
            .ids
            .iter()
            .map(|raw| inspect_one(&codec, &resolver, raw))
            .collect();

        print_output(&rows, format);
        Ok(())
    }
}

fn inspect_one(codec: &Codec, resolver: &Resolver<'_>, raw: &str) -> InspectRow {
    let parsed = parse(raw);

    let (prefix, body) = match parsed {
        Some(p) => (
            p.prefix.unwrap_or("-").to_string(),
            p.body.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };

    let decoded = parsed
        .and_then(|p| codec.decode(p.body))
        .and_then(|numbers| numbers.first().copied());

    let (key, via) = match resolver.resolve_key(raw) {
        Some(k) if decoded == Some(k) => (k.to_string(), "encoded".to_string()),
        Some(k) => (k.to_string(), "legacy".to_string()),
        None => ("-".to_string(), "-".to_string()),
    };

    InspectRow {
        input: raw.to_string(),
        prefix,
        body,
        key,
        via,
    }
}

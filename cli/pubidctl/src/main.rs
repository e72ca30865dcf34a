//! pubidctl (pubid) - CLI for the pubid identifier toolkit.
//!
//! Encode integer record keys into public identifiers, decode them back,
//! and inspect how arbitrary identifier strings resolve.

use clap::Parser;

mod commands;
mod error;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }
}

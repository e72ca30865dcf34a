//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("identifier '{0}' does not resolve to a key")]
    Unresolvable(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::Unresolvable(_)) = err.downcast_ref::<CliError>() {
        eprintln!(
            "\n{}",
            "Hint: identifiers look like 'prod_430418220146', a bare encoded body, or a legacy integer key."
                .yellow()
        );
    }
}

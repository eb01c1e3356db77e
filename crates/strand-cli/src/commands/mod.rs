//! CLI command implementations.

pub mod encode;
pub mod pathways;
pub mod run;
pub mod validate;

use anyhow::{bail, Result};
use std::path::Path;
use strand::prelude::StrandError;

use crate::fasta;

/// Resolve the sequence from a positional argument or a file, never both.
pub(crate) fn resolve_sequence(sequence: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (sequence, file) {
        (Some(symbols), None) => Ok(symbols.to_string()),
        (None, Some(path)) => fasta::read_sequence(path),
        (Some(_), Some(_)) => bail!("Give either a sequence or --file, not both"),
        (None, None) => bail!("No input. Give a sequence or --file <FASTA>"),
    }
}

/// Map an interpreter error to the CLI's error contract: JSON mode prints
/// `{"error": ...}` and exits 1, otherwise the message propagates.
pub(crate) fn fail(err: StrandError, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!({ "error": err.to_string() }));
        std::process::exit(1);
    }
    Err(err.into())
}

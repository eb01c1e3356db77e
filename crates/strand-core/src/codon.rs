//! Codon tokenizer and the fixed marker vocabulary.
//!
//! The raw symbol string is cleaned (whitespace stripped, case folded) and
//! validated against the A/C/T/G alphabet before being sliced into
//! non-overlapping three-symbol windows.

use crate::error::{Result, StrandError};
use crate::types::Codon;

/// Start marker — opens an executable segment.
pub const START: &str = "ATG";

/// Stop markers — close an executable segment.
pub const STOPS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Environment block marker — opens a named settings block.
pub const ENV_BLOCK: &str = "GTG";

/// Whether a codon opens a segment. Short codons never match.
pub fn is_start(codon: &Codon) -> bool {
    codon.as_str() == START
}

/// Whether a codon closes a segment. Short codons never match.
pub fn is_stop(codon: &Codon) -> bool {
    STOPS.contains(&codon.as_str())
}

/// Whether a codon opens an environment block. Short codons never match.
pub fn is_env_block(codon: &Codon) -> bool {
    codon.as_str() == ENV_BLOCK
}

/// Strip ASCII whitespace, fold case, and validate the alphabet.
///
/// Fails fast with the first offending symbol and its 0-based position in
/// the stripped sequence.
pub fn clean(raw: &str) -> Result<String> {
    let mut symbols = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !c.is_ascii_whitespace()) {
        let upper = c.to_ascii_uppercase();
        match upper {
            'A' | 'C' | 'T' | 'G' => symbols.push(upper),
            _ => return Err(StrandError::invalid_symbol(c, symbols.len())),
        }
    }
    Ok(symbols)
}

/// Slice a cleaned symbol sequence into codons.
///
/// Non-overlapping three-symbol windows from offset 0. A final window of
/// fewer than three symbols is emitted as a short codon, never dropped.
pub fn tokenize(symbols: &str) -> Vec<Codon> {
    symbols
        .as_bytes()
        .chunks(3)
        .map(|chunk| Codon::new(String::from_utf8_lossy(chunk).into_owned()))
        .collect()
}

//! Validate a FASTA file without interpreting it.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

pub fn run(file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;

    if let Err(message) = check(&text) {
        bail!("{}: {}", file.display(), message);
    }

    println!("{} {} is a valid FASTA file", "✓".green(), file.display());
    Ok(())
}

/// FASTA validity: a '>' header first, then only A/C/T/G and whitespace
/// (case-insensitive). Reports the first offending line.
fn check(text: &str) -> Result<(), String> {
    let mut lines = text.lines().enumerate();
    match lines.next() {
        None => return Err("file is empty".to_string()),
        Some((_, first)) if !first.starts_with('>') => {
            return Err("first line must start with '>'".to_string());
        }
        _ => {}
    }

    for (index, line) in lines {
        let bad = line
            .chars()
            .find(|c| !c.is_ascii_whitespace() && !"ACTGactg".contains(*c));
        if let Some(symbol) = bad {
            return Err(format!(
                "invalid DNA sequence on line {}: symbol '{}' (only A, C, T, G are allowed)",
                index + 1,
                symbol
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_file() {
        assert!(check(">basic\nATGACC\ngattaa\n").is_ok());
    }

    #[test]
    fn rejects_a_missing_header() {
        assert!(check("ATGACC\n").is_err());
    }

    #[test]
    fn rejects_an_empty_file() {
        assert!(check("").is_err());
    }

    #[test]
    fn reports_the_offending_line() {
        let message = check(">h\nATG\nACX\n").unwrap_err();
        assert!(message.contains("line 3"));
        assert!(message.contains('X'));
    }
}

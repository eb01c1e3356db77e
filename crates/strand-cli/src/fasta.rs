//! FASTA-style file loading for sequences and virus libraries.
//!
//! Sequence files may be plain symbol text or FASTA: `>`-prefixed header
//! lines are skipped and the remaining lines concatenated. Virus libraries
//! use the record header to carry metadata: `>Name|EffectToken`, with the
//! effect defaulting to `Name_Activated` when omitted.

use anyhow::{bail, Context, Result};
use std::path::Path;
use strand::prelude::{VirusEntry, VirusTable};

/// Read a sequence file into one raw symbol string.
pub fn read_sequence(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    Ok(parse_sequence(&text))
}

/// Concatenate all non-header lines. Alphabet validation is the core's job.
pub fn parse_sequence(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with('>'))
        .collect::<Vec<_>>()
        .join("")
}

/// Read a virus library file into a table.
pub fn read_virus_library(path: &Path) -> Result<VirusTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    parse_virus_library(&text)
}

/// Parse a virus library: one FASTA record per virus.
pub fn parse_virus_library(text: &str) -> Result<VirusTable> {
    let mut table = VirusTable::new();
    let mut header: Option<(String, Option<String>)> = None;
    let mut key = String::new();

    let mut finish = |header: &Option<(String, Option<String>)>, key: &str| -> Result<()> {
        if let Some((name, effect)) = header {
            let key: String = key.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            if key.is_empty() {
                bail!("Virus '{}' has no sequence", name);
            }
            if key.len() % 3 != 0 {
                bail!(
                    "Virus '{}' sequence length {} is not a whole number of codons",
                    name,
                    key.len()
                );
            }
            if let Some(bad) = key.chars().find(|c| !"ACTGactg".contains(*c)) {
                bail!("Virus '{}' sequence contains invalid symbol '{}'", name, bad);
            }
            let effect = effect
                .clone()
                .unwrap_or_else(|| format!("{}_Activated", name));
            table.insert(VirusEntry::new(key, name.clone(), effect));
        }
        Ok(())
    };

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix('>') {
            finish(&header, &key)?;
            key.clear();
            let (name, effect) = match rest.split_once('|') {
                Some((name, effect)) => (name.trim(), Some(effect.trim().to_string())),
                None => (rest.trim(), None),
            };
            if name.is_empty() {
                bail!("Virus record has an empty name");
            }
            header = Some((name.to_string(), effect));
        } else if !line.is_empty() {
            if header.is_none() {
                bail!("Virus library must start with a '>' record header");
            }
            key.push_str(line);
        }
    }
    finish(&header, &key)?;

    Ok(table)
}

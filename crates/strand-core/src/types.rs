//! Shared types used across the Strand interpreter crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A codon — up to three nucleotide symbols, the atomic token of the language.
///
/// Codons are produced by non-overlapping windowing of the symbol sequence.
/// A trailing window of fewer than three symbols is still emitted as a
/// *short* codon; short codons never match any marker, digit, setting or
/// protein pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Codon(String);

impl Codon {
    pub fn new(bases: impl Into<String>) -> Self {
        Self(bases.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this codon carries a full three-symbol window.
    pub fn is_complete(&self) -> bool {
        self.0.len() == 3
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Codon {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Temperature setting of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::High => "HIGH",
            Temperature::Low => "LOW",
            Temperature::Neutral => "NEUTRAL",
        }
    }
}

/// Energy setting of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Energy {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

impl Energy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::High => "HIGH",
            Energy::Medium => "MEDIUM",
            Energy::Low => "LOW",
        }
    }
}

/// A named environment setting that conditional codons can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Temp,
    Energy,
}

/// Named settings that condition codon execution.
///
/// Created fresh per interpretation run (or per named block in the
/// multi-environment path) and never mutated once segment execution begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "TEMP")]
    pub temp: Temperature,
    #[serde(rename = "ENERGY")]
    pub energy: Energy,
    /// Display name decoded from the block's name-material, if any.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

impl Environment {
    /// Defaults for the fixed-prefix interpretation path.
    pub fn prefix_defaults() -> Self {
        Self {
            temp: Temperature::Neutral,
            energy: Energy::Medium,
            name: None,
        }
    }

    /// Defaults for the block-decoder path.
    pub fn block_defaults() -> Self {
        Self {
            temp: Temperature::Low,
            energy: Energy::Low,
            name: None,
        }
    }

    /// The current value of a setting, as its wire string.
    pub fn setting(&self, setting: Setting) -> &'static str {
        match setting {
            Setting::Temp => self.temp.as_str(),
            Setting::Energy => self.energy.as_str(),
        }
    }
}

/// An executable run of codons bounded by a start marker (excluded) and,
/// optionally, a stop marker (included).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub codons: Vec<Codon>,
}

impl Segment {
    pub fn new() -> Self {
        Self { codons: Vec::new() }
    }

    pub fn push(&mut self, codon: Codon) {
        self.codons.push(codon);
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

/// A named override effect triggered by a specific codon subsequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirusEntry {
    /// The joined codon subsequence that triggers this virus.
    pub key: String,
    /// Name recorded in the result when the virus fires.
    pub name: String,
    /// Output token the virus contributes in place of normal execution.
    pub effect: String,
}

impl VirusEntry {
    pub fn new(key: impl Into<String>, name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            key: key.into().to_ascii_uppercase(),
            name: name.into(),
            effect: effect.into(),
        }
    }

    /// How many complete codons this entry's key spans.
    pub fn window(&self) -> usize {
        self.key.len() / 3
    }
}

/// An external table of virus entries, scanned as a sliding window over a
/// segment's codons. Entries are tried in insertion order at each position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirusTable {
    entries: Vec<VirusEntry>,
}

impl VirusTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: VirusEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[VirusEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<VirusEntry> for VirusTable {
    fn from_iter<I: IntoIterator<Item = VirusEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The environment part of an interpretation result — a single record for
/// the fixed-prefix path, or a name-keyed map for the block path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvironmentReport {
    Single(Environment),
    Named(BTreeMap<String, Environment>),
}

/// The complete outcome of one interpretation run.
///
/// Field names are capitalized on the wire; this is the record the pathway
/// visualizer and any JSON consumer read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationResult {
    #[serde(rename = "Proteins")]
    pub proteins: Vec<String>,
    #[serde(rename = "Environment")]
    pub environment: EnvironmentReport,
    #[serde(rename = "Viruses")]
    pub viruses: Vec<String>,
}

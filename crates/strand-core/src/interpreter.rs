//! Interpreter facade — orchestrates tokenizing, environment decoding,
//! segment extraction and execution into one result record.
//!
//! This is the only component external collaborators call. It performs no
//! I/O: the caller hands it a raw symbol string (and optionally a virus
//! table) and receives either a full [`InterpretationResult`] or a
//! structured error, never both.

use std::collections::BTreeMap;

use crate::codon;
use crate::engine;
use crate::environment;
use crate::error::Result;
use crate::pathway::{self, PathwayScan};
use crate::segment;
use crate::types::{
    Environment, EnvironmentReport, InterpretationResult, Segment, VirusTable,
};

/// The interpreter. Holds the virus table for the lifetime of its runs;
/// each run is an independent, pure computation.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    viruses: VirusTable,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter with a virus table armed.
    pub fn with_viruses(viruses: VirusTable) -> Self {
        Self { viruses }
    }

    pub fn viruses(&self) -> &VirusTable {
        &self.viruses
    }

    /// Fixed-prefix path: the first three codons are environment-setting
    /// candidates over the prefix defaults, and the full codon list is
    /// scanned for segments.
    pub fn interpret(&self, symbols: &str) -> Result<InterpretationResult> {
        let codons = codon::tokenize(&codon::clean(symbols)?);
        let env = environment::prefix_environment(&codons);
        let segments = segment::extract_segments(&codons);
        let (proteins, viruses) = self.run_segments(&segments, &env);
        Ok(InterpretationResult {
            proteins,
            environment: EnvironmentReport::Single(env),
            viruses,
        })
    }

    /// Block path: zero or more named environment blocks are decoded off the
    /// front of the codon list, then the remaining codons are scanned for
    /// segments. Execution runs under the first decoded environment, or the
    /// block defaults when no block is present.
    pub fn interpret_blocks(&self, symbols: &str) -> Result<InterpretationResult> {
        let codons = codon::tokenize(&codon::clean(symbols)?);

        let mut environments = BTreeMap::new();
        let mut first: Option<Environment> = None;
        let mut pos = 0;
        while codons.get(pos).is_some_and(codon::is_env_block) {
            let block = environment::decode_block(&codons[pos..])?;
            pos += block.consumed;
            if first.is_none() {
                first = Some(block.environment.clone());
            }
            let key = block.environment.name.clone().unwrap_or_default();
            environments.insert(key, block.environment);
        }

        let effective = first.unwrap_or_else(Environment::block_defaults);
        let segments = segment::extract_segments(&codons[pos..]);
        let (proteins, viruses) = self.run_segments(&segments, &effective);
        Ok(InterpretationResult {
            proteins,
            environment: EnvironmentReport::Named(environments),
            viruses,
        })
    }

    /// Tick-oriented structural reading: extract pathways instead of
    /// executing segments.
    pub fn pathways(&self, symbols: &str) -> Result<PathwayScan> {
        let codons = codon::tokenize(&codon::clean(symbols)?);
        Ok(pathway::extract_pathways(&codons))
    }

    /// Execute segments in order. Virus scanning is disarmed for the rest of
    /// the run after the first match.
    fn run_segments(
        &self,
        segments: &[Segment],
        environment: &Environment,
    ) -> (Vec<String>, Vec<String>) {
        let mut proteins = Vec::new();
        let mut viruses = Vec::new();
        let mut armed = !self.viruses.is_empty();
        for seg in segments {
            let table = armed.then_some(&self.viruses);
            let execution = engine::execute(seg, environment, table);
            proteins.extend(execution.proteins);
            if let Some(name) = execution.virus {
                viruses.push(name);
                armed = false;
            }
        }
        (proteins, viruses)
    }
}

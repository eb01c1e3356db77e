//! # Strand
//!
//! Interpreter for the Strand esoteric DNA programming language.
//!
//! A Strand program is a string of A/C/T/G symbols. Codons (three-symbol
//! windows) form the instruction stream: `ATG` opens an executable segment,
//! `TAA`/`TAG`/`TGA` close it, `GTG` opens a named environment block, and
//! the codons in between produce output proteins — some unconditionally,
//! some gated on the decoded environment. External virus tables can inject
//! override effects keyed by codon subsequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! let result = Interpreter::new().interpret("ATGACCGATTAA").unwrap();
//! assert_eq!(result.proteins, ["Protein_X", "Transport Blocked"]);
//!
//! // Force ENERGY=HIGH through the three-codon environment prefix.
//! let result = Interpreter::new().interpret("GGGATGACCGATTAA").unwrap();
//! assert_eq!(result.proteins, ["Protein_X", "Transport"]);
//! ```
//!
//! ## Architecture
//!
//! - [`strand_core`] — tokenizer, environment decoder, segment and pathway
//!   extraction, execution engine, interpreter facade
//! - `strand-cli` — the `strand` binary: FASTA loading, virus libraries,
//!   JSON rendering

// Re-export the core crate
pub use strand_core as core;

/// Prelude module for convenient imports.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strand_core::types::{
        Codon, Energy, Environment, EnvironmentReport, InterpretationResult, Segment, Setting,
        Temperature, VirusEntry, VirusTable,
    };

    // Facade
    pub use strand_core::interpreter::Interpreter;

    // Codec
    pub use strand_core::environment::{decode_name, encode_name};

    // Pathways
    pub use strand_core::pathway::{GraphRecord, Pathway, PathwayScan};

    // Error types
    pub use strand_core::error::{Result, StrandError};
}

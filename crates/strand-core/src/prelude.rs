//! Strand Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use strand_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    Codon, Energy, Environment, EnvironmentReport, InterpretationResult, Segment, Setting,
    Temperature, VirusEntry, VirusTable,
};

// Re-export the facade
pub use crate::interpreter::Interpreter;

// Re-export the pathway surface
pub use crate::pathway::{GraphRecord, Pathway, PathwayScan};

// Re-export error types
pub use crate::error::{Result, StrandError};

//! Error types for Strand interpretation.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for Strand operations.
pub type Result<T> = std::result::Result<T, StrandError>;

/// Errors that can occur while interpreting a Strand program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrandError {
    /// The input contained a symbol outside the A/C/T/G alphabet.
    Alphabet(AlphabetError),
    /// An environment name could not be decoded.
    Decode(DecodeError),
    /// A text could not be encoded into name codons.
    Encode(EncodeError),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrandError::Alphabet(e) => write!(f, "Invalid DNA sequence: {}", e),
            StrandError::Decode(e) => write!(f, "Environment decode error: {}", e),
            StrandError::Encode(e) => write!(f, "Name encode error: {}", e),
            StrandError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for StrandError {}

impl From<serde_json::Error> for StrandError {
    fn from(e: serde_json::Error) -> Self {
        StrandError::Serialization(e.to_string())
    }
}

/// A symbol outside the A/C/T/G alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetError {
    /// The offending character.
    pub symbol: char,
    /// 0-based position in the whitespace-stripped sequence.
    pub position: usize,
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "symbol '{}' at position {} (must only contain A, C, T, G)",
            self.symbol, self.position
        )
    }
}

/// Failures while decoding an environment name from codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A name codon is not one of the six base-6 digit codons.
    UndefinedDigit(String),
    /// A digit group accumulated to a value with no character mapping.
    UnmappableCharCode(u32),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UndefinedDigit(codon) => {
                write!(f, "codon '{}' is not a valid base-6 digit", codon)
            }
            DecodeError::UnmappableCharCode(code) => {
                write!(f, "digit group value {} maps to no character", code)
            }
        }
    }
}

/// Failures while encoding text into name codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The character's code is outside the 216-value range one digit group
    /// can carry.
    UnencodableChar(char),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnencodableChar(c) => {
                write!(f, "character '{}' cannot be encoded in a base-216 group", c)
            }
        }
    }
}

// Convenience constructors
impl StrandError {
    pub fn invalid_symbol(symbol: char, position: usize) -> Self {
        StrandError::Alphabet(AlphabetError { symbol, position })
    }

    pub fn undefined_digit(codon: impl Into<String>) -> Self {
        StrandError::Decode(DecodeError::UndefinedDigit(codon.into()))
    }

    pub fn unmappable_char_code(code: u32) -> Self {
        StrandError::Decode(DecodeError::UnmappableCharCode(code))
    }

    pub fn unencodable_char(c: char) -> Self {
        StrandError::Encode(EncodeError::UnencodableChar(c))
    }
}

//! Environment decoding — the base-6 name codec and the settings parser.
//!
//! Six of the 64 possible codons act as base-6 digits. Three digits form one
//! base-216 group, and each completed group maps to one character code, so a
//! character costs three codons (18 bits of DNA per character). The digit
//! table is shared by the decoder and the inverse encoder.

use crate::codon;
use crate::error::{Result, StrandError};
use crate::types::{Codon, Energy, Environment, Temperature};

/// Digit codons, index = digit value. Disjoint from every marker and
/// setting codon so a name can never terminate itself early.
pub const DIGIT_CODONS: [&str; 6] = ["CGA", "CGC", "CGG", "CGT", "CTA", "CTC"];

/// The digit value of a codon, if it is one of the six digit codons.
pub fn digit_of(codon: &Codon) -> Option<u32> {
    DIGIT_CODONS
        .iter()
        .position(|d| *d == codon.as_str())
        .map(|i| i as u32)
}

/// The temperature a codon selects, if it is a TEMP setting codon.
pub fn temp_of(codon: &Codon) -> Option<Temperature> {
    match codon.as_str() {
        "AAA" => Some(Temperature::High),
        "TTT" => Some(Temperature::Low),
        "TAT" => Some(Temperature::Neutral),
        _ => None,
    }
}

/// The energy level a codon selects, if it is an ENERGY setting codon.
pub fn energy_of(codon: &Codon) -> Option<Energy> {
    match codon.as_str() {
        "GGG" => Some(Energy::High),
        "CCC" => Some(Energy::Low),
        "GCC" => Some(Energy::Medium),
        _ => None,
    }
}

fn char_for(code: u32) -> Result<char> {
    char::from_u32(code).ok_or_else(|| StrandError::unmappable_char_code(code))
}

/// Decode a run of name-material codons into text.
///
/// Every codon must be a digit codon; anything else is a structured decode
/// error, never a silent substitution. A trailing partial group (one or two
/// digits) with a non-zero value yields one final character; a zero-valued
/// partial is dropped.
pub fn decode_name(codons: &[Codon]) -> Result<String> {
    let mut name = String::new();
    let mut acc: u32 = 0;
    let mut pending = 0;
    for codon in codons {
        let digit =
            digit_of(codon).ok_or_else(|| StrandError::undefined_digit(codon.as_str()))?;
        acc = acc * 6 + digit;
        pending += 1;
        if pending == 3 {
            name.push(char_for(acc)?);
            acc = 0;
            pending = 0;
        }
    }
    if pending > 0 && acc > 0 {
        name.push(char_for(acc)?);
    }
    Ok(name)
}

/// Encode text into the symbol string that [`decode_name`] maps back.
///
/// Each character becomes three digit codons, most significant digit first.
/// Characters with a code of 216 or more do not fit one group and are
/// rejected.
pub fn encode_name(text: &str) -> Result<String> {
    let mut symbols = String::with_capacity(text.len() * 9);
    for c in text.chars() {
        let code = c as u32;
        if code >= 216 {
            return Err(StrandError::unencodable_char(c));
        }
        for digit in [code / 36, (code / 6) % 6, code % 6] {
            symbols.push_str(DIGIT_CODONS[digit as usize]);
        }
    }
    Ok(symbols)
}

/// One decoded environment block and how many codons it consumed.
///
/// The consumed count is load-bearing: the facade advances its scan position
/// by exactly this amount and never re-scans consumed codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    pub environment: Environment,
    pub consumed: usize,
}

/// Decode one environment block starting at the block marker.
///
/// The first codon must be the block marker. Name-material runs until a
/// TEMP codon or a stop marker; end of input terminates like a stop marker.
/// A stop terminator ends the block immediately with the block defaults.
/// A TEMP terminator sets the temperature, and one immediately following
/// ENERGY codon, if present, sets the energy.
pub fn decode_block(codons: &[Codon]) -> Result<DecodedBlock> {
    debug_assert!(codons.first().is_some_and(codon::is_env_block));
    let mut env = Environment::block_defaults();
    let mut pos = 1;

    let name_start = pos;
    let mut terminator = None;
    while pos < codons.len() {
        let c = &codons[pos];
        if let Some(temp) = temp_of(c) {
            terminator = Some(temp);
            break;
        }
        if codon::is_stop(c) {
            break;
        }
        pos += 1;
    }

    let name = decode_name(&codons[name_start..pos])?;
    if !name.is_empty() {
        env.name = Some(name);
    }

    // Consume the terminator unless the input simply ran out.
    if pos < codons.len() {
        pos += 1;
    }

    if let Some(temp) = terminator {
        env.temp = temp;
        if let Some(energy) = codons.get(pos).and_then(energy_of) {
            env.energy = energy;
            pos += 1;
        }
    }

    Ok(DecodedBlock {
        environment: env,
        consumed: pos,
    })
}

/// Read the first three codons as environment-setting candidates over the
/// prefix defaults. The prefix is not consumed: segment extraction still
/// scans the full codon list.
pub fn prefix_environment(codons: &[Codon]) -> Environment {
    let mut env = Environment::prefix_defaults();
    for codon in codons.iter().take(3) {
        if let Some(temp) = temp_of(codon) {
            env.temp = temp;
        } else if let Some(energy) = energy_of(codon) {
            env.energy = energy;
        }
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::tokenize;
    use crate::error::DecodeError;

    #[test]
    fn digit_table_is_disjoint_from_markers_and_settings() {
        let reserved = [
            "ATG", "TAA", "TAG", "TGA", "GTG", "AAA", "TTT", "TAT", "GGG", "CCC", "GCC",
        ];
        for digit in DIGIT_CODONS {
            assert!(!reserved.contains(&digit), "{} is reserved", digit);
        }
    }

    #[test]
    fn name_roundtrip() {
        for text in ["HI", "A", "LAB7"] {
            let symbols = encode_name(text).unwrap();
            let decoded = decode_name(&tokenize(&symbols)).unwrap();
            assert_eq!(decoded, text);
        }
    }

    #[test]
    fn decode_rejects_non_digit_codons() {
        let err = decode_name(&tokenize("ATG")).unwrap_err();
        assert_eq!(
            err,
            StrandError::Decode(DecodeError::UndefinedDigit("ATG".to_string()))
        );
    }

    #[test]
    fn trailing_partial_group_yields_a_character() {
        // 'H' = 72 = [2, 0, 0]; a trailing [0, 2] partial accumulates to 2.
        let mut codons = tokenize(&encode_name("H").unwrap());
        codons.push(Codon::new("CGA"));
        codons.push(Codon::new("CGG"));
        let decoded = decode_name(&codons).unwrap();
        assert_eq!(decoded, format!("H{}", char::from_u32(2).unwrap()));
    }

    #[test]
    fn trailing_zero_partial_is_dropped() {
        let mut codons = tokenize(&encode_name("H").unwrap());
        codons.push(Codon::new("CGA"));
        assert_eq!(decode_name(&codons).unwrap(), "H");
    }

    #[test]
    fn encode_rejects_wide_chars() {
        assert!(encode_name("é").is_err());
    }

    #[test]
    fn block_with_name_temp_and_energy() {
        // GTG + "HI" (6 digit codons) + AAA + GGG
        let symbols = format!("GTG{}AAAGGG", encode_name("HI").unwrap());
        let codons = tokenize(&symbols);
        let block = decode_block(&codons).unwrap();
        assert_eq!(block.environment.name.as_deref(), Some("HI"));
        assert_eq!(block.environment.temp, Temperature::High);
        assert_eq!(block.environment.energy, Energy::High);
        assert_eq!(block.consumed, codons.len());
    }

    #[test]
    fn block_without_energy_codon_keeps_default() {
        let symbols = format!("GTG{}TTT", encode_name("A").unwrap());
        let codons = tokenize(&symbols);
        let block = decode_block(&codons).unwrap();
        assert_eq!(block.environment.temp, Temperature::Low);
        assert_eq!(block.environment.energy, Energy::Low);
        assert_eq!(block.consumed, codons.len());
    }

    #[test]
    fn stop_terminated_block_keeps_defaults() {
        let codons = tokenize("GTGTAA");
        let block = decode_block(&codons).unwrap();
        assert_eq!(block.environment, Environment::block_defaults());
        assert_eq!(block.consumed, 2);
    }

    #[test]
    fn end_of_input_terminates_like_a_stop() {
        let symbols = format!("GTG{}", encode_name("A").unwrap());
        let codons = tokenize(&symbols);
        let block = decode_block(&codons).unwrap();
        assert_eq!(block.environment.name.as_deref(), Some("A"));
        assert_eq!(block.environment.temp, Temperature::Low);
        assert_eq!(block.consumed, codons.len());
    }

    #[test]
    fn block_consumed_count_leaves_following_codons() {
        let symbols = format!("GTG{}AAAATGTAA", encode_name("A").unwrap());
        let codons = tokenize(&symbols);
        let block = decode_block(&codons).unwrap();
        // The trailing ATG and TAA are not part of the block.
        assert_eq!(block.consumed, codons.len() - 2);
        assert_eq!(codons[block.consumed].as_str(), "ATG");
    }

    #[test]
    fn prefix_environment_reads_first_three_codons() {
        let env = prefix_environment(&tokenize("GGGACCGAT"));
        assert_eq!(env.energy, Energy::High);
        assert_eq!(env.temp, Temperature::Neutral);

        // Setting codons past the prefix are ignored.
        let env = prefix_environment(&tokenize("ACCGATTAAGGG"));
        assert_eq!(env.energy, Energy::Medium);
    }
}

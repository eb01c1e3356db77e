//! Encode text into environment-name codons.
//!
//! The inverse of the base-6 name decoder: the printed symbol string, placed
//! in an environment block, decodes back to the given text.

use anyhow::Result;
use colored::Colorize;
use strand::prelude::*;

use crate::commands::fail;

pub fn run(text: &str, json: bool) -> Result<()> {
    match encode_name(text) {
        Ok(symbols) => {
            if json {
                println!("{}", serde_json::json!({ "symbols": symbols }));
            } else {
                println!("{} {}", "✓".green(), symbols.white().bold());
                println!(
                    "  {} codons for {} characters",
                    (symbols.len() / 3).to_string().cyan(),
                    text.chars().count().to_string().cyan()
                );
            }
            Ok(())
        }
        Err(err) => fail(err, json),
    }
}

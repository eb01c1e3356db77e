//! Extract pathways and print the visualizer graph record.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use strand::prelude::*;

use crate::commands::{fail, resolve_sequence};

pub fn run(sequence: Option<&str>, file: Option<&Path>, json: bool) -> Result<()> {
    let symbols = resolve_sequence(sequence, file)?;

    match Interpreter::new().pathways(&symbols) {
        Ok(scan) => {
            if json {
                println!("{}", serde_json::to_string(&scan.graph_record())?);
            } else {
                render(&scan);
            }
            Ok(())
        }
        Err(err) => fail(err, json),
    }
}

fn render(scan: &PathwayScan) {
    if scan.pathways.is_empty() {
        println!("{} No pathways found", "•".yellow());
    }

    for (index, pathway) in scan.pathways.iter().enumerate() {
        println!(
            "{} Pathway {}: {}",
            "✓".green(),
            index + 1,
            pathway.nodes().join(" → ").white().bold()
        );
    }

    for offset in &scan.incomplete {
        println!(
            "{} Incomplete pathway definition at codon {}",
            "•".yellow(),
            offset
        );
    }
}

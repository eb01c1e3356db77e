//! Interpret a DNA sequence and render the result.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use strand::prelude::*;

use crate::commands::{fail, resolve_sequence};
use crate::config::Config;
use crate::fasta;

pub fn run(
    sequence: Option<&str>,
    file: Option<&Path>,
    viruses: Option<&Path>,
    blocks: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;
    let symbols = resolve_sequence(sequence, file)?;

    let virus_path = viruses
        .map(Path::to_path_buf)
        .or_else(|| config.viruses.library.clone());
    let interpreter = match &virus_path {
        Some(path) => Interpreter::with_viruses(fasta::read_virus_library(path)?),
        None => Interpreter::new(),
    };

    let blocks = blocks || config.run.blocks;
    let json = json || config.output.json;

    if verbose && !json {
        let count = symbols.chars().filter(|c| !c.is_ascii_whitespace()).count();
        println!(
            "{} Interpreting {} symbols ({} armed viruses)",
            "→".blue(),
            count.to_string().cyan(),
            interpreter.viruses().len().to_string().cyan()
        );
    }

    let result = if blocks {
        interpreter.interpret_blocks(&symbols)
    } else {
        interpreter.interpret(&symbols)
    };

    match result {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                render(&result);
            }
            Ok(())
        }
        Err(err) => fail(err, json),
    }
}

fn render(result: &InterpretationResult) {
    if result.proteins.is_empty() {
        println!("{} No proteins produced", "•".yellow());
    } else {
        println!(
            "{} Proteins: {}",
            "✓".green(),
            result.proteins.join(", ").white().bold()
        );
    }

    match &result.environment {
        EnvironmentReport::Single(env) => print_environment(env, None),
        EnvironmentReport::Named(map) if map.is_empty() => {
            println!("  Environment: {}", "defaults (no blocks)".dimmed());
        }
        EnvironmentReport::Named(map) => {
            for (name, env) in map {
                print_environment(env, Some(name.as_str()));
            }
        }
    }

    if result.viruses.is_empty() {
        println!("  Viruses: {}", "none".dimmed());
    } else {
        println!("  Viruses: {}", result.viruses.join(", ").red().bold());
    }
}

fn print_environment(env: &Environment, name: Option<&str>) {
    let label = name
        .filter(|n| !n.is_empty())
        .map(|n| format!(" [{}]", n))
        .unwrap_or_default();
    println!(
        "  Environment{}: TEMP={} ENERGY={}",
        label,
        env.temp.as_str(),
        env.energy.as_str()
    );
}

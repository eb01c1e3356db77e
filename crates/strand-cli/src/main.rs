//! Strand CLI - interpret DNA programs from the command line.

mod commands;
mod config;
mod fasta;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "strand")]
#[command(author, version, about = "Strand - an esoteric DNA programming language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a DNA sequence
    Run {
        /// DNA sequence to execute directly
        sequence: Option<String>,

        /// Read the sequence from a FASTA file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Virus library FASTA file to arm
        #[arg(long)]
        viruses: Option<PathBuf>,

        /// Decode named environment blocks instead of the three-codon prefix
        #[arg(long)]
        blocks: bool,

        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a FASTA file without interpreting it
    Validate {
        /// File to check
        file: PathBuf,
    },

    /// Encode text into environment-name codons
    Encode {
        /// Text to encode (ASCII)
        text: String,

        /// Print the symbols as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract pathways for visualization
    Pathways {
        /// DNA sequence to scan directly
        sequence: Option<String>,

        /// Read the sequence from a FASTA file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the graph record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            sequence,
            file,
            viruses,
            blocks,
            json,
        } => commands::run::run(
            sequence.as_deref(),
            file.as_deref(),
            viruses.as_deref(),
            blocks,
            json,
            cli.verbose,
        ),
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Encode { text, json } => commands::encode::run(&text, json),
        Commands::Pathways {
            sequence,
            file,
            json,
        } => commands::pathways::run(sequence.as_deref(), file.as_deref(), json),
    }
}

//! `blast` command-line entry point

use std::process::ExitCode;

use blast_cli::commands::Commands;
use clap::Parser;

/// Blast text into words, sentences, characters or custom segments
#[derive(Debug, Parser)]
#[command(name = "blast", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

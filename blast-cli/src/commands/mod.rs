//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use blast_core::{resolve, DelimiterRule};

use crate::output::OutputFormat;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Blast text files, stdin or a localized key into segments
    Split(split::SplitArgs),

    /// Check a custom delimiter pattern
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in delimiter rules
    Delimiters,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the listing
    pub fn execute(&self) {
        match self {
            ListCommands::Delimiters => {
                println!("Built-in delimiters:");
                for name in DelimiterRule::BUILTIN_NAMES {
                    let Ok(rule) = name.parse::<DelimiterRule>() else {
                        continue;
                    };
                    println!("  {:<10} {}", name, resolve(&rule).pattern);
                }
                println!();
                println!("Use --pattern <REGEX> for a custom rule.");
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} {}", format.name(), format.description());
                }
            }
        }
    }
}

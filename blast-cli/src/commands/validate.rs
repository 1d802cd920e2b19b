//! Validate command implementation

use anyhow::Result;
use clap::Args;

use blast_api::{blast, DelimiterRule};
use blast_core::Pattern;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Custom delimiter regex to check
    #[arg(short, long, value_name = "REGEX", required = true)]
    pub pattern: String,

    /// Sample text to blast with the pattern
    #[arg(short, long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating delimiter pattern: {}", self.pattern);

        let rule = DelimiterRule::custom(self.pattern.as_str());
        match Pattern::compile(&rule) {
            Ok(pattern) => {
                println!("✓ Pattern is valid!");
                println!("  Capture groups: {}", pattern.group_count());
                if pattern.group_count() == 0 {
                    println!("  Segments are whole matches (no capture group 1)");
                }
            }
            Err(e) => {
                println!("✗ Pattern is invalid!");
                println!("  Error: {e}");
                return Err(CliError::InvalidDelimiter(e.to_string()).into());
            }
        }

        if let Some(sample) = &self.sample {
            let text = blast(sample, rule).map_err(CliError::from)?;
            println!("  Sample segments: {}", text.len());
            for segment in &text {
                println!("    {}: {:?}", segment.id, segment.value);
            }
        }

        Ok(())
    }
}

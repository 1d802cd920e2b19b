//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it with:");
        println!(
            "   blast split -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# blast configuration

[segmentation]
# Built-in rule used when neither --delimiter nor --pattern is given:
# all, character, word or sentence
default_delimiter = "word"

# Custom regex; when set it replaces default_delimiter.
# Capture group 1, if present, selects the segment text.
# custom_pattern = '\s*(\S+)\s*'

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
# Print segment ids and byte offsets in text output
show_offsets = false

[localization]
# Locale for --key lookups (falls back to LC_ALL, LC_MESSAGES, LANG)
# locale = "en"
# Directory holding <locale>.toml translation tables
# catalog_dir = "i18n"
"#
    }
}

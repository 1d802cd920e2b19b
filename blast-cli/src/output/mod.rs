//! Output formatting module
//!
//! Formatters are the terminal counterpart of a per-segment view: each
//! segment is rendered on its own, in scan order.

use anyhow::Result;
use blast_api::Segment;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Announce the input the following segments come from
    fn begin_source(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &Segment) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array of segments with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Every format, for listing
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }

    /// Format name
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One segment per line; --offsets adds ids and byte ranges",
            OutputFormat::Json => "Array of segments with byte and character offsets",
            OutputFormat::Markdown => "Numbered list with a segment total",
        }
    }
}

/// Rendering options shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Pretty print JSON
    pub pretty_json: bool,
    /// Show ids and offsets in text output
    pub show_offsets: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).show_offsets(options.show_offsets)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_name(format.name()), Some(format));
            assert!(!format.description().is_empty());
        }
        assert_eq!(OutputFormat::from_name("MD"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}

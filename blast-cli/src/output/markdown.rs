//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use blast_api::Segment;
use std::io::Write;

/// Markdown formatter - outputs segments as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
    source_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
            source_count: 0,
        }
    }

    /// Get the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.source_count > 0 {
            writeln!(self.writer)?;
        }
        self.source_count += 1;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        self.segment_count += 1;
        writeln!(self.writer, "{}. {}", segment.id.0 + 1, segment.trimmed())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

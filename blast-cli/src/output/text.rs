//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use blast_api::Segment;
use std::io::{self, Write};

/// Plain text formatter - outputs one segment per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_offsets: bool,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_offsets: false,
            sources: 0,
        }
    }

    /// Print `id<TAB>start..end<TAB>"value"` instead of the bare value
    pub fn show_offsets(mut self, show: bool) -> Self {
        self.show_offsets = show;
        self
    }

    /// Get the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.sources > 0 {
            writeln!(self.writer)?;
        }
        self.sources += 1;
        writeln!(self.writer, "==> {name} <==")?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        if self.show_offsets {
            writeln!(
                self.writer,
                "{}\t{}..{}\t{:?}",
                segment.id.0, segment.byte_range.start, segment.byte_range.end, segment.value
            )?;
        } else {
            writeln!(self.writer, "{}", segment.trimmed())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

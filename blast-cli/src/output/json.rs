//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use blast_api::Segment;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: Option<String>,
    segments: Vec<SegmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentData {
    /// Input the segment came from, when several inputs are blasted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
    /// Position in scan order
    pub id: usize,
    /// The segment text, verbatim
    pub text: String,
    /// Starting byte offset in the source text
    pub byte_start: usize,
    /// Ending byte offset in the source text
    pub byte_end: usize,
    /// Starting character offset in the source text
    pub char_start: usize,
    /// Ending character offset in the source text
    pub char_end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            source: None,
            segments: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.source = Some(name.to_string());
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        self.segments.push(SegmentData {
            source: self.source.clone(),
            id: segment.id.0,
            text: segment.value.clone(),
            byte_start: segment.byte_range.start,
            byte_end: segment.byte_range.end,
            char_start: segment.char_range.start,
            char_end: segment.char_range.end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

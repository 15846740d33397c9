use std::collections::HashMap;
use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::transcript::TranscriptChunk;
use crate::domain::DomainError;

/// Collapses the pretty-printer's multi-line timestamp arrays onto a
/// single `[start end]` line.
static TIMESTAMP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""timestamp": \[\s*(\S+),\s*(\S+)\s*\]"#).expect("valid regex")
});

/// Export file formats for a finished transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Json,
    Srt,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "transcript.txt",
            ExportFormat::Json => "transcript.json",
            ExportFormat::Srt => "transcript.srt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Txt | ExportFormat::Srt => "text/plain",
            ExportFormat::Json => "application/json",
        }
    }
}

/// JSON export shape: original chunk fields with the effective text and
/// open-ended timestamps resolved to their start.
#[derive(Serialize)]
struct ExportChunk<'a> {
    timestamp: [f64; 2],
    text: &'a str,
}

/// Holds the current chunk list and a sparse overlay of user edits.
///
/// The overlay never mutates the original chunks; an absent entry means
/// "use the original text". Installing a new chunk list drops all edits,
/// so overlay indices are always valid indices into the current chunks.
#[derive(Debug, Default)]
pub struct TranscriptEditor {
    chunks: Vec<TranscriptChunk>,
    overlay: HashMap<usize, String>,
}

impl TranscriptEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chunk list, discarding all edits.
    pub fn install(&mut self, chunks: Vec<TranscriptChunk>) {
        self.chunks = chunks;
        self.overlay.clear();
    }

    pub fn chunks(&self) -> &[TranscriptChunk] {
        &self.chunks
    }

    /// Effective text of a chunk: the edit if present, else the original.
    pub fn text(&self, index: usize) -> Option<&str> {
        let original = self.chunks.get(index)?;
        Some(
            self.overlay
                .get(&index)
                .map(String::as_str)
                .unwrap_or(&original.text),
        )
    }

    /// Override the text of a chunk. Out-of-range indices are ignored.
    pub fn set_text(&mut self, index: usize, text: String) {
        if index < self.chunks.len() {
            self.overlay.insert(index, text);
        }
    }

    /// Drop the override for a chunk, restoring the original text.
    pub fn reset(&mut self, index: usize) {
        self.overlay.remove(&index);
    }

    /// Whether the effective text differs from the original.
    pub fn is_edited(&self, index: usize) -> bool {
        match (self.chunks.get(index), self.overlay.get(&index)) {
            (Some(chunk), Some(edited)) => chunk.text != *edited,
            _ => false,
        }
    }

    /// Render the transcript in the given format.
    pub fn export(&self, format: ExportFormat) -> Result<String, DomainError> {
        match format {
            ExportFormat::Txt => Ok(self.to_txt()),
            ExportFormat::Json => self.to_json(),
            ExportFormat::Srt => Ok(self.to_srt()),
        }
    }

    /// Effective texts concatenated in order, trimmed as a whole. No
    /// separators beyond what the text itself contains.
    fn to_txt(&self) -> String {
        let mut out = String::new();
        for index in 0..self.chunks.len() {
            if let Some(text) = self.text(index) {
                out.push_str(text);
            }
        }
        out.trim().to_string()
    }

    /// Pretty-printed JSON array with each timestamp on a single line.
    fn to_json(&self) -> Result<String, DomainError> {
        let export: Vec<ExportChunk<'_>> = self
            .chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| ExportChunk {
                timestamp: [chunk.timestamp.start(), chunk.timestamp.end_or_start()],
                text: self.text(index).unwrap_or(&chunk.text),
            })
            .collect();

        let pretty = serde_json::to_string_pretty(&export)?;
        Ok(TIMESTAMP_LINE
            .replace_all(&pretty, "\"timestamp\": [$1 $2]")
            .into_owned())
    }

    /// Standard subtitle cues, 1-indexed, open-ended chunks degenerating
    /// to zero-duration cues.
    fn to_srt(&self) -> String {
        let mut out = String::new();
        for (index, chunk) in self.chunks.iter().enumerate() {
            let _ = write!(
                out,
                "{}\n{} --> {}\n{}\n\n",
                index + 1,
                format_srt_time(chunk.timestamp.start()),
                format_srt_time(chunk.timestamp.end_or_start()),
                self.text(index).unwrap_or(&chunk.text),
            );
        }
        out
    }
}

/// Format seconds as an SRT timecode: `HH:MM:SS,mmm`.
fn format_srt_time(seconds: f64) -> String {
    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1_000;
    let millis = total_millis % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

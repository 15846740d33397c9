use serde::{Deserialize, Serialize};

/// Time range of a transcript chunk, in seconds from the start of the
/// audio. A missing end means the chunk is open-ended; consumers treat it
/// as equal to the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timestamp(pub f64, pub Option<f64>);

impl Timestamp {
    pub fn start(&self) -> f64 {
        self.0
    }

    /// End of the range, defaulting to the start when open-ended.
    pub fn end_or_start(&self) -> f64 {
        self.1.unwrap_or(self.0)
    }
}

/// A time-bounded segment of transcribed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptChunk {
    pub text: String,
    pub timestamp: Timestamp,
}

/// A complete snapshot of the worker's transcription output.
///
/// Replaced wholesale on every `update`/`complete` event, never patched
/// incrementally. `is_busy` is true for interim results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptOutput {
    pub is_busy: bool,
    /// Decoding throughput in tokens per second, when reported.
    pub tps: Option<f32>,
    pub text: String,
    pub chunks: Vec<TranscriptChunk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ended_timestamp_defaults_to_start() {
        let ts = Timestamp(1.5, None);
        assert_eq!(ts.start(), 1.5);
        assert_eq!(ts.end_or_start(), 1.5);

        let bounded = Timestamp(0.0, Some(2.25));
        assert_eq!(bounded.end_or_start(), 2.25);
    }

    #[test]
    fn test_timestamp_serializes_as_array() {
        let chunk = TranscriptChunk {
            text: "Hello".to_string(),
            timestamp: Timestamp(0.0, Some(1.5)),
        };
        let json = serde_json::to_string(&chunk).unwrap();
        assert_eq!(json, r#"{"text":"Hello","timestamp":[0.0,1.5]}"#);
    }

    #[test]
    fn test_open_ended_timestamp_roundtrip() {
        let json = r#"{"text":"world","timestamp":[1.5,null]}"#;
        let chunk: TranscriptChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.timestamp, Timestamp(1.5, None));
        assert_eq!(serde_json::to_string(&chunk).unwrap(), json);
    }
}

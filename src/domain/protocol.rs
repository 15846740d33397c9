use serde::{Deserialize, Serialize};

use crate::domain::transcript::TranscriptChunk;

/// Requests sent from the session controller to the worker.
///
/// The worker runs on its own execution context; requests are fire-and-
/// forget and answered only through the [`WorkerEvent`] stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkerRequest {
    /// Ask whether a model matching the configuration is already loaded.
    CheckModel {
        model: String,
        dtype: String,
        gpu: bool,
    },
    /// Fetch and load the model files for the configuration.
    DownloadModel {
        model: String,
        dtype: String,
        gpu: bool,
    },
    /// Run inference over mono audio samples.
    Transcribe {
        audio: Vec<f32>,
        model: String,
        dtype: String,
        gpu: bool,
        /// None for English-only models.
        subtask: Option<String>,
        /// None for English-only models and for auto-detection.
        language: Option<String>,
    },
}

/// A transcription result payload carried by `update`/`complete` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub text: String,
    pub chunks: Vec<TranscriptChunk>,
    /// Decoding throughput in tokens per second, when measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tps: Option<f32>,
}

/// An error payload carried by `error` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// Events emitted by the worker, self-describing by `status` tag.
///
/// There is no request/response correlation. For a given `file` key,
/// `initiate` precedes any `progress`, which precedes `done`; no ordering
/// is guaranteed across file keys or across unrelated kinds. Every event
/// is safe to apply in isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WorkerEvent {
    /// A file transfer has started.
    Initiate {
        file: String,
        name: String,
        loaded: u64,
        total: u64,
    },
    /// A file transfer advanced. `progress` is fractional in 0..1.
    Progress { file: String, progress: f32 },
    /// A file transfer finished.
    Done { file: String },
    /// The worker finished loading and is ready for requests.
    Ready,
    /// A model matching the checked configuration is loaded.
    ModelReady,
    /// The model check finished without the model being ready.
    ModelCheckComplete,
    /// An interim transcription result.
    Update { data: ResultPayload },
    /// The final transcription result.
    Complete { data: ResultPayload },
    /// The in-flight operation failed.
    Error { data: ErrorPayload },
}

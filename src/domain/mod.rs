pub mod audio;
pub mod config;
pub mod error;
pub mod export;
pub mod progress;
pub mod protocol;
pub mod transcript;

pub use audio::{AudioInput, SAMPLE_RATE};
pub use config::{AppConfig, LoggingConfig, ModelConfig, LANGUAGE_AUTO};
pub use error::DomainError;
pub use export::{ExportFormat, TranscriptEditor};
pub use progress::{ProgressItem, ProgressTracker};
pub use protocol::{ErrorPayload, ResultPayload, WorkerEvent, WorkerRequest};
pub use transcript::{Timestamp, TranscriptChunk, TranscriptOutput};

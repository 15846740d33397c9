use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::{
    AudioInput, DomainError, ModelConfig, ProgressTracker, TranscriptOutput, WorkerEvent,
    WorkerRequest,
};
use crate::ports::WorkerTransport;

/// Observable state of a transcription session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the worker to answer the initial model check.
    CheckingModel,
    /// No model matching the configuration is loaded.
    ModelNotReady,
    /// Model files are being fetched and loaded.
    Downloading,
    /// A matching model is loaded; transcription requests are accepted.
    ModelReady,
    /// A transcription is in flight.
    Transcribing,
}

/// State machine coordinating the recognition worker.
///
/// The controller is the single writer over the model configuration, the
/// progress tracker and the current transcript output. It reacts to
/// worker events and explicit calls; it never blocks waiting for the
/// worker. Callers pump [`WorkerEvent`]s into [`handle_event`] from their
/// event loop.
///
/// [`handle_event`]: SessionController::handle_event
pub struct SessionController {
    worker: Arc<dyn WorkerTransport>,
    config: ModelConfig,
    ready: bool,
    checking: bool,
    loading: bool,
    busy: bool,
    progress: ProgressTracker,
    output: Option<TranscriptOutput>,
    last_error: Option<String>,
}

impl SessionController {
    /// Create a controller in the `CheckingModel` state. The caller is
    /// expected to issue [`check_model`] once at session start.
    ///
    /// [`check_model`]: SessionController::check_model
    pub fn new(worker: Arc<dyn WorkerTransport>, config: ModelConfig) -> Self {
        Self {
            worker,
            config,
            ready: false,
            checking: true,
            loading: false,
            busy: false,
            progress: ProgressTracker::new(),
            output: None,
            last_error: None,
        }
    }

    /// Current state, derived from the readiness/checking/loading/busy
    /// flags.
    pub fn state(&self) -> SessionState {
        if self.checking {
            SessionState::CheckingModel
        } else if self.busy {
            SessionState::Transcribing
        } else if self.loading {
            SessionState::Downloading
        } else if self.ready {
            SessionState::ModelReady
        } else {
            SessionState::ModelNotReady
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Current transcript output, interim or final.
    pub fn output(&self) -> Option<&TranscriptOutput> {
        self.output.as_ref()
    }

    /// Last worker-reported error message, surfaced raw.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Whether the transcript can be exported: a final output is present
    /// and no transcription is streaming.
    pub fn export_ready(&self) -> bool {
        !self.busy && self.output.as_ref().map(|o| !o.is_busy).unwrap_or(false)
    }

    /// Ask the worker whether a model matching the current configuration
    /// is already loaded. Issued once at session start.
    pub fn check_model(&mut self) -> Result<(), DomainError> {
        self.checking = true;
        info!(model = %self.config.model, "Checking model availability");
        let result = self.worker.send(WorkerRequest::CheckModel {
            model: self.config.model.clone(),
            dtype: self.config.dtype.clone(),
            gpu: self.config.gpu,
        });

        // No worker event will ever clear the flag after a failed
        // dispatch, so roll it back here.
        if result.is_err() {
            self.checking = false;
        }
        result
    }

    /// Fetch and load the model for the current configuration. Readiness
    /// is reset optimistically until the worker reports `model_ready` or
    /// `ready`.
    pub fn download_model(&mut self) -> Result<(), DomainError> {
        self.ready = false;
        self.loading = true;
        info!(model = %self.config.model, dtype = %self.config.dtype, gpu = self.config.gpu,
            "Requesting model download");
        let result = self.worker.send(WorkerRequest::DownloadModel {
            model: self.config.model.clone(),
            dtype: self.config.dtype.clone(),
            gpu: self.config.gpu,
        });

        if result.is_err() {
            self.loading = false;
        }
        result
    }

    /// Select a different model. Invalidates readiness: a loaded worker
    /// instance is not assumed valid for another model.
    pub fn set_model(&mut self, model: impl Into<String>) {
        let model = model.into();
        if self.config.model != model {
            self.config.model = model;
            self.ready = false;
        }
    }

    /// Select a different numeric precision. Invalidates readiness.
    pub fn set_dtype(&mut self, dtype: impl Into<String>) {
        let dtype = dtype.into();
        if self.config.dtype != dtype {
            self.config.dtype = dtype;
            self.ready = false;
        }
    }

    /// Toggle accelerator use. Invalidates readiness.
    pub fn set_gpu(&mut self, gpu: bool) {
        if self.config.gpu != gpu {
            self.config.gpu = gpu;
            self.ready = false;
        }
    }

    /// Select the spoken language. Inference-time parameter; readiness is
    /// unaffected.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.config.language = language.into();
    }

    /// Select the task (transcribe vs translate). Inference-time
    /// parameter; readiness is unaffected.
    pub fn set_subtask(&mut self, subtask: impl Into<String>) {
        self.config.subtask = subtask.into();
    }

    /// Start transcribing. `None` is a no-op. Otherwise any prior output
    /// is cleared and the busy flag set before the request is dispatched,
    /// so stale results are never shown against the new run.
    ///
    /// The controller exposes the busy flag but does not serialize
    /// concurrent starts itself; the worker processes requests in order.
    pub fn start(&mut self, audio: Option<&AudioInput>) -> Result<(), DomainError> {
        let Some(audio) = audio else {
            return Ok(());
        };

        self.output = None;
        self.busy = true;

        let samples = audio.to_mono();
        debug!(
            samples = samples.len(),
            duration_secs = audio.duration_secs(),
            "Dispatching transcription"
        );

        let result = self.worker.send(WorkerRequest::Transcribe {
            audio: samples,
            model: self.config.model.clone(),
            dtype: self.config.dtype.clone(),
            gpu: self.config.gpu,
            subtask: self.config.effective_subtask(),
            language: self.config.effective_language(),
        });

        if result.is_err() {
            self.busy = false;
        }
        result
    }

    /// Called before the caller replaces the input audio, so stale
    /// results are never shown against new input. Busy and loading flags
    /// are untouched.
    pub fn on_input_change(&mut self) {
        self.output = None;
    }

    /// Apply a worker event. Every event is safe to apply in isolation;
    /// only per-file transfer ordering is assumed.
    pub fn handle_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Initiate {
                file,
                name,
                loaded,
                total,
            } => {
                self.progress.initiate(file, name, loaded, total);
            }
            WorkerEvent::Progress { file, progress } => {
                self.progress.update(&file, progress);
            }
            WorkerEvent::Done { file } => {
                self.progress.finish(&file);
            }
            WorkerEvent::Ready | WorkerEvent::ModelReady => {
                self.ready = true;
                self.checking = false;
                self.loading = false;
                info!(model = %self.config.model, "Model ready");
            }
            WorkerEvent::ModelCheckComplete => {
                self.checking = false;
            }
            WorkerEvent::Update { data } => {
                self.output = Some(TranscriptOutput {
                    is_busy: true,
                    tps: data.tps,
                    text: data.text,
                    chunks: data.chunks,
                });
            }
            WorkerEvent::Complete { data } => {
                self.busy = false;
                self.output = Some(TranscriptOutput {
                    is_busy: false,
                    tps: data.tps,
                    text: data.text,
                    chunks: data.chunks,
                });
                info!("Transcription complete");
            }
            WorkerEvent::Error { data } => {
                // No local recovery or retry; the raw message is surfaced
                // to the caller. A previous final output stays visible.
                self.busy = false;
                self.loading = false;
                self.checking = false;
                error!(message = %data.message, "Worker reported an error");
                self.last_error = Some(data.message);
            }
        }
    }
}

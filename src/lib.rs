#![forbid(unsafe_code)]

//! ScribeFlow: a session controller for streaming speech-to-text.
//!
//! The [`app::SessionController`] coordinates a recognition worker over
//! the message protocol in [`domain::protocol`]: it tracks model
//! readiness and multi-file download progress, normalizes input audio to
//! mono, and materializes the worker's streaming output into an editable,
//! exportable transcript ([`domain::TranscriptEditor`]).
//!
//! The worker itself is an external collaborator behind the
//! [`ports::WorkerTransport`] / [`ports::WorkerBackend`] seams; the
//! shipped [`adapters::worker_channel`] adapter runs any backend on its
//! own tokio task with message-only coordination.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ports;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{DomainError, WorkerRequest};
use crate::ports::{EventReceiver, WorkerBackend, WorkerTransport};

/// Worker transport over an unbounded in-process channel.
///
/// Sending never blocks; delivery order matches send order. The other
/// half of the boundary is the event stream handed out by
/// [`spawn_worker`].
#[derive(Clone)]
pub struct ChannelWorker {
    requests: mpsc::UnboundedSender<WorkerRequest>,
}

impl WorkerTransport for ChannelWorker {
    fn send(&self, request: WorkerRequest) -> Result<(), DomainError> {
        self.requests
            .send(request)
            .map_err(|_| DomainError::ChannelClosed)
    }
}

/// Run a backend on its own task, wired to a fresh channel pair.
///
/// Requests are fed to the backend one at a time in send order, so a
/// backend that processes each request to completion serializes
/// concurrent transcriptions naturally. The task exits when every
/// transport clone has been dropped.
pub fn spawn_worker<B: WorkerBackend>(
    mut backend: B,
) -> (ChannelWorker, EventReceiver, JoinHandle<()>) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<WorkerRequest>();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            backend.handle(request, &event_tx).await;
        }
        debug!("Request channel closed, worker task exiting");
    });

    (
        ChannelWorker {
            requests: request_tx,
        },
        event_rx,
        task,
    )
}

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{DomainError, WorkerEvent, WorkerRequest};

/// Channel on which a worker reports its events back to the controller.
pub type EventSender = mpsc::UnboundedSender<WorkerEvent>;

/// Receiving end of the worker event stream, consumed by the controller's
/// event loop.
pub type EventReceiver = mpsc::UnboundedReceiver<WorkerEvent>;

/// Port for dispatching requests to the recognition worker.
///
/// Sends never block: the worker runs on its own execution context and
/// answers exclusively through the event stream.
pub trait WorkerTransport: Send + Sync {
    /// Dispatch a request. Fails only when the worker is gone.
    fn send(&self, request: WorkerRequest) -> Result<(), DomainError>;
}

/// Port for the compute side of the worker boundary.
///
/// Implementations do the heavy lifting (model fetch, model load,
/// inference) and report progress and results over the event channel.
/// The harness in `adapters::worker_channel` runs a backend on its own
/// task and feeds it requests in order.
#[async_trait]
pub trait WorkerBackend: Send + 'static {
    async fn handle(&mut self, request: WorkerRequest, events: &EventSender);
}

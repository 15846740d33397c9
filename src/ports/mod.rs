pub mod config;
pub mod http;
pub mod worker;

pub use config::SettingsStore;
pub use http::{AudioFetcher, FetchProgress};
pub use worker::{EventReceiver, EventSender, WorkerBackend, WorkerTransport};

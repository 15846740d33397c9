pub mod audio_fetch;
pub mod settings_store;
pub mod worker_channel;

pub use audio_fetch::HttpAudioFetcher;
pub use settings_store::TomlSettingsStore;
pub use worker_channel::{spawn_worker, ChannelWorker};

use async_trait::async_trait;

use crate::domain::DomainError;

/// Byte-level progress callback for a fetch: (loaded, total).
/// Total is 0 when the server does not report a content length.
pub type FetchProgress = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Port for fetching remote input audio.
///
/// A fetch is best-effort and single-attempt. Starting a new fetch
/// supersedes any fetch still in flight: the older call resolves with
/// [`DomainError::Superseded`] and its partial result is discarded.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Download the resource at `url` into memory.
    async fn fetch(
        &self,
        url: &str,
        progress: Option<FetchProgress>,
    ) -> Result<Vec<u8>, DomainError>;
}

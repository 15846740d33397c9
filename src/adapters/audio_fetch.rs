use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures_util::StreamExt;
use once_cell::sync::Lazy;
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::domain::DomainError;
use crate::ports::{AudioFetcher, FetchProgress};

/// Upper bound on the capacity pre-allocated from a server-reported
/// content length. The buffer still grows past this as bytes actually
/// arrive.
const MAX_PREALLOC_BYTES: u64 = 16 * 1024 * 1024;

/// Shared HTTP client for all audio fetches.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .use_rustls_tls()
        .user_agent(format!("ScribeFlow/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client - this should not happen")
});

/// Streaming audio fetcher where a new request supersedes the old one.
///
/// Each fetch bumps a generation counter and checks it between stream
/// chunks. When a newer fetch has started, the older one stops reading
/// and resolves with [`DomainError::Superseded`]; its partial bytes are
/// discarded. This mirrors aborting an in-flight request when the source
/// URL changes before completion.
pub struct HttpAudioFetcher {
    generation: AtomicU64,
}

impl HttpAudioFetcher {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new fetch generation, invalidating any fetch in flight.
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn validate_url(url: &str) -> Result<Url, DomainError> {
        let parsed = Url::parse(url).map_err(|e| DomainError::HttpRequest(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(DomainError::HttpRequest(format!(
                "Unsupported URL scheme '{}'",
                other
            ))),
        }
    }
}

impl Default for HttpAudioFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch(
        &self,
        url: &str,
        progress: Option<FetchProgress>,
    ) -> Result<Vec<u8>, DomainError> {
        let parsed = Self::validate_url(url)?;
        let generation = self.begin();

        let response = HTTP_CLIENT
            .get(parsed)
            .send()
            .await
            .map_err(|e| DomainError::HttpRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Fetch failures are not fatal to the session; the caller
            // abandons the operation and the user can simply retry.
            warn!(url = url, status = %status, "Audio fetch failed");
            return Err(DomainError::HttpRequest(format!(
                "HTTP {} for {}",
                status, url
            )));
        }

        let total = response.content_length().unwrap_or(0);
        let mut bytes = Vec::with_capacity(initial_capacity(total));
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            if !self.is_current(generation) {
                warn!(url = url, "Audio fetch superseded, discarding partial data");
                return Err(DomainError::Superseded);
            }

            let chunk = chunk_result.map_err(|e| DomainError::HttpRequest(e.to_string()))?;
            bytes.extend_from_slice(&chunk);

            if let Some(callback) = &progress {
                callback(bytes.len() as u64, total);
            }
        }

        info!(url = url, size = bytes.len(), "Audio fetched");
        Ok(bytes)
    }
}

/// Initial buffer capacity for a download with the given content length.
/// The server-reported length is untrusted, so it only pre-commits
/// memory up to [`MAX_PREALLOC_BYTES`].
fn initial_capacity(content_length: u64) -> usize {
    content_length.min(MAX_PREALLOC_BYTES) as usize
}

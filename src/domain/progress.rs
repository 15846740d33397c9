use serde::{Deserialize, Serialize};

/// Progress of a single in-flight file transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressItem {
    /// File key, unique among in-flight transfers.
    pub file: String,
    /// Human-readable name (typically the model repository).
    pub name: String,
    /// Last reported transfer status.
    pub status: String,
    /// Bytes transferred so far.
    pub loaded: u64,
    /// Total bytes, 0 if unknown.
    pub total: u64,
    /// Fractional progress in 0..1.
    pub progress: f32,
}

/// Tracks in-flight file downloads keyed by file name.
///
/// Entries are appended on `initiate` (discovery order is display order),
/// updated on `progress` and removed on `done`. Late or duplicate events
/// for a file that is no longer tracked are tolerated silently. The
/// tracker being empty, together with a readiness event, signals that all
/// loading work for the current operation has finished.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    items: Vec<ProgressItem>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a file. Replaces any stale entry with the same key
    /// so that at most one item per file exists at any time.
    pub fn initiate(&mut self, file: String, name: String, loaded: u64, total: u64) {
        self.items.retain(|item| item.file != file);
        self.items.push(ProgressItem {
            file,
            name,
            status: "initiate".to_string(),
            loaded,
            total,
            progress: 0.0,
        });
    }

    /// Update the progress of a tracked file, touching only the
    /// `progress` field. Unknown files are a no-op.
    pub fn update(&mut self, file: &str, progress: f32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.file == file) {
            item.progress = progress;
        }
    }

    /// Stop tracking a finished file. Unknown files are a no-op.
    pub fn finish(&mut self, file: &str) {
        self.items.retain(|item| item.file != file);
    }

    /// Drop all tracked entries.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// In-flight items in discovery order.
    pub fn items(&self) -> &[ProgressItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

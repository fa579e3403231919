use crate::{error::Result, models::GeneratedImage};
use async_trait::async_trait;

/// Records older than this never appear in reads; they are filtered at read
/// time, not deleted on write.
pub const RETENTION_DAYS: i64 = 90;

pub(crate) const RETENTION_MS: i64 = RETENTION_DAYS * 24 * 60 * 60 * 1000;

pub(crate) fn is_recent(record: &GeneratedImage, now_ms: i64) -> bool {
    now_ms - record.timestamp < RETENTION_MS
}

/// The persisted image collection: one list of records, with history,
/// gallery and ranking as read-time views over it.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Prepend records, newest first. Returns how many were added.
    async fn append(&self, records: Vec<GeneratedImage>) -> Result<usize>;

    /// Every record within the retention window, newest first.
    async fn history(&self) -> Result<Vec<GeneratedImage>>;

    /// Public records within the retention window.
    async fn gallery(&self) -> Result<Vec<GeneratedImage>>;

    /// Gallery ordered by votes, highest first.
    async fn ranking(&self) -> Result<Vec<GeneratedImage>>;

    /// Mark a record public. Returns false when it already was.
    async fn promote(&self, id: &str) -> Result<bool>;

    /// Adjust a record's vote tally by `delta` (±1 in practice) and return
    /// the new count.
    async fn vote(&self, id: &str, delta: i32) -> Result<i32>;

    /// Drop one record. Returns false when no record had that id.
    async fn remove(&self, id: &str) -> Result<bool>;

    /// Drop everything.
    async fn clear(&self) -> Result<()>;
}

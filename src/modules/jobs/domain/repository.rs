/// Trait seams for the fetch pipeline
///
/// `JobSource` is the remote tabular data source; `JobCache` is the
/// persisted, TTL-gated memoization of the canonical set. Both are mocked
/// in tests.
use async_trait::async_trait;

use crate::modules::jobs::domain::entities::{Job, RawJob};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch every raw row from the remote endpoint.
    /// Transport failures, non-success statuses and malformed bodies are
    /// all errors; filtering and normalization happen in the caller.
    async fn fetch_jobs(&self) -> AppResult<Vec<RawJob>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobCache: Send + Sync {
    /// The cached canonical set, only if present and within its TTL.
    /// Expired entries read as absent; they are not purged.
    async fn read(&self) -> Option<Vec<Job>>;

    /// The cached canonical set regardless of age. Fallback path only:
    /// stale data beats no data when the network is down.
    async fn read_stale(&self) -> Option<Vec<Job>>;

    /// Store the canonical set with the current timestamp, overwriting
    /// any prior entry.
    async fn write(&self, jobs: &[Job]) -> AppResult<()>;
}

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::modules::jobs::domain::entities::Job;
use crate::modules::jobs::domain::repository::JobCache;
use crate::shared::errors::{AppError, AppResult};

const CACHE_FILE_NAME: &str = "jobs_cache.json";

/// On-disk envelope: the canonical set plus the timestamp it was fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEnvelope {
    jobs: Vec<Job>,
    cached_at: DateTime<Utc>,
}

impl CacheEnvelope {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: ChronoDuration) -> bool {
        now.signed_duration_since(self.cached_at) < ttl
    }
}

/// `JobCache` persisted as a JSON file, surviving process restarts
///
/// Reads are TTL-gated; an expired entry reads as absent and stays on disk
/// until the next write overwrites it. A corrupt or unreadable file also
/// reads as absent, logged at warn level.
pub struct FileJobCache {
    path: PathBuf,
    ttl: ChronoDuration,
}

impl FileJobCache {
    pub fn new(cache_dir: &Path, ttl: Duration) -> Self {
        Self {
            path: cache_dir.join(CACHE_FILE_NAME),
            ttl: ChronoDuration::from_std(ttl).unwrap_or_else(|_| ChronoDuration::seconds(900)),
        }
    }

    fn load_envelope(&self) -> Option<CacheEnvelope> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read job cache {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!("Discarding corrupt job cache {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn read_at(&self, now: DateTime<Utc>) -> Option<Vec<Job>> {
        let envelope = self.load_envelope()?;

        if envelope.is_fresh(now, self.ttl) {
            debug!("Job cache hit ({} records)", envelope.jobs.len());
            Some(envelope.jobs)
        } else {
            debug!("Job cache entry expired, treating as absent");
            None
        }
    }

    fn write_at(&self, jobs: &[Job], now: DateTime<Utc>) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::CacheError(format!("Failed to create cache dir: {}", e)))?;
        }

        let envelope = CacheEnvelope {
            jobs: jobs.to_vec(),
            cached_at: now,
        };
        let raw = serde_json::to_string(&envelope)
            .map_err(|e| AppError::CacheError(format!("Failed to encode job cache: {}", e)))?;

        fs::write(&self.path, raw)
            .map_err(|e| AppError::CacheError(format!("Failed to write job cache: {}", e)))?;

        debug!("Cached {} records at {}", jobs.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl JobCache for FileJobCache {
    async fn read(&self) -> Option<Vec<Job>> {
        self.read_at(Utc::now())
    }

    async fn read_stale(&self) -> Option<Vec<Job>> {
        self.load_envelope().map(|envelope| envelope.jobs)
    }

    async fn write(&self, jobs: &[Job]) -> AppResult<()> {
        self.write_at(jobs, Utc::now())
    }
}

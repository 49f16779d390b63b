pub mod file_cache;
pub mod http_source;
pub mod seed;

pub use file_cache::FileJobCache;
pub use http_source::{HttpJobSource, RetryConfig};
pub use seed::seed_jobs;

/// Job board module
///
/// The data pipeline of the job listing browser:
/// - Domain: the record model, query engine and trait seams
/// - Application: `JobBoardService`, owning state and the fetch pipeline
/// - Infrastructure: HTTP source, file-persisted TTL cache, seed fallback
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{JobBoardService, LoadOutcome};
pub use domain::{
    entities::{ingest, Job, RawJob},
    query::visible_jobs,
    repository::{JobCache, JobSource},
    value_objects::{BoardView, CategoryFilter, JobQuery, SortOrder, VisibleJobs},
};
pub use infrastructure::{seed_jobs, FileJobCache, HttpJobSource};

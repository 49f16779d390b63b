pub mod entities;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entities::{ingest, Job, RawJob, RawScalar};
pub use repository::{JobCache, JobSource};
pub use value_objects::{BoardView, CategoryFilter, JobQuery, SortOrder, VisibleJobs};

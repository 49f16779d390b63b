//! loker: the core of a client-side job listing browser.
//!
//! Fetches job rows from a remote tabular endpoint, drops inactive rows at
//! ingestion, caches the canonical set on disk with a TTL, and derives a
//! searchable, sortable visible subset. Presentation is an external
//! collaborator: it renders `BoardView` and calls the service's setters.

pub mod modules;
pub mod shared;

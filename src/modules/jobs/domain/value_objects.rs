/// Value objects for the jobs domain
use serde::{Deserialize, Serialize};

use super::entities::Job;

/// Sort order for the visible subset, keyed on pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// Category filter: `All` passes every record, `Only` requires an exact,
/// case-sensitive match on the category tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses the wire form used by filter dropdowns, where the literal
    /// `"all"` means no filtering
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// The live query state: everything the visible subset is derived from,
/// besides the canonical set itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

/// Result of running a query over the canonical set.
///
/// `NoMatches` is an explicit signal, not merely an empty vector, so the
/// boundary can render "no results" distinct from "still loading".
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleJobs {
    Matches(Vec<Job>),
    NoMatches,
}

/// What a presentation adapter renders from. A later successful refresh
/// replaces `Failed` implicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    /// First load has not completed yet
    Loading,
    /// Fetch failed and no fallback data existed; `message` is the
    /// localized inline text
    Failed { message: String },
    /// Canonical data exists but nothing passes the current filters
    NoMatches,
    /// The visible subset, already filtered and sorted
    Jobs(Vec<Job>),
}

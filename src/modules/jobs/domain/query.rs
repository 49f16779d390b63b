/// Query engine: derives the visible subset from the canonical set
///
/// Pure function of (canonical, query); holds no state and is fully
/// recomputed on every query-affecting change. Cheap enough to run per
/// keystroke; debouncing is the boundary's concern, never done here.
use super::entities::Job;
use super::value_objects::{JobQuery, SortOrder, VisibleJobs};

/// Applies search, category filter and sort order.
///
/// A record passes iff its lower-cased title contains the lower-cased
/// search term (an empty term always passes) and the category filter
/// accepts its tag. The sort is stable: equal-pay records keep their
/// relative input order, so toggling the order never makes ties jitter.
pub fn visible_jobs(canonical: &[Job], query: &JobQuery) -> VisibleJobs {
    let term = query.search_term.to_lowercase();

    let mut matches: Vec<Job> = canonical
        .iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&term) && query.category.accepts(&job.category)
        })
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Ascending => matches.sort_by(|a, b| a.pay.cmp(&b.pay)),
        SortOrder::Descending => matches.sort_by(|a, b| b.pay.cmp(&a.pay)),
    }

    if matches.is_empty() {
        VisibleJobs::NoMatches
    } else {
        VisibleJobs::Matches(matches)
    }
}

/// Distinct category tags of the canonical set, sorted, for filter
/// dropdowns.
pub fn categories(canonical: &[Job]) -> Vec<String> {
    let mut tags: Vec<String> = canonical.iter().map(|job| job.category.clone()).collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::value_objects::CategoryFilter;

    fn job(id: &str, title: &str, pay: u64, category: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            pay,
            category: category.to_string(),
            verified: false,
            syarat: String::new(),
            description: String::new(),
            link: String::new(),
        }
    }

    fn titles(result: &VisibleJobs) -> Vec<String> {
        match result {
            VisibleJobs::Matches(jobs) => jobs.iter().map(|j| j.title.clone()).collect(),
            VisibleJobs::NoMatches => vec![],
        }
    }

    #[test]
    fn test_search_term_matches_title_substring_case_insensitively() {
        let canonical = vec![
            job("1", "KYC Officer", 3000, "Keuangan"),
            job("2", "Driver", 2000, "Lapangan"),
        ];
        let query = JobQuery {
            search_term: "kyc".to_string(),
            ..JobQuery::default()
        };

        assert_eq!(titles(&visible_jobs(&canonical, &query)), vec!["KYC Officer"]);
    }

    #[test]
    fn test_empty_search_term_passes_everything() {
        let canonical = vec![
            job("1", "KYC Officer", 3000, "Keuangan"),
            job("2", "Driver", 2000, "Lapangan"),
        ];

        let result = visible_jobs(&canonical, &JobQuery::default());
        assert_eq!(titles(&result).len(), 2);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let canonical = vec![
            job("1", "Penulis", 1000, "Penulisan"),
            job("2", "Editor", 1500, "Penulisan"),
            job("3", "Driver", 2000, "Lapangan"),
        ];
        let query = JobQuery {
            category: CategoryFilter::parse("Penulisan"),
            ..JobQuery::default()
        };

        assert_eq!(titles(&visible_jobs(&canonical, &query)), vec!["Penulis", "Editor"]);
    }

    #[test]
    fn test_sort_ascending_and_descending_by_pay() {
        let canonical = vec![
            job("1", "B", 3000, "-"),
            job("2", "A", 1000, "-"),
            job("3", "C", 2000, "-"),
        ];

        let asc = visible_jobs(&canonical, &JobQuery::default());
        assert_eq!(titles(&asc), vec!["A", "C", "B"]);

        let desc = visible_jobs(
            &canonical,
            &JobQuery {
                sort: SortOrder::Descending,
                ..JobQuery::default()
            },
        );
        assert_eq!(titles(&desc), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_pay() {
        let canonical = vec![
            job("1", "First", 1000, "-"),
            job("2", "Second", 1000, "-"),
            job("3", "Cheapest", 500, "-"),
            job("4", "Third", 1000, "-"),
        ];

        let asc = visible_jobs(&canonical, &JobQuery::default());
        assert_eq!(titles(&asc), vec!["Cheapest", "First", "Second", "Third"]);

        // Ties keep input order after a toggle too
        let desc = visible_jobs(
            &canonical,
            &JobQuery {
                sort: SortOrder::Descending,
                ..JobQuery::default()
            },
        );
        assert_eq!(titles(&desc), vec!["First", "Second", "Third", "Cheapest"]);
    }

    #[test]
    fn test_no_matches_is_an_explicit_signal() {
        let canonical = vec![job("1", "Driver", 2000, "Lapangan")];
        let query = JobQuery {
            search_term: "astronaut".to_string(),
            ..JobQuery::default()
        };

        assert_eq!(visible_jobs(&canonical, &query), VisibleJobs::NoMatches);
    }

    #[test]
    fn test_query_is_pure() {
        let canonical = vec![
            job("1", "B", 3000, "-"),
            job("2", "A", 1000, "-"),
        ];
        let query = JobQuery {
            search_term: String::new(),
            category: CategoryFilter::All,
            sort: SortOrder::Descending,
        };

        let first = visible_jobs(&canonical, &query);
        let second = visible_jobs(&canonical, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let canonical = vec![
            job("1", "Penulis", 1000, "Penulisan"),
            job("2", "Driver", 2000, "Lapangan"),
            job("3", "Editor", 1500, "Penulisan"),
        ];

        assert_eq!(categories(&canonical), vec!["Lapangan", "Penulisan"]);
    }
}

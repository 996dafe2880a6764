use std::collections::HashSet;

use super::models::{FilterCriteria, JobPosting};

/// Narrow `postings` to those satisfying every supplied criterion.
///
/// The text query is matched case-insensitively as a substring of the
/// title or the company. Location, contract and experience must be equal
/// to the posting's value; a location of `"all"` imposes nothing.
/// Relative order is preserved and the input is left untouched.
pub fn filter_jobs(postings: &[JobPosting], criteria: &FilterCriteria) -> Vec<JobPosting> {
    let query = criteria
        .query
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    postings
        .iter()
        .filter(|posting| matches_query(posting, query.as_deref()))
        .filter(|posting| {
            criteria
                .location_constraint()
                .map_or(true, |location| posting.location == location)
        })
        .filter(|posting| criteria.contract.map_or(true, |c| posting.contract == c))
        .filter(|posting| criteria.experience.map_or(true, |e| posting.experience == e))
        .cloned()
        .collect()
}

fn matches_query(posting: &JobPosting, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(q) => {
            posting.title.to_lowercase().contains(q) || posting.company.to_lowercase().contains(q)
        }
    }
}

/// Distinct locations in order of first appearance.
pub fn distinct_locations(postings: &[JobPosting]) -> Vec<String> {
    let mut seen = HashSet::new();
    postings
        .iter()
        .filter(|posting| seen.insert(posting.location.as_str()))
        .map(|posting| posting.location.clone())
        .collect()
}

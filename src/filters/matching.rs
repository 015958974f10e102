//! Matching applied filters against commits.

use crate::commit::{Commit, CommitOrigin};

use super::applied::AppliedFilters;
use super::catalog::{ORIGIN_LOCAL, ORIGIN_UPSTREAM};
use super::types::{AppliedFilter, FilterName};

fn matches_file_filter(commit: &Commit, filter: &AppliedFilter) -> bool {
    if commit.file_paths.is_empty() {
        return false;
    }
    filter.values.iter().any(|value| {
        commit
            .file_paths
            .iter()
            .any(|path| path.contains(value.as_str()))
    })
}

/// Whether one applied filter accepts a commit.
///
/// Values within the filter are OR-ed. Absent commit fields (no author
/// name, no file paths, no message body) never match.
pub fn commit_matches_filter(
    commit: &Commit,
    filter: &AppliedFilter,
    origin: CommitOrigin,
) -> bool {
    match filter.name {
        FilterName::Author => {
            !commit.author.name.is_empty()
                && filter.values.iter().any(|value| *value == commit.author.name)
        }
        FilterName::Origin => {
            let wanted = match origin {
                CommitOrigin::Upstream => ORIGIN_UPSTREAM,
                CommitOrigin::Local => ORIGIN_LOCAL,
            };
            filter.values.iter().any(|value| value == wanted)
        }
        FilterName::Sha => filter
            .values
            .iter()
            .any(|sha| commit.id.starts_with(sha.as_str())),
        FilterName::File => matches_file_filter(commit, filter),
        FilterName::Title => commit.description_title().is_some_and(|title| {
            filter.values.iter().any(|value| title.contains(value.as_str()))
        }),
        FilterName::Body => commit.description_body().is_some_and(|body| {
            filter.values.iter().any(|value| body.contains(value.as_str()))
        }),
        FilterName::Message => filter
            .values
            .iter()
            .any(|value| commit.description.contains(value.as_str())),
    }
}

/// Apply all filters (AND, sequential narrowing), then an optional
/// free-text substring search over the full description.
///
/// An empty search query behaves like no query.
pub fn filter_commits<'a>(
    commits: &'a [Commit],
    search_query: Option<&str>,
    filters: &AppliedFilters,
    origin: CommitOrigin,
) -> Vec<&'a Commit> {
    let mut filtered: Vec<&Commit> = commits.iter().collect();
    for filter in filters.iter() {
        filtered.retain(|commit| commit_matches_filter(commit, filter, origin));
    }
    if let Some(query) = search_query.filter(|q| !q.is_empty()) {
        filtered.retain(|commit| commit.description.contains(query));
    }
    filtered
}

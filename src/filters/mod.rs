//! Commit-list filtering DSL.
//!
//! Users type filters as `name:value1,value2` into the commit search
//! input. Each recognized filter key is described by a catalog entry,
//! parsed into an [`AppliedFilter`], and matched against commits:
//! values within one filter are OR-ed, separate applied filters AND
//! together (each one narrows the previous result).

mod applied;
mod catalog;
mod matching;
mod parse;
mod types;

#[cfg(test)]
#[path = "../filters_tests.rs"]
mod filters_tests;

pub use applied::{suggestion_is_applied, AppliedFilters};
pub use catalog::{
    find_filter, remote_branch_filters, trunk_branch_filters, ORIGIN_LOCAL, ORIGIN_UPSTREAM,
};
pub use matching::{commit_matches_filter, filter_commits};
pub use parse::{parse_filter_values, split_filter_input};
pub use types::{
    AppliedFilter, AppliedFilterInfo, FilterDescription, FilterName, FilterSuggestion,
    KEY_SEPARATOR, VALUE_SEPARATOR,
};

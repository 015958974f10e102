//! Static filter catalogs per branch context.
//!
//! Remote-branch views support the content filters; trunk views add an
//! `origin:` filter because they interleave local and upstream commits.

use std::sync::OnceLock;

use super::types::{FilterDescription, FilterName, FilterSuggestion};

/// The only values `origin:` accepts.
pub const ORIGIN_LOCAL: &str = "local";
pub const ORIGIN_UPSTREAM: &str = "upstream";

fn suggestion(name: FilterName, value: Option<&str>, description: &str) -> FilterSuggestion {
    FilterSuggestion {
        name,
        value: value.map(str::to_string),
        description: description.to_string(),
    }
}

fn open_filter(name: FilterName, description: &str) -> FilterDescription {
    FilterDescription {
        name,
        allowed_values: None,
        suggestions: vec![suggestion(name, None, description)],
    }
}

/// Filters available when viewing a remote branch.
pub fn remote_branch_filters() -> &'static [FilterDescription] {
    static CATALOG: OnceLock<Vec<FilterDescription>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            open_filter(
                FilterName::Author,
                "Filter by commit author. Name must match exactly the given value",
            ),
            open_filter(
                FilterName::Sha,
                "Filter by commit SHA. It must start with the given value",
            ),
            open_filter(
                FilterName::File,
                "Filter by file path. It must include the given value",
            ),
            open_filter(
                FilterName::Title,
                "Filter by commit title. It must include the given value",
            ),
            open_filter(
                FilterName::Body,
                "Filter by commit body. It must include the given value",
            ),
            open_filter(
                FilterName::Message,
                "Filter by commit message. It must include the given value",
            ),
        ]
    })
}

/// Filters available when viewing the trunk branch: the remote set plus
/// `origin:` restricted to `local`/`upstream`.
pub fn trunk_branch_filters() -> &'static [FilterDescription] {
    static CATALOG: OnceLock<Vec<FilterDescription>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut catalog = remote_branch_filters().to_vec();
        catalog.push(FilterDescription {
            name: FilterName::Origin,
            allowed_values: Some(vec![
                ORIGIN_LOCAL.to_string(),
                ORIGIN_UPSTREAM.to_string(),
            ]),
            suggestions: vec![
                suggestion(
                    FilterName::Origin,
                    Some(ORIGIN_LOCAL),
                    "Show only local commits",
                ),
                suggestion(
                    FilterName::Origin,
                    Some(ORIGIN_UPSTREAM),
                    "Show only upstream commits",
                ),
            ],
        });
        catalog
    })
}

/// Look up the catalog entry for a filter key.
pub fn find_filter(catalog: &[FilterDescription], name: FilterName) -> Option<&FilterDescription> {
    catalog.iter().find(|description| description.name == name)
}

//! The ordered set of filters a user has applied.

use tracing::debug;

use super::types::{AppliedFilter, AppliedFilterInfo, FilterSuggestion};

/// Ordered, id-deduplicated sequence of applied filters.
///
/// Identity is the derived filter id, so `author:alice,bob` and
/// `author:bob,alice` are one filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilters {
    filters: Vec<AppliedFilter>,
}

impl AppliedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter. Adding one whose id is already present is a
    /// no-op; returns whether the set changed.
    pub fn add(&mut self, info: AppliedFilterInfo) -> bool {
        let filter = AppliedFilter::new(info);
        if self.filters.iter().any(|existing| existing.id == filter.id) {
            debug!(filter_id = %filter.id, "filter already applied");
            return false;
        }
        self.filters.push(filter);
        true
    }

    /// Remove the filter with the given id; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.filters.retain(|filter| filter.id != id);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppliedFilter> {
        self.filters.iter()
    }

    pub fn as_slice(&self) -> &[AppliedFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }
}

impl<'a> IntoIterator for &'a AppliedFilters {
    type Item = &'a AppliedFilter;
    type IntoIter = std::slice::Iter<'a, AppliedFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

/// Whether a catalog suggestion's filter key is already applied.
/// Used to grey out suggestions in the search dropdown.
pub fn suggestion_is_applied(suggestion: &FilterSuggestion, filters: &AppliedFilters) -> bool {
    filters.iter().any(|filter| filter.name == suggestion.name)
}

//! Filter data types: catalog descriptions and applied filters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separates the filter key from its values: `author:alice`.
pub const KEY_SEPARATOR: &str = ":";
/// Separates OR-ed values within one filter: `sha:abc,def`.
pub const VALUE_SEPARATOR: &str = ",";

/// The closed set of recognized filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterName {
    Author,
    Origin,
    Sha,
    File,
    Title,
    Body,
    Message,
}

impl FilterName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Origin => "origin",
            Self::Sha => "sha",
            Self::File => "file",
            Self::Title => "title",
            Self::Body => "body",
            Self::Message => "message",
        }
    }

    /// Parse a lowercase filter key, `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "author" => Some(Self::Author),
            "origin" => Some(Self::Origin),
            "sha" => Some(Self::Sha),
            "file" => Some(Self::File),
            "title" => Some(Self::Title),
            "body" => Some(Self::Body),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    /// The token shown in the search input, e.g. `author:`.
    pub fn token(&self) -> String {
        format!("{}{}", self.as_str(), KEY_SEPARATOR)
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completion entry the search input offers for one filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSuggestion {
    pub name: FilterName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub description: String,
}

/// Static catalog entry describing one recognized filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescription {
    pub name: FilterName,
    /// When present, typed values outside this list reject the filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<FilterSuggestion>,
}

impl FilterDescription {
    /// Whether `value` is permitted by this description.
    pub fn allows(&self, value: &str) -> bool {
        self.allowed_values
            .as_ref()
            .map_or(true, |allowed| allowed.iter().any(|v| v == value))
    }
}

/// A filter key with one or more OR-ed values, before id derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilterInfo {
    pub name: FilterName,
    pub values: Vec<String>,
}

/// An applied filter with its identity.
///
/// The id is `name:values` with the values sorted and comma-joined, so
/// two filters with the same values in different order are the same
/// filter. The stored `values` keep the order the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub name: FilterName,
    pub values: Vec<String>,
    pub id: String,
}

impl AppliedFilter {
    pub fn new(info: AppliedFilterInfo) -> Self {
        let id = filter_id(info.name, &info.values);
        Self {
            name: info.name,
            values: info.values,
            id,
        }
    }

    /// Comma-joined values for display in the applied-filter chip.
    pub fn display_values(&self) -> String {
        self.values.join(VALUE_SEPARATOR)
    }
}

impl From<AppliedFilterInfo> for AppliedFilter {
    fn from(info: AppliedFilterInfo) -> Self {
        Self::new(info)
    }
}

fn filter_id(name: FilterName, values: &[String]) -> String {
    let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    format!("{}{}{}", name, KEY_SEPARATOR, sorted.join(VALUE_SEPARATOR))
}

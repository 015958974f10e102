//! Parsing typed filter input against a catalog description.

use super::types::{FilterDescription, KEY_SEPARATOR, VALUE_SEPARATOR};

/// Parse the value list out of typed filter input like `sha:abc,def`.
///
/// Strips the `name:` prefix, splits the remainder on commas, and
/// returns the values only if every one of them is permitted by the
/// description. `None` means the typed filter is rejected and the user
/// keeps editing; bad input is not an error.
pub fn parse_filter_values(input: &str, description: &FilterDescription) -> Option<Vec<String>> {
    let prefix = description.name.token();
    let remainder = input.replacen(&prefix, "", 1);
    let values: Vec<String> = remainder
        .split(VALUE_SEPARATOR)
        .map(str::to_string)
        .collect();
    values
        .iter()
        .all(|value| description.allows(value))
        .then_some(values)
}

/// Split raw input into the filter key and the rest, if it looks like a
/// `name:values` filter at all.
pub fn split_filter_input(input: &str) -> Option<(&str, &str)> {
    input.split_once(KEY_SEPARATOR)
}

//! Commit data as presented to the UI layer.
//!
//! A [`Commit`] mirrors what the backend computes for one commit of a
//! remote or trunk branch: identity, message, author, and the file paths
//! the commit touches. Serialized camelCase for the frontend.

use serde::{Deserialize, Serialize};

/// Commit author identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravatar_url: Option<String>,
}

/// Which side of the trunk a commit sits on.
///
/// Trunk views mix commits that exist only locally with commits already
/// on the upstream branch; the `origin:` filter distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitOrigin {
    Local,
    Upstream,
}

/// One commit of a branch, with the data the commit list renders and
/// filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Full hex object id.
    pub id: String,
    /// Full commit message, title and body together.
    pub description: String,
    /// Commit time in milliseconds since the epoch.
    pub created_at: u64,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_id: Option<String>,
    #[serde(default)]
    pub parent_ids: Vec<String>,
    /// Paths touched by this commit; empty when the diff lookup failed.
    #[serde(default)]
    pub file_paths: Vec<String>,
}

impl Commit {
    /// First line of the commit message, or `None` for an empty message.
    pub fn description_title(&self) -> Option<&str> {
        let title = self.description.split('\n').next().unwrap_or("");
        (!title.is_empty()).then_some(title)
    }

    /// Message body after the first line, trimmed, or `None` when the
    /// message has no body.
    pub fn description_body(&self) -> Option<&str> {
        let (_, rest) = self.description.split_once('\n')?;
        let body = rest.trim();
        (!body.is_empty()).then_some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_with_description(description: &str) -> Commit {
        Commit {
            id: "0123456789abcdef".to_string(),
            description: description.to_string(),
            created_at: 1_700_000_000_000,
            author: Author::default(),
            change_id: None,
            parent_ids: Vec::new(),
            file_paths: Vec::new(),
        }
    }

    #[test]
    fn title_is_first_line() {
        let commit = commit_with_description("fix parser\n\nHandle empty input.");
        assert_eq!(commit.description_title(), Some("fix parser"));
    }

    #[test]
    fn body_is_trimmed_remainder() {
        let commit = commit_with_description("fix parser\n\nHandle empty input.\n");
        assert_eq!(commit.description_body(), Some("Handle empty input."));
    }

    #[test]
    fn empty_message_has_neither_title_nor_body() {
        let commit = commit_with_description("");
        assert_eq!(commit.description_title(), None);
        assert_eq!(commit.description_body(), None);
    }

    #[test]
    fn title_only_message_has_no_body() {
        let commit = commit_with_description("fix parser");
        assert_eq!(commit.description_title(), Some("fix parser"));
        assert_eq!(commit.description_body(), None);

        // A trailing newline with nothing after it is still no body.
        let commit = commit_with_description("fix parser\n");
        assert_eq!(commit.description_body(), None);
    }

    #[test]
    fn serializes_camel_case_for_the_frontend() {
        let mut commit = commit_with_description("fix parser");
        commit.change_id = Some("xyz".to_string());
        commit.parent_ids = vec!["fedcba".to_string()];
        commit.file_paths = vec!["src/lib.rs".to_string()];

        let value = serde_json::to_value(&commit).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("changeId").is_some());
        assert!(value.get("parentIds").is_some());
        assert!(value.get("filePaths").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn origin_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(CommitOrigin::Upstream).unwrap(),
            serde_json::json!("upstream")
        );
    }
}

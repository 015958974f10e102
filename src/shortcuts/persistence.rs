//! User shortcut customization persistence.
//!
//! Remaps are stored as JSON at `~/.commit-kit/shortcuts.json`, a map
//! of action name to combination string. A JSON `null` disables the
//! action's shortcut entirely.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Shortcut, ShortcutParseError};

/// Error that can occur when loading, saving, or resolving overrides.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to read or write overrides file: {0}")]
    Io(#[from] std::io::Error),
    #[error("overrides file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid shortcut '{combo}' for action '{action}': {source}")]
    InvalidShortcut {
        action: String,
        combo: String,
        #[source]
        source: ShortcutParseError,
    },
}

/// User shortcut overrides.
///
/// - `Some(combo)` = remap the action to a new combination
/// - `None` (JSON `null`) = disable the action's shortcut
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShortcutOverrides {
    #[serde(default)]
    overrides: HashMap<String, Option<String>>,
}

impl ShortcutOverrides {
    /// Load overrides from a JSON file; a missing file means no
    /// overrides.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save overrides as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The effective shortcut for an action.
    ///
    /// `Ok(None)` when the user disabled the action; otherwise the
    /// parsed override, or the parsed default when no override exists.
    pub fn resolve(
        &self,
        action: &str,
        default_combo: &str,
    ) -> Result<Option<Shortcut>, PersistenceError> {
        let combo = match self.overrides.get(action) {
            Some(None) => return Ok(None),
            Some(Some(combo)) => combo.as_str(),
            None => default_combo,
        };
        Shortcut::parse(combo)
            .map(Some)
            .map_err(|source| PersistenceError::InvalidShortcut {
                action: action.to_string(),
                combo: combo.to_string(),
                source,
            })
    }

    pub fn set(&mut self, action: impl Into<String>, combo: Option<String>) {
        self.overrides.insert(action.into(), combo);
    }

    /// Revert an action to its default.
    pub fn remove(&mut self, action: &str) {
        self.overrides.remove(action);
    }

    pub fn get(&self, action: &str) -> Option<&Option<String>> {
        self.overrides.get(action)
    }

    pub fn has_override(&self, action: &str) -> bool {
        self.overrides.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Default path for shortcut overrides.
pub fn default_overrides_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".commit-kit")
        .join("shortcuts.json")
}

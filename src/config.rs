//! Client configuration, loaded from `~/.commit-kit/config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ResultExt;
use crate::shortcuts::{self, Shortcut, ShortcutParseError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    pub modifiers: Vec<String>,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Combination that focuses the commit search input.
    pub search_hotkey: HotkeyConfig,
    /// Where shortcut overrides live; defaults next to this config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut_overrides_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_hotkey: HotkeyConfig {
                modifiers: vec!["meta".to_string()],
                key: "k".to_string(),
            },
            shortcut_overrides_path: None,
        }
    }
}

impl Config {
    /// Path of the config file (`~/.commit-kit/config.json`).
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(".commit-kit")
            .join("config.json")
    }

    /// Load the config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Config {
        let path = Self::config_path();
        if !path.exists() {
            return Config::default();
        }
        Self::load_from(&path).warn_on_err().unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("config at {} is not valid JSON", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))
    }

    /// The configured search hotkey as a parsed shortcut.
    pub fn search_shortcut(&self) -> std::result::Result<Shortcut, ShortcutParseError> {
        let mut combo = self.search_hotkey.modifiers.join("+");
        if !combo.is_empty() {
            combo.push('+');
        }
        combo.push_str(&self.search_hotkey.key);
        Shortcut::parse(&combo)
    }

    /// Effective overrides path: configured or the default location.
    pub fn overrides_path(&self) -> PathBuf {
        self.shortcut_overrides_path
            .clone()
            .unwrap_or_else(shortcuts::default_overrides_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_search_shortcut_parses() {
        let config = Config::default();
        let shortcut = config.search_shortcut().unwrap();
        assert!(shortcut.modifiers.cmd);
        assert_eq!(shortcut.key, "k");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.search_hotkey.modifiers = vec!["ctrl".to_string(), "shift".to_string()];
        config.search_hotkey.key = "f".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        let shortcut = loaded.search_shortcut().unwrap();
        assert!(shortcut.modifiers.ctrl);
        assert!(shortcut.modifiers.shift);
        assert_eq!(shortcut.key, "f");
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn overrides_path_prefers_configured_value() {
        let mut config = Config::default();
        assert_eq!(config.overrides_path(), shortcuts::default_overrides_path());

        config.shortcut_overrides_path = Some(PathBuf::from("/tmp/overrides.json"));
        assert_eq!(config.overrides_path(), PathBuf::from("/tmp/overrides.json"));
    }
}

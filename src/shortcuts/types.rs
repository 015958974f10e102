//! Shortcut and modifier types with typed parse errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a shortcut string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut string is empty")]
    Empty,
    #[error("shortcut has no key, only modifiers")]
    MissingKey,
    #[error("unexpected token '{0}' after the key")]
    TrailingToken(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Modifier keys held as part of a combination.
///
/// `cmd` is the platform accelerator: Command on macOS, the Super/Win
/// key elsewhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub cmd: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub fn cmd() -> Self {
        Self {
            cmd: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.cmd || self.ctrl || self.alt || self.shift
    }

    /// Whether a combination with these modifiers may fire while a
    /// text input has focus. Shift does not qualify: shifted keys
    /// still type characters.
    pub fn bypasses_text_input(&self) -> bool {
        self.cmd || self.ctrl || self.alt
    }
}

/// Platform enum for display formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// A keyboard shortcut: a canonical key name plus modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: String,
    pub modifiers: Modifiers,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: canonicalize_key(&key.into()),
            modifiers,
        }
    }

    /// Parse a combination like `"cmd+shift+k"` or `"ctrl f"`.
    ///
    /// Tokens may be separated by `+` or whitespace. Exactly one
    /// non-modifier token is expected and must be a known key.
    pub fn parse(s: &str) -> Result<Self, ShortcutParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let normalized = trimmed.replace('+', " ");
        let mut modifiers = Modifiers::default();
        let mut key: Option<String> = None;

        for token in normalized.split_whitespace() {
            let lower = token.to_lowercase();
            match lower.as_str() {
                "cmd" | "command" | "meta" | "super" | "win" | "mod" => modifiers.cmd = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "opt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => {
                    if key.is_some() {
                        return Err(ShortcutParseError::TrailingToken(token.to_string()));
                    }
                    let canonical = canonicalize_key(&lower);
                    if !is_known_key(&canonical) {
                        return Err(ShortcutParseError::UnknownKey(token.to_string()));
                    }
                    key = Some(canonical);
                }
            }
        }

        let key = key.ok_or(ShortcutParseError::MissingKey)?;
        Ok(Self { key, modifiers })
    }

    /// Human-readable form for the current platform.
    pub fn display(&self) -> String {
        self.display_for_platform(Platform::current())
    }

    pub fn display_for_platform(&self, platform: Platform) -> String {
        match platform {
            Platform::MacOS => {
                let mut s = String::new();
                if self.modifiers.ctrl {
                    s.push('⌃');
                }
                if self.modifiers.alt {
                    s.push('⌥');
                }
                if self.modifiers.shift {
                    s.push('⇧');
                }
                if self.modifiers.cmd {
                    s.push('⌘');
                }
                s.push_str(&self.key.to_uppercase());
                s
            }
            Platform::Windows | Platform::Linux => {
                let mut parts: Vec<String> = Vec::new();
                if self.modifiers.ctrl {
                    parts.push("Ctrl".to_string());
                }
                if self.modifiers.alt {
                    parts.push("Alt".to_string());
                }
                if self.modifiers.shift {
                    parts.push("Shift".to_string());
                }
                if self.modifiers.cmd {
                    parts.push("Super".to_string());
                }
                parts.push(self.key.to_uppercase());
                parts.join("+")
            }
        }
    }

    /// Stable machine form, e.g. `cmd+shift+k`. Used for logging and
    /// as the format overrides are saved in.
    pub fn to_canonical_string(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.modifiers.cmd {
            parts.push("cmd");
        }
        if self.modifiers.ctrl {
            parts.push("ctrl");
        }
        if self.modifiers.alt {
            parts.push("alt");
        }
        if self.modifiers.shift {
            parts.push("shift");
        }
        parts.push(&self.key);
        parts.join("+")
    }
}

/// Normalize a key name to its canonical lowercase form.
///
/// Accepts the aliases browsers and users commonly produce
/// (`ArrowUp`, `Esc`, `Return`, a literal space).
pub fn canonicalize_key(key: &str) -> String {
    let lower = key.trim().to_lowercase();
    match lower.as_str() {
        "esc" => "escape".to_string(),
        "return" => "enter".to_string(),
        // A literal space key trims to the empty string above
        "" | "spacebar" => "space".to_string(),
        "arrowup" => "up".to_string(),
        "arrowdown" => "down".to_string(),
        "arrowleft" => "left".to_string(),
        "arrowright" => "right".to_string(),
        "del" => "delete".to_string(),
        "pgup" => "pageup".to_string(),
        "pgdn" | "pgdown" => "pagedown".to_string(),
        _ => lower,
    }
}

const NAMED_KEYS: &[&str] = &[
    "space",
    "enter",
    "escape",
    "tab",
    "up",
    "down",
    "left",
    "right",
    "backspace",
    "delete",
    "home",
    "end",
    "pageup",
    "pagedown",
];

/// Whether a canonical key name is one we can bind.
pub fn is_known_key(key: &str) -> bool {
    if NAMED_KEYS.contains(&key) {
        return true;
    }
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_ascii_alphanumeric() || c.is_ascii_punctuation();
    }
    if let Some(n) = key.strip_prefix('f') {
        return matches!(n.parse::<u8>(), Ok(1..=12));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plus_separated_combo() {
        let shortcut = Shortcut::parse("cmd+shift+k").unwrap();
        assert_eq!(shortcut.key, "k");
        assert!(shortcut.modifiers.cmd);
        assert!(shortcut.modifiers.shift);
        assert!(!shortcut.modifiers.ctrl);
    }

    #[test]
    fn parses_space_separated_combo_with_aliases() {
        let shortcut = Shortcut::parse("opt Enter").unwrap();
        assert!(shortcut.modifiers.alt);
        assert_eq!(shortcut.key, "enter");

        let shortcut = Shortcut::parse("meta ArrowUp").unwrap();
        assert!(shortcut.modifiers.cmd);
        assert_eq!(shortcut.key, "up");
    }

    #[test]
    fn rejects_empty_and_modifier_only_input() {
        assert_eq!(Shortcut::parse("   "), Err(ShortcutParseError::Empty));
        assert_eq!(
            Shortcut::parse("cmd+shift"),
            Err(ShortcutParseError::MissingKey)
        );
    }

    #[test]
    fn rejects_unknown_key_and_trailing_token() {
        assert_eq!(
            Shortcut::parse("cmd+frobnicate"),
            Err(ShortcutParseError::UnknownKey("frobnicate".to_string()))
        );
        assert_eq!(
            Shortcut::parse("cmd+k+j"),
            Err(ShortcutParseError::TrailingToken("j".to_string()))
        );
    }

    #[test]
    fn canonical_string_round_trips() {
        let shortcut = Shortcut::parse("shift ctrl cmd p").unwrap();
        assert_eq!(shortcut.to_canonical_string(), "cmd+ctrl+shift+p");
        assert_eq!(
            Shortcut::parse(&shortcut.to_canonical_string()).unwrap(),
            shortcut
        );
    }

    #[test]
    fn display_is_platform_aware() {
        let shortcut = Shortcut::parse("cmd+shift+k").unwrap();
        assert_eq!(shortcut.display_for_platform(Platform::MacOS), "⇧⌘K");
        assert_eq!(
            shortcut.display_for_platform(Platform::Linux),
            "Shift+Super+K"
        );
    }

    #[test]
    fn shift_alone_does_not_bypass_text_input() {
        assert!(!Modifiers::shift().bypasses_text_input());
        assert!(Modifiers::cmd().bypasses_text_input());
        let alt = Modifiers {
            alt: true,
            ..Default::default()
        };
        assert!(alt.bypasses_text_input());
    }

    #[test]
    fn known_keys_cover_letters_digits_fkeys_and_named() {
        assert!(is_known_key("a"));
        assert!(is_known_key("7"));
        assert!(is_known_key(";"));
        assert!(is_known_key("f12"));
        assert!(is_known_key("escape"));
        assert!(!is_known_key("f13"));
        assert!(!is_known_key("widget"));
    }
}

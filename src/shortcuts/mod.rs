//! Focus-aware keyboard shortcut bindings.
//!
//! This module provides:
//! - `Shortcut` / `Modifiers` - parsed key combinations
//! - `Bindings` - a registry that dispatches key events to handlers
//! - `ShortcutOverrides` - user remaps persisted as JSON
//!
//! The rule that makes the registry useful in a client full of text
//! inputs: while a plain text field has focus, a binding only fires if
//! its combination carries a command-level modifier (cmd, ctrl, or
//! alt). Shift alone does not count, since shifted keys still type
//! characters.
//!
//! # Example
//!
//! ```ignore
//! use commit_kit::shortcuts::{Bindings, FocusTarget};
//!
//! let mut bindings = Bindings::new();
//! bindings.bind("cmd+k", |_| open_search_palette())?;
//! // Later, from the host UI's key handler:
//! let consumed = bindings.dispatch(&event, FocusTarget::Other);
//! ```

mod binding;
mod persistence;
mod types;

pub use binding::{BindingId, Bindings, FocusTarget, KeyEvent};
pub use persistence::{default_overrides_path, PersistenceError, ShortcutOverrides};
pub use types::{
    canonicalize_key, is_known_key, Modifiers, Platform, Shortcut, ShortcutParseError,
};

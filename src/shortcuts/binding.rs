//! The binding registry and its focus-aware dispatch.

use std::fmt;

use tracing::debug;

use super::types::{canonicalize_key, Modifiers, Shortcut, ShortcutParseError};

/// A key press as observed by the host UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name as reported by the toolkit; canonicalized on match.
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Whether this event is the given combination.
    pub fn matches(&self, shortcut: &Shortcut) -> bool {
        canonicalize_key(&self.key) == shortcut.key && self.modifiers == shortcut.modifiers
    }
}

/// Where keyboard focus was when the event arrived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// A plain text input or textarea is focused.
    TextInput,
    #[default]
    Other,
}

pub type BindingId = u32;

type Handler = Box<dyn FnMut(&KeyEvent)>;

struct Binding {
    id: BindingId,
    shortcut: Shortcut,
    handler: Handler,
}

/// Registry of focus-aware key bindings.
///
/// Bindings fire in registration order. While a text input has focus,
/// only combinations whose modifiers bypass text input fire; everything
/// else is suppressed so typing is never hijacked.
#[derive(Default)]
pub struct Bindings {
    bindings: Vec<Binding>,
    next_id: BindingId,
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a combination string to a handler.
    pub fn bind(
        &mut self,
        combo: &str,
        handler: impl FnMut(&KeyEvent) + 'static,
    ) -> Result<BindingId, ShortcutParseError> {
        let shortcut = Shortcut::parse(combo)?;
        Ok(self.bind_shortcut(shortcut, handler))
    }

    /// Bind an already-parsed shortcut to a handler.
    pub fn bind_shortcut(
        &mut self,
        shortcut: Shortcut,
        handler: impl FnMut(&KeyEvent) + 'static,
    ) -> BindingId {
        let id = self.next_id;
        self.next_id += 1;
        debug!(
            binding_id = id,
            shortcut = %shortcut.to_canonical_string(),
            "registered binding"
        );
        self.bindings.push(Binding {
            id,
            shortcut,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a binding; unknown ids are a no-op.
    pub fn unbind(&mut self, id: BindingId) {
        self.bindings.retain(|binding| binding.id != id);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Dispatch a key event to every matching binding.
    ///
    /// Returns whether any handler fired, in which case the host
    /// should consume the event instead of letting it fall through.
    pub fn dispatch(&mut self, event: &KeyEvent, focus: FocusTarget) -> bool {
        let mut fired = false;
        for binding in &mut self.bindings {
            if !event.matches(&binding.shortcut) {
                continue;
            }
            if focus == FocusTarget::TextInput && !binding.shortcut.modifiers.bypasses_text_input()
            {
                debug!(
                    binding_id = binding.id,
                    shortcut = %binding.shortcut.to_canonical_string(),
                    "binding suppressed while text input focused"
                );
                continue;
            }
            (binding.handler)(event);
            fired = true;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&KeyEvent)) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move |_: &KeyEvent| inner.set(inner.get() + 1))
    }

    #[test]
    fn plain_key_fires_outside_text_input() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        bindings.bind("enter", handler).unwrap();

        let event = KeyEvent::new("Enter", Modifiers::default());
        assert!(bindings.dispatch(&event, FocusTarget::Other));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn plain_key_is_suppressed_in_text_input() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        bindings.bind("enter", handler).unwrap();

        let event = KeyEvent::new("Enter", Modifiers::default());
        assert!(!bindings.dispatch(&event, FocusTarget::TextInput));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn command_combo_fires_in_text_input() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        bindings.bind("cmd+enter", handler).unwrap();

        let event = KeyEvent::new("Enter", Modifiers::cmd());
        assert!(bindings.dispatch(&event, FocusTarget::TextInput));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn shift_combo_is_still_suppressed_in_text_input() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        bindings.bind("shift+enter", handler).unwrap();

        let event = KeyEvent::new("Enter", Modifiers::shift());
        assert!(!bindings.dispatch(&event, FocusTarget::TextInput));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        bindings.bind("k", handler).unwrap();

        // cmd+k is not k
        let event = KeyEvent::new("k", Modifiers::cmd());
        assert!(!bindings.dispatch(&event, FocusTarget::Other));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn all_matching_bindings_fire_in_registration_order() {
        let mut bindings = Bindings::new();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        bindings
            .bind("cmd+k", move |_| first.borrow_mut().push("first"))
            .unwrap();
        let second = Rc::clone(&order);
        bindings
            .bind("cmd+k", move |_| second.borrow_mut().push("second"))
            .unwrap();

        let event = KeyEvent::new("k", Modifiers::cmd());
        assert!(bindings.dispatch(&event, FocusTarget::Other));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unbind_stops_dispatch() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        let id = bindings.bind("cmd+k", handler).unwrap();
        assert_eq!(bindings.len(), 1);

        bindings.unbind(id);
        assert!(bindings.is_empty());

        let event = KeyEvent::new("k", Modifiers::cmd());
        assert!(!bindings.dispatch(&event, FocusTarget::Other));
        assert_eq!(count.get(), 0);

        // Unbinding again is a no-op
        bindings.unbind(id);
    }

    #[test]
    fn event_key_is_canonicalized_on_match() {
        let mut bindings = Bindings::new();
        let (count, handler) = counter();
        bindings.bind("cmd+up", handler).unwrap();

        let event = KeyEvent::new("ArrowUp", Modifiers::cmd());
        assert!(bindings.dispatch(&event, FocusTarget::Other));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn bad_combo_is_a_typed_error() {
        let mut bindings = Bindings::new();
        let result = bindings.bind("cmd+widget", |_| {});
        assert_eq!(
            result,
            Err(ShortcutParseError::UnknownKey("widget".to_string()))
        );
    }
}

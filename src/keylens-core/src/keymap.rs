//! A named keymap: an insertion-ordered mapping from action ids to their
//! assigned shortcuts.

use indexmap::IndexMap;

use crate::keystroke::Shortcut;

/// A named shortcut configuration, immutable for the duration of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
    name: String,
    parent: Option<String>,
    bindings: IndexMap<String, Vec<Shortcut>>,
}

impl Keymap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            bindings: IndexMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Registers an action with its shortcuts. An action may be registered
    /// with an empty shortcut list; it then counts as unbound.
    pub fn bind(&mut self, action_id: impl Into<String>, shortcuts: Vec<Shortcut>) {
        self.bindings
            .entry(action_id.into())
            .or_default()
            .extend(shortcuts);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Action ids in registration order.
    pub fn action_ids(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn shortcuts(&self, action_id: &str) -> &[Shortcut] {
        self.bindings
            .get(action_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

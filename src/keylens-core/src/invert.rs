//! Shortcut inversion: turn a keymap's action -> shortcuts mapping into two
//! keystroke-keyed indexes.
//!
//! The first index answers "which actions start with this keystroke"; the
//! second answers "which (first keystroke, action) chords finish on this
//! keystroke". Registration preserves keymap order; presentation sorting is
//! applied by the grid builder.

use std::collections::HashMap;

use crate::keymap::Keymap;
use crate::keystroke::Keystroke;

/// Both inverted indexes over one keymap snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutIndex {
    first: HashMap<Keystroke, Vec<String>>,
    second: HashMap<Keystroke, Vec<(Keystroke, String)>>,
}

impl ShortcutIndex {
    /// Walks every keyboard shortcut of every action. An action with several
    /// shortcuts registers once per shortcut; mouse shortcuts are skipped.
    pub fn build(keymap: &Keymap) -> Self {
        let mut index = Self::default();
        for action_id in keymap.action_ids() {
            for shortcut in keymap.shortcuts(action_id) {
                let Some(keyboard) = shortcut.keyboard() else {
                    continue;
                };
                index
                    .first
                    .entry(keyboard.first.clone())
                    .or_default()
                    .push(action_id.to_string());
                if let Some(second) = &keyboard.second {
                    index
                        .second
                        .entry(second.clone())
                        .or_default()
                        .push((keyboard.first.clone(), action_id.to_string()));
                }
            }
        }
        index
    }

    /// Action ids whose shortcuts start with `keystroke`, in registration order.
    pub fn first_actions(&self, keystroke: &Keystroke) -> Option<&[String]> {
        self.first.get(keystroke).map(Vec::as_slice)
    }

    /// (first keystroke, action id) chords finishing on `keystroke`.
    pub fn second_entries(&self, keystroke: &Keystroke) -> Option<&[(Keystroke, String)]> {
        self.second.get(keystroke).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystroke::Shortcut;

    fn sample_keymap() -> Keymap {
        let mut keymap = Keymap::new("Default");
        keymap.bind("EditorCopy", vec!["ctrl C".parse::<Shortcut>().unwrap()]);
        keymap.bind(
            "GotoDeclaration",
            vec!["ctrl B, ctrl B".parse::<Shortcut>().unwrap()],
        );
        keymap.bind(
            "ToggleBookmark",
            vec![
                "ctrl F11".parse::<Shortcut>().unwrap(),
                "mouse button2".parse::<Shortcut>().unwrap(),
            ],
        );
        keymap.bind("Unbound", vec![]);
        keymap
    }

    #[test]
    fn test_first_index_registers_each_keyboard_shortcut() {
        let index = ShortcutIndex::build(&sample_keymap());
        let copy = index
            .first_actions(&"ctrl C".parse().unwrap())
            .expect("ctrl C registered");
        assert_eq!(copy, ["EditorCopy"]);

        let bookmark = index
            .first_actions(&"ctrl F11".parse().unwrap())
            .expect("ctrl F11 registered");
        assert_eq!(bookmark, ["ToggleBookmark"]);
    }

    #[test]
    fn test_second_index_only_contains_chords() {
        let index = ShortcutIndex::build(&sample_keymap());
        let chords = index
            .second_entries(&"ctrl B".parse().unwrap())
            .expect("chord registered");
        assert_eq!(chords.len(), 1);
        assert_eq!(chords[0].0, "ctrl B".parse().unwrap());
        assert_eq!(chords[0].1, "GotoDeclaration");

        assert!(index.second_entries(&"ctrl C".parse().unwrap()).is_none());
    }

    #[test]
    fn test_chord_first_stroke_also_in_first_index() {
        let index = ShortcutIndex::build(&sample_keymap());
        let first = index.first_actions(&"ctrl B".parse().unwrap()).unwrap();
        assert_eq!(first, ["GotoDeclaration"]);
    }

    #[test]
    fn test_mouse_shortcuts_are_skipped() {
        let mut keymap = Keymap::new("Default");
        keymap.bind("Peek", vec!["mouse button1 x2".parse::<Shortcut>().unwrap()]);
        let index = ShortcutIndex::build(&keymap);
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_keymap_yields_empty_indexes() {
        let index = ShortcutIndex::build(&Keymap::new("Empty"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_shared_keystroke_keeps_registration_order() {
        let mut keymap = Keymap::new("Default");
        keymap.bind("Zebra", vec!["alt Z".parse::<Shortcut>().unwrap()]);
        keymap.bind("Aardvark", vec!["alt Z".parse::<Shortcut>().unwrap()]);
        let index = ShortcutIndex::build(&keymap);
        let actions = index.first_actions(&"alt Z".parse().unwrap()).unwrap();
        assert_eq!(actions, ["Zebra", "Aardvark"]);
    }
}

//! Key and modifier-combination catalogs.
//!
//! Both catalogs are computed once when a [`CatalogProvider`] is constructed
//! and never mutated afterwards; builders receive the provider by reference
//! instead of reaching for globals.

use crate::host::PlatformFamily;
use crate::keystroke::{KeyName, ModifierCombo};

/// Physical keys the tool recognizes, by symbolic name.
///
/// The set is fixed; [`CatalogProvider::new`] sorts it lexicographically.
const KEY_NAMES: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", //
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", //
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", //
    "ENTER", "ESCAPE", "TAB", "SPACE", "BACK_SPACE", "DELETE", "INSERT", //
    "HOME", "END", "PAGE_UP", "PAGE_DOWN", "UP", "DOWN", "LEFT", "RIGHT", //
    "MINUS", "EQUALS", "OPEN_BRACKET", "CLOSE_BRACKET", "BACK_SLASH", "SEMICOLON", "QUOTE",
    "COMMA", "PERIOD", "SLASH", "BACK_QUOTE", //
    "CAPS_LOCK", "NUM_LOCK", "SCROLL_LOCK", "PRINTSCREEN", "PAUSE", "CONTEXT_MENU", //
    "NUMPAD0", "NUMPAD1", "NUMPAD2", "NUMPAD3", "NUMPAD4", "NUMPAD5", "NUMPAD6", "NUMPAD7",
    "NUMPAD8", "NUMPAD9", "ADD", "SUBTRACT", "MULTIPLY", "DIVIDE", "DECIMAL", "SEPARATOR",
];

const fn mc(shift: bool, ctrl: bool, meta: bool, alt: bool) -> ModifierCombo {
    ModifierCombo::new(shift, ctrl, meta, alt)
}

/// Modifier combinations on the 4-modifier (macOS family) platform:
/// singles, pairs, triples, the quad, then the empty combo last.
const EXTENDED_COMBOS: &[ModifierCombo] = &[
    mc(true, false, false, false),
    mc(false, true, false, false),
    mc(false, false, true, false),
    mc(false, false, false, true),
    mc(true, true, false, false),
    mc(true, false, true, false),
    mc(true, false, false, true),
    mc(false, true, true, false),
    mc(false, true, false, true),
    mc(false, false, true, true),
    mc(true, true, true, false),
    mc(true, true, false, true),
    mc(true, false, true, true),
    mc(false, true, true, true),
    mc(true, true, true, true),
    ModifierCombo::NONE,
];

/// Modifier combinations on the 3-modifier platform (no meta key).
const STANDARD_COMBOS: &[ModifierCombo] = &[
    mc(true, false, false, false),
    mc(false, true, false, false),
    mc(false, false, false, true),
    mc(true, true, false, false),
    mc(true, false, false, true),
    mc(false, true, false, true),
    mc(true, true, false, true),
    ModifierCombo::NONE,
];

/// The immutable key and modifier-combination catalogs, constructed once at
/// startup and shared by every builder.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    family: PlatformFamily,
    keys: Vec<KeyName>,
    combos: Vec<ModifierCombo>,
}

impl CatalogProvider {
    pub fn new(family: PlatformFamily) -> Self {
        let mut keys: Vec<KeyName> = KEY_NAMES.iter().map(|name| KeyName::new(name)).collect();
        keys.sort();
        let combos = match family {
            PlatformFamily::Extended => EXTENDED_COMBOS,
            PlatformFamily::Standard => STANDARD_COMBOS,
        };
        Self {
            family,
            keys,
            combos: combos.to_vec(),
        }
    }

    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    /// All recognized keys, sorted lexicographically.
    pub fn keys(&self) -> &[KeyName] {
        &self.keys
    }

    /// All modifier combinations, in declared order; the empty combo is last.
    pub fn modifier_combos(&self) -> &[ModifierCombo] {
        &self.combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_counts_per_family() {
        let extended = CatalogProvider::new(PlatformFamily::Extended);
        assert_eq!(extended.modifier_combos().len(), 16);

        let standard = CatalogProvider::new(PlatformFamily::Standard);
        assert_eq!(standard.modifier_combos().len(), 8);
    }

    #[test]
    fn test_empty_combo_is_last() {
        for family in [PlatformFamily::Extended, PlatformFamily::Standard] {
            let provider = CatalogProvider::new(family);
            let combos = provider.modifier_combos();
            assert!(combos.last().unwrap().is_empty());
            assert!(combos[..combos.len() - 1].iter().all(|c| !c.is_empty()));
        }
    }

    #[test]
    fn test_standard_family_never_uses_meta() {
        let standard = CatalogProvider::new(PlatformFamily::Standard);
        assert!(standard.modifier_combos().iter().all(|c| !c.meta));
    }

    #[test]
    fn test_combo_order_matches_declaration() {
        let standard = CatalogProvider::new(PlatformFamily::Standard);
        let labels: Vec<String> = standard
            .modifier_combos()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            vec![
                "shift",
                "ctrl",
                "alt",
                "shift ctrl",
                "shift alt",
                "ctrl alt",
                "shift ctrl alt",
                "",
            ]
        );
    }

    #[test]
    fn test_keys_sorted_and_unique() {
        let provider = CatalogProvider::new(PlatformFamily::Standard);
        let keys = provider.keys();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(keys.iter().any(|k| k.as_str() == "ENTER"));
    }
}

//! Action ledger: every action by display name, partitioned into bound
//! (with rendered shortcut texts) and unbound.

use std::collections::{BTreeMap, BTreeSet};

use crate::grid::display_name;
use crate::host::ActionCatalog;
use crate::keymap::Keymap;

/// One bound action: display name plus its shortcut texts, sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub name: String,
    pub shortcuts: Vec<String>,
}

/// The full ledger for one keymap snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLedger {
    /// Actions with at least one keyboard shortcut, ascending by name.
    pub bound: Vec<LedgerEntry>,
    /// Actions without a keyboard shortcut, ascending by name.
    pub unbound: Vec<String>,
}

impl ActionLedger {
    /// Builds the ledger. Two action ids resolving to the same display name
    /// merge their shortcut lists; a name bound through any id never appears
    /// in the unbound set.
    pub fn build(keymap: &Keymap, names: &dyn ActionCatalog) -> Self {
        let mut bound: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut unbound: BTreeSet<String> = BTreeSet::new();

        for action_id in keymap.action_ids() {
            let name = display_name(names, action_id);
            let texts: Vec<String> = keymap
                .shortcuts(action_id)
                .iter()
                .filter_map(|shortcut| shortcut.keyboard())
                .map(ToString::to_string)
                .collect();
            if texts.is_empty() {
                unbound.insert(name);
            } else {
                bound.entry(name).or_default().extend(texts);
            }
        }

        unbound.retain(|name| !bound.contains_key(name));

        Self {
            bound: bound
                .into_iter()
                .map(|(name, shortcuts)| LedgerEntry {
                    name,
                    shortcuts: shortcuts.into_iter().collect(),
                })
                .collect(),
            unbound: unbound.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty() && self.unbound.is_empty()
    }
}

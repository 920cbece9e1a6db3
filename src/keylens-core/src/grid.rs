//! Key x modifier grid construction.
//!
//! Walks the key catalog x combo catalog cross product against the inverted
//! indexes and produces display-ready rows: one first-stroke row per key
//! (always), plus one second-stroke row per key when at least one chord
//! finishes on it.

use crate::catalog::CatalogProvider;
use crate::host::ActionCatalog;
use crate::invert::ShortcutIndex;
use crate::keystroke::{KeyName, Keystroke};

/// Which keystroke of a shortcut a grid row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeSlot {
    First,
    Second,
}

/// One grid cell: zero or more rendered `[keystroke] -> action` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCell {
    pub lines: Vec<String>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One row of the grid: a key, the slot it describes, and one cell per
/// modifier combo in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub key: KeyName,
    pub slot: StrokeSlot,
    pub cells: Vec<GridCell>,
    /// Stacked entries in the tallest cell; renderers size row height from it.
    pub line_count: usize,
}

impl GridRow {
    /// Value of the "key in first keystroke" column.
    pub fn first_column(&self) -> &str {
        match self.slot {
            StrokeSlot::First => self.key.as_str(),
            StrokeSlot::Second => "",
        }
    }

    /// Value of the "key in second keystroke" column.
    pub fn second_column(&self) -> &str {
        match self.slot {
            StrokeSlot::First => "",
            StrokeSlot::Second => self.key.as_str(),
        }
    }
}

/// Resolved display name, falling back to the raw id.
pub(crate) fn display_name(names: &dyn ActionCatalog, action_id: &str) -> String {
    names
        .resolve_name(action_id)
        .unwrap_or_else(|| action_id.to_string())
}

/// Builds the full grid for one keymap snapshot.
pub fn build_grid(
    catalogs: &CatalogProvider,
    index: &ShortcutIndex,
    names: &dyn ActionCatalog,
) -> Vec<GridRow> {
    let combos = catalogs.modifier_combos();
    let mut rows = Vec::new();

    for key in catalogs.keys() {
        let mut first_cells = Vec::with_capacity(combos.len());
        let mut second_cells = Vec::with_capacity(combos.len());
        let mut any_second = false;

        for combo in combos {
            let keystroke = Keystroke::new(*combo, key.clone());

            let mut first = GridCell::default();
            if let Some(action_ids) = index.first_actions(&keystroke) {
                let mut action_ids = action_ids.to_vec();
                action_ids.sort();
                first.lines = action_ids
                    .iter()
                    .map(|id| format!("[{keystroke}] -> {}", display_name(names, id)))
                    .collect();
            }
            first_cells.push(first);

            let mut second = GridCell::default();
            if let Some(entries) = index.second_entries(&keystroke) {
                any_second = true;
                let mut entries = entries.to_vec();
                entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));
                second.lines = entries
                    .iter()
                    .map(|(start, id)| {
                        format!("[{start}] [{keystroke}] -> {}", display_name(names, id))
                    })
                    .collect();
            }
            second_cells.push(second);
        }

        rows.push(GridRow {
            key: key.clone(),
            slot: StrokeSlot::First,
            line_count: row_line_count(&first_cells),
            cells: first_cells,
        });

        // A second-stroke row exists only when some chord finishes on this key.
        if any_second {
            rows.push(GridRow {
                key: key.clone(),
                slot: StrokeSlot::Second,
                line_count: row_line_count(&second_cells),
                cells: second_cells,
            });
        }
    }

    rows
}

fn row_line_count(cells: &[GridCell]) -> usize {
    cells.iter().map(|cell| cell.lines.len()).max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PlatformFamily;
    use crate::keymap::Keymap;
    use crate::keystroke::Shortcut;
    use std::collections::HashMap;

    struct Names(HashMap<&'static str, &'static str>);

    impl ActionCatalog for Names {
        fn resolve_name(&self, action_id: &str) -> Option<String> {
            self.0.get(action_id).map(ToString::to_string)
        }
    }

    fn fixtures() -> (CatalogProvider, ShortcutIndex, Names) {
        let mut keymap = Keymap::new("Default");
        keymap.bind("EditorCopy", vec!["ctrl C".parse::<Shortcut>().unwrap()]);
        keymap.bind(
            "GotoDeclaration",
            vec!["ctrl B, ctrl B".parse::<Shortcut>().unwrap()],
        );
        keymap.bind("AltCopy", vec!["ctrl C".parse::<Shortcut>().unwrap()]);
        let names = Names(HashMap::from([
            ("EditorCopy", "Copy"),
            ("GotoDeclaration", "Go to Declaration"),
        ]));
        (
            CatalogProvider::new(PlatformFamily::Standard),
            ShortcutIndex::build(&keymap),
            names,
        )
    }

    fn row<'a>(rows: &'a [GridRow], key: &str, slot: StrokeSlot) -> Option<&'a GridRow> {
        rows.iter()
            .find(|r| r.key.as_str() == key && r.slot == slot)
    }

    #[test]
    fn test_every_key_emits_a_first_stroke_row() {
        let (catalogs, index, names) = fixtures();
        let rows = build_grid(&catalogs, &index, &names);
        let first_rows = rows
            .iter()
            .filter(|r| r.slot == StrokeSlot::First)
            .count();
        assert_eq!(first_rows, catalogs.keys().len());
    }

    #[test]
    fn test_cell_content_and_fallback_name() {
        let (catalogs, index, names) = fixtures();
        let rows = build_grid(&catalogs, &index, &names);
        let c_row = row(&rows, "C", StrokeSlot::First).unwrap();
        let ctrl_idx = catalogs
            .modifier_combos()
            .iter()
            .position(|combo| combo.to_string() == "ctrl")
            .unwrap();
        // Sorted by action id: AltCopy (unresolved, renders its id) first.
        assert_eq!(
            c_row.cells[ctrl_idx].lines,
            vec!["[ctrl C] -> AltCopy", "[ctrl C] -> Copy"]
        );
        assert_eq!(c_row.line_count, 2);
    }

    #[test]
    fn test_second_stroke_row_only_when_chord_present() {
        let (catalogs, index, names) = fixtures();
        let rows = build_grid(&catalogs, &index, &names);

        let b_second = row(&rows, "B", StrokeSlot::Second).expect("chord row for B");
        let ctrl_idx = catalogs
            .modifier_combos()
            .iter()
            .position(|combo| combo.to_string() == "ctrl")
            .unwrap();
        assert_eq!(
            b_second.cells[ctrl_idx].lines,
            vec!["[ctrl B] [ctrl B] -> Go to Declaration"]
        );

        assert!(row(&rows, "C", StrokeSlot::Second).is_none());
    }

    #[test]
    fn test_key_column_values_follow_slot() {
        let (catalogs, index, names) = fixtures();
        let rows = build_grid(&catalogs, &index, &names);
        let b_first = row(&rows, "B", StrokeSlot::First).unwrap();
        assert_eq!((b_first.first_column(), b_first.second_column()), ("B", ""));
        let b_second = row(&rows, "B", StrokeSlot::Second).unwrap();
        assert_eq!((b_second.first_column(), b_second.second_column()), ("", "B"));
    }

    #[test]
    fn test_empty_rows_have_line_count_one() {
        let (catalogs, index, names) = fixtures();
        let rows = build_grid(&catalogs, &index, &names);
        let q_row = row(&rows, "Q", StrokeSlot::First).unwrap();
        assert!(q_row.cells.iter().all(GridCell::is_empty));
        assert_eq!(q_row.line_count, 1);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let (catalogs, index, names) = fixtures();
        let once = build_grid(&catalogs, &index, &names);
        let twice = build_grid(&catalogs, &index, &names);
        assert_eq!(once, twice);
    }
}

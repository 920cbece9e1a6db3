//! Case-insensitive substring filtering over already-built rows.
//!
//! Filtering is a pure view-layer pass: it selects indices into the built
//! data and never mutates or rebuilds it, so clearing a filter restores the
//! exact pre-filter row set.

use crate::grid::GridRow;
use crate::ledger::LedgerEntry;

/// True when `haystack` contains `needle`, ignoring case. An empty needle
/// matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Matches against every column of the row: both key columns and every cell
/// line, including columns a renderer may have scrolled out of view.
pub fn grid_row_matches(row: &GridRow, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    contains_ci(row.key.as_str(), &needle)
        || row
            .cells
            .iter()
            .any(|cell| cell.lines.iter().any(|line| contains_ci(line, &needle)))
}

pub fn ledger_entry_matches(entry: &LedgerEntry, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    contains_ci(&entry.name, &needle)
        || entry
            .shortcuts
            .iter()
            .any(|shortcut| contains_ci(shortcut, &needle))
}

/// Indices of grid rows matching `filter`.
pub fn filter_grid(rows: &[GridRow], filter: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| grid_row_matches(row, filter))
        .map(|(idx, _)| idx)
        .collect()
}

/// Indices of bound ledger entries matching `filter`.
pub fn filter_ledger(entries: &[LedgerEntry], filter: &str) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| ledger_entry_matches(entry, filter))
        .map(|(idx, _)| idx)
        .collect()
}

/// Indices of unbound names matching `filter`.
pub fn filter_names(names: &[String], filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| contains_ci(name, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridCell, StrokeSlot};
    use crate::keystroke::KeyName;

    fn sample_rows() -> Vec<GridRow> {
        vec![
            GridRow {
                key: KeyName::new("C"),
                slot: StrokeSlot::First,
                cells: vec![GridCell {
                    lines: vec!["[ctrl C] -> Copy".to_string()],
                }],
                line_count: 1,
            },
            GridRow {
                key: KeyName::new("V"),
                slot: StrokeSlot::First,
                cells: vec![GridCell {
                    lines: vec!["[ctrl V] -> Paste".to_string()],
                }],
                line_count: 1,
            },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = sample_rows();
        assert_eq!(filter_grid(&rows, "copy"), vec![0]);
        assert_eq!(filter_grid(&rows, "COPY"), vec![0]);
    }

    #[test]
    fn test_filter_matches_cell_content_not_just_keys() {
        let rows = sample_rows();
        assert_eq!(filter_grid(&rows, "paste"), vec![1]);
    }

    #[test]
    fn test_clearing_filter_restores_all_rows() {
        let rows = sample_rows();
        let filtered = filter_grid(&rows, "copy");
        assert_eq!(filtered.len(), 1);
        let cleared = filter_grid(&rows, "");
        assert_eq!(cleared, vec![0, 1]);
    }

    #[test]
    fn test_ledger_filter_matches_name_and_shortcut() {
        let entries = vec![
            LedgerEntry {
                name: "Copy".to_string(),
                shortcuts: vec!["ctrl C".to_string()],
            },
            LedgerEntry {
                name: "Find Usages".to_string(),
                shortcuts: vec!["alt F7".to_string()],
            },
        ];
        assert_eq!(filter_ledger(&entries, "usages"), vec![1]);
        assert_eq!(filter_ledger(&entries, "ctrl c"), vec![0]);
        assert_eq!(filter_ledger(&entries, ""), vec![0, 1]);
    }
}

//! Two-keymap comparison.
//!
//! Each keymap is rendered into a ledger-like text block (one line per
//! action, sorted by name then id; unbound actions keep an empty right-hand
//! side), and the two blocks are paired for side-by-side display with
//! changed-line marks.

use similar::{ChangeTag, TextDiff};

use crate::grid::display_name;
use crate::host::{ActionCatalog, KeymapStore};
use crate::keymap::Keymap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// Both selections name the same keymap; nothing to compare.
    #[error("both selections name the keymap {0:?}")]
    SameKeymap(String),
    /// A selected keymap name no longer resolves.
    #[error("keymap {0:?} not found")]
    KeymapNotFound(String),
}

/// One side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffColumn {
    pub title: String,
    pub lines: Vec<String>,
    /// Per-line: true when the line has no identical counterpart on the
    /// other side.
    pub changed: Vec<bool>,
}

/// Both comparison columns, ready for side-by-side rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapDiff {
    pub left: DiffColumn,
    pub right: DiffColumn,
}

impl KeymapDiff {
    /// True when both blocks are line-for-line identical.
    pub fn is_unchanged(&self) -> bool {
        self.left.lines == self.right.lines
    }
}

/// One line per action: `name\t(id) = shortcut1 | shortcut2 | ...`, sorted
/// by the (name, id) key. Unbound actions render an empty right-hand side.
pub fn comparison_lines(keymap: &Keymap, names: &dyn ActionCatalog) -> Vec<String> {
    let mut entries: Vec<(String, String, Vec<String>)> = keymap
        .action_ids()
        .map(|action_id| {
            let name = display_name(names, action_id);
            let texts: Vec<String> = keymap
                .shortcuts(action_id)
                .iter()
                .filter_map(|shortcut| shortcut.keyboard())
                .map(ToString::to_string)
                .collect();
            (name, action_id.to_string(), texts)
        })
        .collect();
    entries.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    entries
        .into_iter()
        .map(|(name, id, texts)| format!("{name}\t({id}) = {}", texts.join(" | ")))
        .collect()
}

/// Builds the comparison for two keymap names from the store.
///
/// Guard conditions are reported before any block is built: the same name on
/// both sides is informational ([`DiffError::SameKeymap`]), an unresolvable
/// name is an error ([`DiffError::KeymapNotFound`]); neither produces a diff.
pub fn build_diff(
    store: &dyn KeymapStore,
    names: &dyn ActionCatalog,
    left_name: &str,
    right_name: &str,
) -> Result<KeymapDiff, DiffError> {
    if left_name == right_name {
        return Err(DiffError::SameKeymap(left_name.to_string()));
    }
    let left_keymap = store
        .keymap(left_name)
        .ok_or_else(|| DiffError::KeymapNotFound(left_name.to_string()))?;
    let right_keymap = store
        .keymap(right_name)
        .ok_or_else(|| DiffError::KeymapNotFound(right_name.to_string()))?;

    let left_lines = comparison_lines(left_keymap, names);
    let right_lines = comparison_lines(right_keymap, names);
    let (left_changed, right_changed) = changed_marks(&left_lines, &right_lines);

    Ok(KeymapDiff {
        left: DiffColumn {
            title: left_name.to_string(),
            lines: left_lines,
            changed: left_changed,
        },
        right: DiffColumn {
            title: right_name.to_string(),
            lines: right_lines,
            changed: right_changed,
        },
    })
}

fn changed_marks(left: &[String], right: &[String]) -> (Vec<bool>, Vec<bool>) {
    let left_text = left.join("\n");
    let right_text = right.join("\n");
    let diff = TextDiff::from_lines(&left_text, &right_text);

    let mut left_changed = vec![false; left.len()];
    let mut right_changed = vec![false; right.len()];
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                if let Some(idx) = change.old_index() {
                    if idx < left_changed.len() {
                        left_changed[idx] = true;
                    }
                }
            }
            ChangeTag::Insert => {
                if let Some(idx) = change.new_index() {
                    if idx < right_changed.len() {
                        right_changed[idx] = true;
                    }
                }
            }
            ChangeTag::Equal => {}
        }
    }
    (left_changed, right_changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystroke::Shortcut;
    use crate::store::FileKeymapStore;

    const DOC: &str = r#"
active = "Default"

[[keymap]]
name = "Default"

[keymap.actions.EditorCopy]
name = "Copy"
shortcuts = ["ctrl C"]

[keymap.actions.Reformat]
name = "Reformat Code"

[[keymap]]
name = "Visual Studio"

[keymap.actions.EditorCopy]
name = "Copy"
shortcuts = ["ctrl INSERT"]

[keymap.actions.Reformat]
name = "Reformat Code"
"#;

    fn store() -> FileKeymapStore {
        FileKeymapStore::parse(DOC).unwrap()
    }

    #[test]
    fn test_comparison_line_format() {
        let store = store();
        let keymap = store.keymap("Default").unwrap();
        let lines = comparison_lines(keymap, &store);
        assert_eq!(
            lines,
            vec![
                "Copy\t(EditorCopy) = ctrl C",
                "Reformat Code\t(Reformat) = ",
            ]
        );
    }

    #[test]
    fn test_comparison_lines_sorted_by_name_then_id() {
        let mut keymap = crate::keymap::Keymap::new("K");
        keymap.bind("z.second", vec!["F2".parse::<Shortcut>().unwrap()]);
        keymap.bind("a.first", vec!["F1".parse::<Shortcut>().unwrap()]);
        let store = store();
        let lines = comparison_lines(&keymap, &store);
        assert_eq!(lines, vec!["a.first\t(a.first) = F1", "z.second\t(z.second) = F2"]);
    }

    #[test]
    fn test_diff_marks_changed_lines_only() {
        let store = store();
        let diff = build_diff(&store, &store, "Default", "Visual Studio").unwrap();
        assert_eq!(diff.left.title, "Default");
        assert_eq!(diff.right.title, "Visual Studio");
        // Copy differs, Reformat does not.
        assert_eq!(diff.left.changed, vec![true, false]);
        assert_eq!(diff.right.changed, vec![true, false]);
        assert!(!diff.is_unchanged());
    }

    #[test]
    fn test_same_keymap_is_informational_guard() {
        let store = store();
        let err = build_diff(&store, &store, "Default", "Default").unwrap_err();
        assert_eq!(err, DiffError::SameKeymap("Default".to_string()));
    }

    #[test]
    fn test_unknown_keymap_is_an_error_guard() {
        let store = store();
        let err = build_diff(&store, &store, "Default", "Ghost").unwrap_err();
        assert_eq!(err, DiffError::KeymapNotFound("Ghost".to_string()));
    }
}

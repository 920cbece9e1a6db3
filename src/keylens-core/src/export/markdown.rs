//! Markdown rendition of the grid and ledger as pipe tables.

use crate::grid::GridRow;
use crate::keystroke::ModifierCombo;
use crate::ledger::ActionLedger;

/// Wraps every key token in inline code: `"ctrl C"` -> `` "`ctrl` `C`" ``.
fn code_tokens(text: &str) -> String {
    text.split_whitespace()
        .map(|token| format!("`{token}`"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-styles a grid cell line for Markdown: the bracketed keystrokes get
/// code-styled tokens, the action name is left as-is.
fn style_cell_line(line: &str) -> String {
    let Some((strokes, name)) = line.split_once(" -> ") else {
        return line.to_string();
    };
    let styled: Vec<String> = strokes
        .split("] ")
        .map(|segment| segment.trim_matches(['[', ']']))
        .map(|stroke| format!("[{}]", code_tokens(stroke)))
        .collect();
    format!("{} -> {name}", styled.join(" "))
}

/// Renders the complete Markdown document: the key x modifier grid table
/// followed by the action ledger table. Second-stroke rows appear only where
/// the grid emitted them; an empty ledger omits its table.
pub fn render(combos: &[ModifierCombo], rows: &[GridRow], ledger: &ActionLedger) -> String {
    let mut out = String::new();

    out.push_str("# Key x Modifier View\n\n");

    // Header row: key column, then one column per modifier combo.
    out.push_str("|Key");
    for combo in combos {
        out.push('|');
        if combo.is_empty() {
            out.push_str("none");
        } else {
            out.push_str(&format!("**{}**", code_tokens(&combo.to_string())));
        }
    }
    out.push_str("|\n");

    out.push_str("|-");
    for _ in combos {
        out.push_str("|-");
    }
    out.push_str("|\n");

    for row in rows {
        out.push_str(&format!("|**{}**", code_tokens(row.key.as_str())));
        for cell in &row.cells {
            out.push('|');
            let styled: Vec<String> = cell.lines.iter().map(|l| style_cell_line(l)).collect();
            out.push_str(&styled.join("<br/>"));
        }
        out.push_str("|\n");
    }

    if !ledger.bound.is_empty() {
        out.push_str("\n# Action vs Keystrokes View\n\n");
        out.push_str("|Action|Shortcut|\n");
        out.push_str("|-|-|\n");
        for entry in &ledger.bound {
            for shortcut in &entry.shortcuts {
                out.push_str(&format!("|{}|{}|\n", entry.name, code_tokens(shortcut)));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogProvider;
    use crate::grid::build_grid;
    use crate::host::{ActionCatalog, PlatformFamily};
    use crate::invert::ShortcutIndex;
    use crate::keymap::Keymap;
    use crate::keystroke::Shortcut;
    use crate::ledger::ActionLedger;

    struct NoNames;

    impl ActionCatalog for NoNames {
        fn resolve_name(&self, _action_id: &str) -> Option<String> {
            None
        }
    }

    fn render_sample(keymap: &Keymap) -> String {
        let catalogs = CatalogProvider::new(PlatformFamily::Standard);
        let index = ShortcutIndex::build(keymap);
        let rows = build_grid(&catalogs, &index, &NoNames);
        let ledger = ActionLedger::build(keymap, &NoNames);
        render(catalogs.modifier_combos(), &rows, &ledger)
    }

    #[test]
    fn test_document_structure() {
        let mut keymap = Keymap::new("Default");
        keymap.bind("Copy", vec!["ctrl C".parse::<Shortcut>().unwrap()]);
        let doc = render_sample(&keymap);

        assert!(doc.starts_with("# Key x Modifier View\n"));
        assert!(doc.contains("# Action vs Keystrokes View"));
        // Combo header cells plus the trailing "none" for the empty combo.
        assert!(doc.contains("**`shift` `ctrl` `alt`**"));
        assert!(doc.contains("|none|"));
    }

    #[test]
    fn test_cell_and_ledger_styling() {
        let mut keymap = Keymap::new("Default");
        keymap.bind("Copy", vec!["ctrl C".parse::<Shortcut>().unwrap()]);
        let doc = render_sample(&keymap);

        assert!(doc.contains("[`ctrl` `C`] -> Copy"));
        assert!(doc.contains("|Copy|`ctrl` `C`|"));
    }

    #[test]
    fn test_chord_cell_styles_both_strokes() {
        let mut keymap = Keymap::new("Default");
        keymap.bind(
            "GotoDeclaration",
            vec!["ctrl B, ctrl B".parse::<Shortcut>().unwrap()],
        );
        let doc = render_sample(&keymap);
        assert!(doc.contains("[`ctrl` `B`] [`ctrl` `B`] -> GotoDeclaration"));
    }

    #[test]
    fn test_empty_ledger_omits_action_table() {
        let keymap = Keymap::new("Empty");
        let doc = render_sample(&keymap);
        assert!(!doc.contains("# Action vs Keystrokes View"));
    }
}

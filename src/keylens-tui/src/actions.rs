//! Key -> UI action mapping for normal-mode input.
//!
//! Filter and selector input is modal and handled where the mode lives
//! ([`crate::app`]); this table only covers the browsing surface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the user can do from the browsing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Quit the application.
    Quit,
    /// Rebuild grid and ledger from a fresh store snapshot.
    Refresh,
    /// Cycle to the next tab.
    NextTab,
    /// Cycle to the previous tab.
    PrevTab,
    /// Start typing a filter.
    StartFilter,
    /// Clear the filter (and any notice).
    Dismiss,
    /// Scroll up one row.
    ScrollUp,
    /// Scroll down one row.
    ScrollDown,
    /// Scroll up one page.
    PageUp,
    /// Scroll down one page.
    PageDown,
    /// Jump to the top.
    ScrollTop,
    /// Jump to the bottom.
    ScrollBottom,
    /// Pan the grid one modifier column left.
    PanLeft,
    /// Pan the grid one modifier column right.
    PanRight,
    /// Open the keymap selector.
    ChooseKeymap,
    /// Open the comparison-keymap selector.
    ChooseCompare,
    /// Build and show the comparison.
    ShowDiff,
    /// Export the Markdown document.
    ExportMarkdown,
    /// Export the HTML document and hand it to the viewer.
    ExportHtml,
    /// No action (ignore key).
    None,
}

/// Maps a normal-mode key event to its action.
pub fn map_key(key: KeyEvent) -> UiAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => UiAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => UiAction::Quit,
        (KeyCode::Char('r'), KeyModifiers::NONE) => UiAction::Refresh,
        (KeyCode::F(5), KeyModifiers::NONE) => UiAction::Refresh,
        (KeyCode::Tab, KeyModifiers::NONE) => UiAction::NextTab,
        (KeyCode::BackTab, _) => UiAction::PrevTab,
        (KeyCode::Char('/'), KeyModifiers::NONE) => UiAction::StartFilter,
        (KeyCode::Esc, KeyModifiers::NONE) => UiAction::Dismiss,
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            UiAction::ScrollUp
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            UiAction::ScrollDown
        }
        (KeyCode::PageUp, KeyModifiers::NONE) => UiAction::PageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => UiAction::PageDown,
        (KeyCode::Home, KeyModifiers::NONE) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
            UiAction::ScrollTop
        }
        (KeyCode::End, KeyModifiers::NONE) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
            UiAction::ScrollBottom
        }
        (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            UiAction::PanLeft
        }
        (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            UiAction::PanRight
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => UiAction::ChooseKeymap,
        (KeyCode::Char('c'), KeyModifiers::NONE) => UiAction::ChooseCompare,
        (KeyCode::Char('d'), KeyModifiers::NONE) => UiAction::ShowDiff,
        (KeyCode::Char('m'), KeyModifiers::NONE) => UiAction::ExportMarkdown,
        (KeyCode::Char('o'), KeyModifiers::NONE) => UiAction::ExportHtml,
        _ => UiAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_core_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), UiAction::Quit);
        assert_eq!(map_key(key(KeyCode::Char('r'))), UiAction::Refresh);
        assert_eq!(map_key(key(KeyCode::Char('/'))), UiAction::StartFilter);
        assert_eq!(map_key(key(KeyCode::Tab)), UiAction::NextTab);
        assert_eq!(map_key(key(KeyCode::Char('d'))), UiAction::ShowDiff);
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_compares() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            UiAction::Quit
        );
        assert_eq!(map_key(key(KeyCode::Char('c'))), UiAction::ChooseCompare);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), UiAction::None);
    }
}

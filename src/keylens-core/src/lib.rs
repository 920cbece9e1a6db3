//! # Keylens Core
//!
//! Keymap inspection pipeline: load a named keyboard-shortcut configuration,
//! cross-reference it against an action catalog, and build two complementary
//! views of it — a key-by-modifier grid and an action-by-shortcut ledger —
//! plus static Markdown/HTML renditions and a two-keymap comparison.
//!
//! The whole pipeline is a synchronous in-memory transform, rebuilt from
//! scratch on every refresh:
//!
//! ```text
//! KeymapStore ──> Keymap ──> ShortcutIndex ──┬──> Vec<GridRow>  ──┐
//!                                            │                    ├──> exporters
//!                                            └──> ActionLedger ───┘
//! ```
//!
//! Host collaborators (the keymap store, the action catalog, the application
//! banner) are capability traits in [`host`]; [`store::FileKeymapStore`] is
//! the file-backed reference implementation.

pub mod catalog;
pub mod diff;
pub mod export;
pub mod filter;
pub mod grid;
pub mod host;
pub mod invert;
pub mod keymap;
pub mod keystroke;
pub mod ledger;
pub mod store;

pub use catalog::CatalogProvider;
pub use diff::{DiffColumn, DiffError, KeymapDiff, build_diff};
pub use grid::{GridCell, GridRow, StrokeSlot, build_grid};
pub use host::{ActionCatalog, AppBanner, KeymapStore, PlatformFamily};
pub use invert::ShortcutIndex;
pub use keymap::Keymap;
pub use keystroke::{
    KeyName, KeyboardShortcut, Keystroke, ModifierCombo, MouseShortcut, Shortcut,
    ShortcutParseError,
};
pub use ledger::{ActionLedger, LedgerEntry};
pub use store::{FileKeymapStore, StoreError};

//! # Keylens TUI
//!
//! Interactive terminal view over the keymap inspection pipeline:
//! a tabbed panel (keymap grid, bound actions, unbound actions, keymap
//! comparison) with a shared substring filter, keymap selectors, and export
//! commands.
//!
//! The view is strictly a consumer of built data: every refresh replaces the
//! grid and ledger wholesale, and filtering is a pure pass over already-built
//! rows.

pub mod actions;
pub mod app;
pub mod runner;
pub mod views;
pub mod widgets;

pub use app::{App, BuildState, InputMode, Notice, NoticeKind, Tab};
pub use runner::run;

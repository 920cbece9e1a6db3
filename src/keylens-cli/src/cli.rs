//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect keyboard-shortcut configurations: browse them interactively,
/// export them as Markdown or HTML, or compare two of them.
#[derive(Debug, Parser)]
#[command(name = "keylens", version, about)]
pub struct Cli {
    /// Path to the keymap definitions document (TOML).
    #[arg(long, env = "KEYLENS_KEYMAPS", value_name = "PATH")]
    pub keymaps: PathBuf,

    /// Enable debug logging (non-interactive commands only).
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export the keymap grid and action ledger as a document.
    Export {
        /// Output document format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,
        /// Write to this file instead of stdout (Markdown) or a temp file (HTML).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Open the document with the platform viewer after writing.
        #[arg(long)]
        open: bool,
        /// Keymap to export; defaults to the document's active keymap.
        #[arg(long, value_name = "NAME")]
        keymap: Option<String>,
    },
    /// Compare two keymaps side by side.
    Diff {
        /// Keymap on the left side.
        left: String,
        /// Keymap on the right side.
        right: String,
    },
    /// List the keymaps defined in the document.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Html,
}

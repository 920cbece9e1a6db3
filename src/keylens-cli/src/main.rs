//! Keylens CLI - Main entry point.
//!
//! - Interactive keymap browser (default)
//! - `export` - Markdown/HTML documents from the grid and ledger
//! - `diff` - side-by-side comparison of two keymaps
//! - `list` - available keymaps

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use keylens_core::export::{self, html, markdown};
use keylens_core::{
    ActionLedger, CatalogProvider, DiffError, FileKeymapStore, KeymapDiff, KeymapStore,
    PlatformFamily, ShortcutIndex, build_diff, build_grid,
};
use keylens_tui::App;

use crate::cli::{Cli, Commands, ExportFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr for non-interactive commands only; the TUI owns
    // the terminal.
    if cli.command.is_some() {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::EnvFilter::from_default_env()
        } else if cli.verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let store = FileKeymapStore::load(&cli.keymaps)
        .with_context(|| format!("failed to load keymaps from {}", cli.keymaps.display()))?;

    match cli.command {
        None => keylens_tui::run(App::new(store, PlatformFamily::detect())),
        Some(Commands::Export {
            format,
            out,
            open,
            keymap,
        }) => export_cmd(&store, format, out, open, keymap),
        Some(Commands::Diff { left, right }) => diff_cmd(&store, &left, &right),
        Some(Commands::List) => list_cmd(&store),
    }
}

fn export_cmd(
    store: &FileKeymapStore,
    format: ExportFormat,
    out: Option<PathBuf>,
    open: bool,
    keymap: Option<String>,
) -> Result<()> {
    let name = match keymap.or_else(|| {
        store
            .active_keymap()
            .map(|keymap| keymap.name().to_string())
    }) {
        Some(name) => name,
        None => bail!("the document defines no keymaps"),
    };
    let keymap = store
        .keymap(&name)
        .with_context(|| format!("keymap {name:?} not found"))?;

    let catalogs = CatalogProvider::new(PlatformFamily::detect());
    let index = ShortcutIndex::build(keymap);
    let rows = build_grid(&catalogs, &index, store);
    let ledger = ActionLedger::build(keymap, store);

    let (document, suffix) = match format {
        ExportFormat::Markdown => (
            markdown::render(catalogs.modifier_combos(), &rows, &ledger),
            ".md",
        ),
        ExportFormat::Html => (
            html::render(
                &store.banner(),
                chrono::Local::now(),
                catalogs.modifier_combos(),
                &rows,
                &ledger,
            ),
            ".html",
        ),
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
            if open {
                export::open_in_viewer(&path)?;
            }
        }
        None if format == ExportFormat::Markdown && !open => {
            print!("{document}");
        }
        None => {
            let path = export::write_temp_document(&document, "keymap-", suffix)?;
            eprintln!("wrote {}", path.display());
            export::open_in_viewer(&path)?;
        }
    }
    Ok(())
}

fn diff_cmd(store: &FileKeymapStore, left: &str, right: &str) -> Result<()> {
    match build_diff(store, store, left, right) {
        Ok(diff) => {
            print_side_by_side(&diff);
            Ok(())
        }
        Err(err @ DiffError::SameKeymap(_)) => {
            eprintln!("{err}; nothing to compare");
            Ok(())
        }
        Err(err @ DiffError::KeymapNotFound(_)) => Err(err.into()),
    }
}

fn print_side_by_side(diff: &KeymapDiff) {
    let flatten = |line: &str| line.replace('\t', " ");
    let left_width = diff
        .left
        .lines
        .iter()
        .map(|line| flatten(line).len())
        .max()
        .unwrap_or(0)
        .max(diff.left.title.len());

    println!("  {:<left_width$} | {}", diff.left.title, diff.right.title);
    println!("  {:-<left_width$}-+-{:-<width$}", "", "", width = diff.right.title.len());

    let rows = diff.left.lines.len().max(diff.right.lines.len());
    for idx in 0..rows {
        let left_line = diff.left.lines.get(idx).map(|l| flatten(l)).unwrap_or_default();
        let right_line = diff
            .right
            .lines
            .get(idx)
            .map(|l| flatten(l))
            .unwrap_or_default();
        let changed = diff.left.changed.get(idx).copied().unwrap_or(false)
            || diff.right.changed.get(idx).copied().unwrap_or(false);
        let mark = if changed { '*' } else { ' ' };
        println!("{mark} {left_line:<left_width$} | {right_line}");
    }
}

fn list_cmd(store: &FileKeymapStore) -> Result<()> {
    let active = store.active_keymap().map(|keymap| keymap.name().to_string());
    for keymap in store.keymaps() {
        let marker = if active.as_deref() == Some(keymap.name()) {
            "*"
        } else {
            " "
        };
        let parent = keymap
            .parent()
            .map(|parent| format!(" (parent: {parent})"))
            .unwrap_or_default();
        println!("{marker} {}{parent}", keymap.name());
    }
    Ok(())
}

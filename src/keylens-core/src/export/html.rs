//! Standalone styled HTML rendition: banner, ledger table, keymap grid, and
//! (when non-empty) the unbound-actions table.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Local};

use crate::grid::GridRow;
use crate::host::AppBanner;
use crate::keystroke::ModifierCombo;
use crate::ledger::ActionLedger;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 1.5rem; }\n\
.banner { font-size: 2.2rem; font-weight: bold; padding: 0.5rem 0; }\n\
.stamp { font-size: 1.2rem; padding: 0.25rem 0 1rem; }\n\
h2 { font-size: 1.4rem; }\n\
table { border-collapse: collapse; margin-bottom: 1.5rem; }\n\
th, td { border: 1px solid #94a3b8; padding: 0.25rem 0.5rem; text-align: left; white-space: nowrap; }\n\
td.num { text-align: right; }\n\
tr.alt td { background: #f1f5f9; }\n";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn combo_header(combo: &ModifierCombo) -> String {
    if combo.is_empty() {
        "none".to_string()
    } else {
        combo.to_string()
    }
}

/// Renders the self-contained document. `generated_at` is injected so the
/// caller owns the clock.
pub fn render(
    banner: &AppBanner,
    generated_at: DateTime<Local>,
    combos: &[ModifierCombo],
    rows: &[GridRow],
    ledger: &ActionLedger,
) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<title>Keymap and Action Map</title>\n");
    out.push_str(&format!("<style>\n{STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n");

    if let Some(logo) = &banner.logo {
        out.push_str(&format!(
            "<div><img alt=\"logo\" src=\"data:image/png;base64,{}\"></div>\n",
            BASE64.encode(logo)
        ));
    }
    out.push_str(&format!(
        "<div class=\"banner\">{} ( {} )</div>\n",
        escape(&banner.name),
        escape(&banner.version)
    ));
    out.push_str(&format!(
        "<div class=\"stamp\">As of: {}</div>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S %Z")
    ));

    // Actions map.
    if !ledger.bound.is_empty() {
        out.push_str("<h2>Actions Map</h2>\n<table>\n");
        out.push_str("<tr><th>#</th><th>Action</th><th>Shortcut</th></tr>\n");
        let mut line = 0usize;
        for entry in &ledger.bound {
            for shortcut in &entry.shortcuts {
                out.push_str(&format!(
                    "<tr{}><td class=\"num\">{}</td><td>{}</td><td>{}</td></tr>\n",
                    stripe(line),
                    line + 1,
                    escape(&entry.name),
                    escape(shortcut)
                ));
                line += 1;
            }
        }
        out.push_str("</table>\n");
    }

    // Keymap grid.
    out.push_str("<h2>Keymap</h2>\n<table>\n");
    out.push_str("<tr><th>Key in First Keystroke</th><th>Key in Second Keystroke</th>");
    for combo in combos {
        out.push_str(&format!("<th>{}</th>", escape(&combo_header(combo))));
    }
    out.push_str("</tr>\n");
    for (row_idx, row) in rows.iter().enumerate() {
        out.push_str(&format!("<tr{}>", stripe(row_idx)));
        out.push_str(&format!("<td>{}</td>", escape(row.first_column())));
        out.push_str(&format!("<td>{}</td>", escape(row.second_column())));
        for cell in &row.cells {
            let lines: Vec<String> = cell.lines.iter().map(|l| escape(l)).collect();
            out.push_str(&format!("<td>{}</td>", lines.join("<br/>")));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");

    // Unbound actions, only when any exist.
    if !ledger.unbound.is_empty() {
        out.push_str("<h2>Unbound Actions</h2>\n<table>\n");
        out.push_str("<tr><th>#</th><th>Action</th></tr>\n");
        for (idx, name) in ledger.unbound.iter().enumerate() {
            out.push_str(&format!(
                "<tr{}><td class=\"num\">{}</td><td>{}</td></tr>\n",
                stripe(idx),
                idx + 1,
                escape(name)
            ));
        }
        out.push_str("</table>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Alternating row background: even 0-based rows are striped.
fn stripe(index: usize) -> &'static str {
    if index % 2 == 0 { " class=\"alt\"" } else { "" }
}

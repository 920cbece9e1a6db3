//! The key x modifier grid as a ratatui table.
//!
//! The first two columns are the fixed-width key columns; the remaining
//! columns are one per modifier combo, panned horizontally with `combo_offset`
//! when the catalog is wider than the terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Cell, Row, Table};

use keylens_core::{CatalogProvider, GridRow};

const KEY_COLUMN_WIDTH: u16 = 24;
const COMBO_COLUMN_WIDTH: u16 = 34;

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    catalogs: &CatalogProvider,
    rows: &[GridRow],
    visible: &[usize],
    scroll: usize,
    combo_offset: usize,
) {
    let combos = catalogs.modifier_combos();
    let combo_offset = combo_offset.min(combos.len().saturating_sub(1));

    // How many combo columns fit beside the two key columns.
    let remaining = area.width.saturating_sub(2 * KEY_COLUMN_WIDTH);
    let fit = (remaining / COMBO_COLUMN_WIDTH).max(1) as usize;
    let shown = combos.len().saturating_sub(combo_offset).min(fit);

    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let mut header_cells = vec![
        Cell::from("Key in First Keystroke"),
        Cell::from("Key in Second Keystroke"),
    ];
    for combo in combos.iter().skip(combo_offset).take(shown) {
        let label = if combo.is_empty() {
            "none".to_string()
        } else {
            combo.to_string()
        };
        header_cells.push(Cell::from(label));
    }
    let header = Row::new(header_cells).style(header_style).height(1);

    let key_style = Style::default().fg(Color::Cyan);
    let table_rows: Vec<Row> = visible
        .iter()
        .skip(scroll)
        .filter_map(|&idx| rows.get(idx))
        .map(|row| {
            let mut cells = vec![
                Cell::from(row.first_column()).style(key_style),
                Cell::from(row.second_column()).style(key_style),
            ];
            for cell in row.cells.iter().skip(combo_offset).take(shown) {
                cells.push(Cell::from(Text::from(cell.lines.join("\n"))));
            }
            Row::new(cells).height(row.line_count as u16)
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(KEY_COLUMN_WIDTH),
        Constraint::Length(KEY_COLUMN_WIDTH),
    ];
    widths.extend(std::iter::repeat_n(
        Constraint::Length(COMBO_COLUMN_WIDTH),
        shown,
    ));

    let table = Table::new(table_rows, widths)
        .header(header)
        .column_spacing(1);
    frame.render_widget(table, area);
}

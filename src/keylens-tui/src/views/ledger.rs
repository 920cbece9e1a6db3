//! Action ledger views: the bound-actions table and the unbound-actions list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, List, ListItem, Row, Table};

use keylens_core::LedgerEntry;

pub fn draw_bound(
    frame: &mut Frame,
    area: Rect,
    entries: &[LedgerEntry],
    visible: &[usize],
    scroll: usize,
) {
    let header = Row::new(vec![Cell::from("Action"), Cell::from("Shortcut")])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = visible
        .iter()
        .skip(scroll)
        .filter_map(|&idx| entries.get(idx))
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name.clone()),
                Cell::from(entry.shortcuts.join(" | "))
                    .style(Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(60), Constraint::Min(16)],
    )
    .header(header)
    .column_spacing(2);
    frame.render_widget(table, area);
}

pub fn draw_unbound(
    frame: &mut Frame,
    area: Rect,
    names: &[String],
    visible: &[usize],
    scroll: usize,
) {
    let items: Vec<ListItem> = visible
        .iter()
        .skip(scroll)
        .filter_map(|&idx| names.get(idx))
        .map(|name| ListItem::new(name.clone()))
        .collect();
    frame.render_widget(List::new(items), area);
}

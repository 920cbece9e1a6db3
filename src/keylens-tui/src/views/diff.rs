//! Side-by-side keymap comparison view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use keylens_core::{DiffColumn, KeymapDiff};

pub fn draw(frame: &mut Frame, area: Rect, diff: Option<&KeymapDiff>, scroll: usize) {
    let Some(diff) = diff else {
        let hint = Paragraph::new(
            "No comparison yet. Press c to choose a keymap to compare with, then d.",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_column(frame, halves[0], &diff.left, scroll);
    draw_column(frame, halves[1], &diff.right, scroll);
}

fn draw_column(frame: &mut Frame, area: Rect, column: &DiffColumn, scroll: usize) {
    let lines: Vec<Line> = column
        .lines
        .iter()
        .zip(column.changed.iter())
        .map(|(line, &changed)| {
            // Tabs render poorly in terminal cells; show the ledger line with
            // a plain space.
            let text = line.replace('\t', " ");
            if changed {
                Line::styled(text, Style::default().fg(Color::Yellow))
            } else {
                Line::raw(text)
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(column.title.clone()),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

//! Root layout: tab strip, active view, status line, key hints.

pub mod diff;
pub mod grid;
pub mod ledger;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use keylens_core::{ActionCatalog, KeymapStore};

use crate::app::{App, InputMode, NoticeKind, Tab};

pub fn draw<S: KeymapStore + ActionCatalog>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_tabs(frame, chunks[0], app.tab);

    match app.tab {
        Tab::Grid => grid::draw(
            frame,
            chunks[1],
            app.catalogs(),
            &app.grid_rows,
            &app.visible_grid,
            app.grid_scroll,
            app.combo_offset,
        ),
        Tab::Actions => ledger::draw_bound(
            frame,
            chunks[1],
            &app.ledger.bound,
            &app.visible_bound,
            app.list_scroll,
        ),
        Tab::Unbound => ledger::draw_unbound(
            frame,
            chunks[1],
            &app.ledger.unbound,
            &app.visible_unbound,
            app.list_scroll,
        ),
        Tab::Diff => diff::draw(frame, chunks[1], app.diff.as_ref(), app.diff_scroll),
    }

    draw_status(frame, chunks[2], app);
    draw_hints(frame, chunks[3], app.input_mode);

    if let Some((_, selector)) = &app.selector {
        selector.render(chunks[1], frame.buffer_mut());
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let index = Tab::ALL.iter().position(|tab| *tab == active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(index)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn draw_status<S: KeymapStore + ActionCatalog>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut spans: Vec<Span> = Vec::new();

    if let Some(notice) = &app.notice {
        let style = match notice.kind {
            NoticeKind::Info => Style::default().fg(Color::Cyan),
            NoticeKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(notice.text.clone(), style));
    } else {
        let filter_label = if app.input_mode == InputMode::Filter {
            format!("/{}_", app.filter)
        } else if app.filter.is_empty() {
            String::new()
        } else {
            format!("/{}", app.filter)
        };
        spans.push(Span::styled(
            filter_label,
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(
                "keymap: {}",
                app.selected_keymap.as_deref().unwrap_or("<none>")
            ),
            Style::default().fg(Color::DarkGray),
        ));
        if let Some(compare) = &app.compare_keymap {
            spans.push(Span::styled(
                format!("  compare: {compare}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hints(frame: &mut Frame, area: Rect, mode: InputMode) {
    let hints: &[(&str, &str)] = match mode {
        InputMode::Filter => &[("Enter", "apply"), ("Esc", "clear")],
        InputMode::Selector => &[("Up/Dn", "navigate"), ("Enter", "select"), ("Esc", "close")],
        InputMode::Normal => &[
            ("q", "quit"),
            ("r", "refresh"),
            ("/", "filter"),
            ("s", "keymap"),
            ("c", "compare"),
            ("d", "diff"),
            ("m", "markdown"),
            ("o", "html"),
            ("Tab", "views"),
        ],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            *description,
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Keymap selector popup: a small navigable list over the store's keymap
//! names, opened for either the view selection or the compare selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget};

/// Result of handling one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// Still choosing.
    Pending,
    /// A name was chosen.
    Selected(String),
    /// The popup was dismissed.
    Cancelled,
}

/// Selector popup state.
#[derive(Debug, Clone)]
pub struct SelectorState {
    title: String,
    items: Vec<String>,
    selected: usize,
}

impl SelectorState {
    /// `current` pre-selects the matching item when present.
    pub fn new(title: impl Into<String>, items: Vec<String>, current: Option<&str>) -> Self {
        let selected = current
            .and_then(|name| items.iter().position(|item| item == name))
            .unwrap_or(0);
        Self {
            title: title.into(),
            items,
            selected,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SelectorOutcome {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                SelectorOutcome::Pending
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.items.len().saturating_sub(1));
                SelectorOutcome::Pending
            }
            KeyCode::Home => {
                self.selected = 0;
                SelectorOutcome::Pending
            }
            KeyCode::End => {
                self.selected = self.items.len().saturating_sub(1);
                SelectorOutcome::Pending
            }
            KeyCode::Enter => match self.items.get(self.selected) {
                Some(item) => SelectorOutcome::Selected(item.clone()),
                None => SelectorOutcome::Cancelled,
            },
            KeyCode::Esc => SelectorOutcome::Cancelled,
            _ => SelectorOutcome::Pending,
        }
    }

    /// Renders the popup centered in `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let width = self
            .items
            .iter()
            .map(|item| item.len())
            .max()
            .unwrap_or(0)
            .max(self.title.len())
            .saturating_add(6) as u16;
        let height = (self.items.len() as u16).saturating_add(2);
        let popup = centered(area, width.min(area.width), height.min(area.height));

        Clear.render(popup, buf);
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(Line::from(item.clone())))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone()),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, popup, buf, &mut state);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

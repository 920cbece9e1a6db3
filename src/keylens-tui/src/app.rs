//! Application state and the refresh/filter controller.
//!
//! The controller is a two-state machine (Idle -> Building -> Idle): a
//! refresh synchronously rebuilds the shortcut index, grid, and ledger from
//! a fresh store snapshot and replaces the view contents wholesale. Filter
//! text and selector choices survive a rebuild; filtering itself never
//! triggers one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use keylens_core::export::{self, html, markdown};
use keylens_core::{
    ActionCatalog, ActionLedger, CatalogProvider, DiffError, GridRow, KeymapDiff, KeymapStore,
    PlatformFamily, ShortcutIndex, build_diff, build_grid, filter,
};

use crate::actions::{UiAction, map_key};
use crate::widgets::selector::{SelectorOutcome, SelectorState};

/// The visible tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Grid,
    Actions,
    Unbound,
    Diff,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Grid, Tab::Actions, Tab::Unbound, Tab::Diff];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Grid => "Keymap",
            Tab::Actions => "Actions Map",
            Tab::Unbound => "Unbound Actions",
            Tab::Diff => "Compare",
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::Grid => Tab::Actions,
            Tab::Actions => Tab::Unbound,
            Tab::Unbound => Tab::Diff,
            Tab::Diff => Tab::Grid,
        }
    }

    fn prev(self) -> Self {
        match self {
            Tab::Grid => Tab::Diff,
            Tab::Actions => Tab::Grid,
            Tab::Unbound => Tab::Actions,
            Tab::Diff => Tab::Unbound,
        }
    }
}

/// Controller state: the view is either stable or mid-rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildState {
    #[default]
    Idle,
    Building,
}

/// Where key input currently goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
    Selector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A one-line message shown beneath the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Why the selector popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPurpose {
    /// Choosing the keymap to render.
    View,
    /// Choosing the keymap to compare against.
    Compare,
}

/// The whole interactive application.
pub struct App<S> {
    store: S,
    catalogs: CatalogProvider,

    pub build_state: BuildState,
    pub input_mode: InputMode,
    pub tab: Tab,
    pub filter: String,
    pub notice: Option<Notice>,

    /// Keymap names available in the store, re-derived on every refresh.
    pub available: Vec<String>,
    pub selected_keymap: Option<String>,
    pub compare_keymap: Option<String>,

    pub grid_rows: Vec<GridRow>,
    pub ledger: ActionLedger,
    pub visible_grid: Vec<usize>,
    pub visible_bound: Vec<usize>,
    pub visible_unbound: Vec<usize>,
    pub diff: Option<KeymapDiff>,

    pub selector: Option<(SelectorPurpose, SelectorState)>,
    pub grid_scroll: usize,
    pub list_scroll: usize,
    pub diff_scroll: usize,
    /// First visible modifier column in the grid.
    pub combo_offset: usize,

    pub should_quit: bool,
}

impl<S: KeymapStore + ActionCatalog> App<S> {
    pub fn new(store: S, family: PlatformFamily) -> Self {
        let mut app = Self {
            store,
            catalogs: CatalogProvider::new(family),
            build_state: BuildState::default(),
            input_mode: InputMode::default(),
            tab: Tab::Grid,
            filter: String::new(),
            notice: None,
            available: Vec::new(),
            selected_keymap: None,
            compare_keymap: None,
            grid_rows: Vec::new(),
            ledger: ActionLedger::default(),
            visible_grid: Vec::new(),
            visible_bound: Vec::new(),
            visible_unbound: Vec::new(),
            diff: None,
            selector: None,
            grid_scroll: 0,
            list_scroll: 0,
            diff_scroll: 0,
            combo_offset: 0,
            should_quit: false,
        };
        app.refresh();
        app
    }

    pub fn catalogs(&self) -> &CatalogProvider {
        &self.catalogs
    }

    /// Rebuilds everything from a fresh store snapshot. The key/modifier
    /// catalogs are reused; filter text and selector choices are preserved,
    /// with the keymap selection falling back to the store's active keymap
    /// when the prior choice disappeared.
    pub fn refresh(&mut self) {
        self.build_state = BuildState::Building;

        self.available = self
            .store
            .keymaps()
            .iter()
            .map(|keymap| keymap.name().to_string())
            .collect();

        let prior = self.selected_keymap.take();
        self.selected_keymap = prior
            .filter(|name| self.available.iter().any(|candidate| candidate == name))
            .or_else(|| {
                self.store
                    .active_keymap()
                    .map(|keymap| keymap.name().to_string())
            });

        self.grid_rows.clear();
        self.ledger = ActionLedger::default();
        if let Some(keymap) = self
            .selected_keymap
            .as_deref()
            .and_then(|name| self.store.keymap(name))
        {
            let index = ShortcutIndex::build(keymap);
            self.grid_rows = build_grid(&self.catalogs, &index, &self.store);
            self.ledger = ActionLedger::build(keymap, &self.store);
        }
        // The comparison is rebuilt lazily, on the next explicit request.
        self.diff = None;
        self.apply_filter();

        debug!(
            keymap = self.selected_keymap.as_deref().unwrap_or("<none>"),
            rows = self.grid_rows.len(),
            "rebuilt views"
        );
        self.build_state = BuildState::Idle;
    }

    /// Re-derives the visible index sets from the current filter. Pure view
    /// work: the built rows are untouched.
    fn apply_filter(&mut self) {
        self.visible_grid = filter::filter_grid(&self.grid_rows, &self.filter);
        self.visible_bound = filter::filter_ledger(&self.ledger.bound, &self.filter);
        self.visible_unbound = filter::filter_names(&self.ledger.unbound, &self.filter);
        self.grid_scroll = 0;
        self.list_scroll = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Selector => self.handle_selector_key(key),
            InputMode::Filter => self.handle_filter_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        let Some((purpose, selector)) = self.selector.as_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        match selector.handle_key(key) {
            SelectorOutcome::Pending => {}
            SelectorOutcome::Cancelled => {
                self.selector = None;
                self.input_mode = InputMode::Normal;
            }
            SelectorOutcome::Selected(name) => {
                let purpose = *purpose;
                self.selector = None;
                self.input_mode = InputMode::Normal;
                match purpose {
                    SelectorPurpose::View => {
                        self.selected_keymap = Some(name);
                        self.refresh();
                    }
                    SelectorPurpose::Compare => {
                        self.compare_keymap = Some(name);
                        self.diff = None;
                    }
                }
            }
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.filter.clear();
                self.apply_filter();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.filter.pop();
                self.apply_filter();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.filter.push(c);
                self.apply_filter();
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            UiAction::Quit => self.should_quit = true,
            UiAction::Refresh => self.refresh(),
            UiAction::NextTab => self.tab = self.tab.next(),
            UiAction::PrevTab => self.tab = self.tab.prev(),
            UiAction::StartFilter => self.input_mode = InputMode::Filter,
            UiAction::Dismiss => {
                if self.notice.take().is_none() && !self.filter.is_empty() {
                    self.filter.clear();
                    self.apply_filter();
                }
            }
            UiAction::ScrollUp => self.scroll_by(-1),
            UiAction::ScrollDown => self.scroll_by(1),
            UiAction::PageUp => self.scroll_by(-10),
            UiAction::PageDown => self.scroll_by(10),
            UiAction::ScrollTop => self.set_scroll(0),
            UiAction::ScrollBottom => self.set_scroll(usize::MAX),
            UiAction::PanLeft => self.combo_offset = self.combo_offset.saturating_sub(1),
            UiAction::PanRight => {
                let max = self.catalogs.modifier_combos().len().saturating_sub(1);
                self.combo_offset = (self.combo_offset + 1).min(max);
            }
            UiAction::ChooseKeymap => self.open_selector(SelectorPurpose::View),
            UiAction::ChooseCompare => self.open_selector(SelectorPurpose::Compare),
            UiAction::ShowDiff => self.show_diff(),
            UiAction::ExportMarkdown => self.export_markdown(),
            UiAction::ExportHtml => self.export_html(),
            UiAction::None => {}
        }
    }

    fn open_selector(&mut self, purpose: SelectorPurpose) {
        if self.available.is_empty() {
            self.notice = Some(Notice::error("no keymaps available"));
            return;
        }
        let current = match purpose {
            SelectorPurpose::View => self.selected_keymap.as_deref(),
            SelectorPurpose::Compare => self.compare_keymap.as_deref(),
        };
        let title = match purpose {
            SelectorPurpose::View => "Keymap",
            SelectorPurpose::Compare => "Compare with",
        };
        self.selector = Some((
            purpose,
            SelectorState::new(title, self.available.clone(), current),
        ));
        self.input_mode = InputMode::Selector;
    }

    /// Builds the comparison for the current selections, surfacing the guard
    /// conditions as notices instead of a diff.
    fn show_diff(&mut self) {
        let Some(left) = self.selected_keymap.clone() else {
            self.notice = Some(Notice::error("no keymap selected"));
            return;
        };
        let Some(right) = self.compare_keymap.clone() else {
            self.notice = Some(Notice::info(
                "choose a keymap to compare with first (press c)",
            ));
            return;
        };
        match build_diff(&self.store, &self.store, &left, &right) {
            Ok(diff) => {
                self.diff = Some(diff);
                self.diff_scroll = 0;
                self.tab = Tab::Diff;
            }
            Err(err @ DiffError::SameKeymap(_)) => {
                self.diff = None;
                self.notice = Some(Notice::info(err.to_string()));
            }
            Err(err @ DiffError::KeymapNotFound(_)) => {
                self.diff = None;
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    /// Renders the Markdown document from the built grid and ledger and
    /// writes it to a temp file.
    pub fn export_markdown(&mut self) {
        let document = markdown::render(
            self.catalogs.modifier_combos(),
            &self.grid_rows,
            &self.ledger,
        );
        match export::write_temp_document(&document, "keymap-", ".md") {
            Ok(path) => {
                self.notice = Some(Notice::info(format!("wrote {}", path.display())));
            }
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
    }

    /// Renders the HTML document, writes it to a temp file, and hands it to
    /// the platform viewer.
    pub fn export_html(&mut self) {
        let document = html::render(
            &self.store.banner(),
            chrono::Local::now(),
            self.catalogs.modifier_combos(),
            &self.grid_rows,
            &self.ledger,
        );
        let result = export::write_temp_document(&document, "keymap-", ".html")
            .and_then(|path| export::open_in_viewer(&path).map(|()| path));
        match result {
            Ok(path) => {
                self.notice = Some(Notice::info(format!("opened {}", path.display())));
            }
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let (scroll, len) = self.scroll_target();
        let next = scroll.saturating_add_signed(delta).min(len.saturating_sub(1));
        self.store_scroll(next);
    }

    fn set_scroll(&mut self, to: usize) {
        let (_, len) = self.scroll_target();
        self.store_scroll(to.min(len.saturating_sub(1)));
    }

    fn scroll_target(&self) -> (usize, usize) {
        match self.tab {
            Tab::Grid => (self.grid_scroll, self.visible_grid.len()),
            Tab::Actions => (self.list_scroll, self.visible_bound.len()),
            Tab::Unbound => (self.list_scroll, self.visible_unbound.len()),
            Tab::Diff => {
                let len = self
                    .diff
                    .as_ref()
                    .map(|diff| diff.left.lines.len().max(diff.right.lines.len()))
                    .unwrap_or(0);
                (self.diff_scroll, len)
            }
        }
    }

    fn store_scroll(&mut self, value: usize) {
        match self.tab {
            Tab::Grid => self.grid_scroll = value,
            Tab::Actions | Tab::Unbound => self.list_scroll = value,
            Tab::Diff => self.diff_scroll = value,
        }
    }
}

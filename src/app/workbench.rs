//! Workbench: the single owner of workspace state.
//!
//! Every user event funnels through here and fans out to the tree, the
//! tab strip and the navigation service. Views never mutate state; they
//! render what the workbench hands them and answer hit tests.
//!
//! Event flow:
//! - leaf click   -> tabs.open -> navigation.goto
//! - folder click -> tree.toggle_expand (no navigation)
//! - tab click    -> navigation.goto
//! - tab close    -> tabs.close -> goto fallback if the closed tab was active

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme::UiTheme;
use crate::content::workspace;
use crate::core::event::InputEvent;
use crate::core::view::{ActiveArea, EventResult, View};
use crate::models::{Location, NavTree, NavTreeError, NodeId, TabStrip};
use crate::services::{ContentService, NavigationService, UiConfig};
use crate::views::{ContentView, ExplorerView, TabHit, TabRowView};

const TOP_BAR_HEIGHT: u16 = 1;
const TAB_ROW_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

pub struct Workbench {
    tree: NavTree,
    tabs: TabStrip,
    navigation: NavigationService,
    content: ContentService,
    config: UiConfig,
    theme: UiTheme,
    explorer: ExplorerView,
    tab_row: TabRowView,
    content_view: ContentView,
    active_area: ActiveArea,
    show_sidebar: bool,
}

impl Workbench {
    pub fn new(config: UiConfig) -> Result<Self, NavTreeError> {
        Self::with_theme(config, UiTheme::detect())
    }

    pub fn with_theme(config: UiConfig, theme: UiTheme) -> Result<Self, NavTreeError> {
        let tree = workspace::portfolio_tree()?;
        let default_location = Location::new(workspace::DEFAULT_LOCATION);
        let show_sidebar = config.show_sidebar;
        Ok(Self {
            tree,
            tabs: TabStrip::seeded(workspace::DEFAULT_TAB_TITLE, default_location.clone()),
            navigation: NavigationService::new(default_location),
            content: ContentService::new(),
            config,
            theme,
            explorer: ExplorerView::new(),
            tab_row: TabRowView::new(),
            content_view: ContentView::new(),
            active_area: ActiveArea::Content,
            show_sidebar,
        })
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn current_location(&self) -> &Location {
        self.navigation.current()
    }

    pub fn active_area(&self) -> ActiveArea {
        self.active_area
    }

    pub fn sidebar_visible(&self) -> bool {
        self.show_sidebar
    }

    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    /// A tree leaf was activated: open (or refocus) its tab, then bring
    /// the location into view. Navigation happens even when the tab was
    /// already open; a rejected open never navigates.
    pub fn open_leaf(&mut self, title: &str, location: Location) {
        match self.tabs.open(title, location.clone()) {
            Ok(()) => self.navigation.goto(location),
            Err(error) => tracing::warn!(%error, "rejected tab open"),
        }
    }

    /// A tree folder was activated: expansion bookkeeping only.
    pub fn activate_folder(&mut self, id: NodeId) {
        self.tree.toggle_expand(id);
    }

    /// A tab was clicked: navigation only, no tree or strip mutation.
    pub fn activate_tab(&mut self, location: Location) {
        self.navigation.goto(location);
    }

    /// A tab's close button was clicked. If the closed tab was the
    /// active one, fall back to its left neighbor, else the new leftmost
    /// tab, else the default location.
    pub fn close_tab(&mut self, location: &Location) {
        let Some(index) = self.tabs.index_of(location) else {
            return;
        };
        let was_active = self.navigation.current() == location;
        self.tabs.close(location);
        tracing::debug!(%location, was_active, "closed tab");
        if was_active {
            let fallback = self
                .tabs
                .fallback_after_close(index)
                .cloned()
                .unwrap_or_else(|| Location::new(workspace::DEFAULT_LOCATION));
            self.navigation.goto(fallback);
        }
    }

    /// Polymorphic tree activation: leaves open and navigate, folders
    /// toggle, childless location-less nodes do nothing.
    fn activate_node(&mut self, id: NodeId) {
        self.tree.set_selected(Some(id));
        let title = self.tree.name(id).map(str::to_owned).unwrap_or_default();
        if let Some(location) = self.tree.select(id) {
            self.open_leaf(&title, location);
            self.active_area = ActiveArea::Content;
        }
    }

    fn cycle_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let next = match self.tabs.index_of(self.navigation.current()) {
            Some(index) => (index + 1) % self.tabs.len(),
            None => 0,
        };
        if let Some(tab) = self.tabs.get(next) {
            let location = tab.location.clone();
            self.activate_tab(location);
        }
    }

    fn close_active_tab(&mut self) {
        let current = self.navigation.current().clone();
        self.close_tab(&current);
    }

    fn handle_global_key(&mut self, event: &KeyEvent) -> Option<EventResult> {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(EventResult::Quit),
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
                self.toggle_sidebar();
                Some(EventResult::Consumed)
            }
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.active_area = match self.active_area {
                    ActiveArea::Explorer => ActiveArea::Content,
                    ActiveArea::Content => ActiveArea::Explorer,
                };
                Some(EventResult::Consumed)
            }
            (KeyCode::Tab, KeyModifiers::CONTROL) => {
                self.cycle_tab();
                Some(EventResult::Consumed)
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                self.close_active_tab();
                Some(EventResult::Consumed)
            }
            (KeyCode::Left, KeyModifiers::ALT) => {
                self.navigation.go_back();
                Some(EventResult::Consumed)
            }
            (KeyCode::Right, KeyModifiers::ALT) => {
                self.navigation.go_forward();
                Some(EventResult::Consumed)
            }
            _ => None,
        }
    }

    fn handle_explorer_key(&mut self, event: &KeyEvent) -> EventResult {
        let rows = self.tree.flatten();
        if rows.is_empty() {
            return EventResult::Ignored;
        }
        let selected_index = self
            .tree
            .selected()
            .and_then(|id| rows.iter().position(|r| r.id == id))
            .unwrap_or(0);

        match event.code {
            KeyCode::Up => {
                let index = selected_index.saturating_sub(1);
                self.tree.set_selected(Some(rows[index].id));
                self.explorer.ensure_visible(index);
                EventResult::Consumed
            }
            KeyCode::Down => {
                let index = (selected_index + 1).min(rows.len() - 1);
                self.tree.set_selected(Some(rows[index].id));
                self.explorer.ensure_visible(index);
                EventResult::Consumed
            }
            KeyCode::Enter => {
                self.activate_node(rows[selected_index].id);
                EventResult::Consumed
            }
            KeyCode::Right => {
                let row = &rows[selected_index];
                if !row.is_leaf && !row.is_expanded {
                    self.activate_folder(row.id);
                }
                EventResult::Consumed
            }
            KeyCode::Left => {
                let row = &rows[selected_index];
                if !row.is_leaf && row.is_expanded {
                    self.activate_folder(row.id);
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_content_key(&mut self, event: &KeyEvent) -> EventResult {
        let step = self.config.scroll_lines.max(1);
        match event.code {
            KeyCode::Up => {
                self.content_view.scroll_up(step);
                EventResult::Consumed
            }
            KeyCode::Down => {
                self.content_view.scroll_down(step);
                EventResult::Consumed
            }
            KeyCode::PageUp => {
                self.content_view.scroll_up(10);
                EventResult::Consumed
            }
            KeyCode::PageDown => {
                self.content_view.scroll_down(10);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.show_sidebar && self.explorer.contains(x, y) {
                    self.active_area = ActiveArea::Explorer;
                    if let Some(index) = self.explorer.hit_test_row(event) {
                        let rows = self.tree.flatten();
                        if let Some(row) = rows.get(index) {
                            self.activate_node(row.id);
                        }
                    }
                    EventResult::Consumed
                } else if self.tab_row.contains(x, y) {
                    match self.tab_row.hit_test(x, y) {
                        Some(TabHit::Activate(index)) => {
                            if let Some(tab) = self.tabs.get(index) {
                                let location = tab.location.clone();
                                self.activate_tab(location);
                            }
                        }
                        Some(TabHit::Close(index)) => {
                            if let Some(tab) = self.tabs.get(index) {
                                let location = tab.location.clone();
                                self.close_tab(&location);
                            }
                        }
                        None => {}
                    }
                    EventResult::Consumed
                } else if self.content_view.contains(x, y) {
                    self.active_area = ActiveArea::Content;
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            MouseEventKind::ScrollUp => {
                if self.show_sidebar && self.explorer.contains(x, y) {
                    self.explorer.scroll_up(self.config.scroll_lines.max(1) as usize);
                } else {
                    self.content_view.scroll_up(self.config.scroll_lines.max(1));
                }
                EventResult::Consumed
            }
            MouseEventKind::ScrollDown => {
                if self.show_sidebar && self.explorer.contains(x, y) {
                    let rows = self.tree.flatten().len();
                    self.explorer
                        .scroll_down(self.config.scroll_lines.max(1) as usize, rows);
                } else {
                    self.content_view.scroll_down(self.config.scroll_lines.max(1));
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let nav_style = |enabled: bool| {
            if enabled {
                Style::default().fg(self.theme.text_active)
            } else {
                Style::default().fg(self.theme.text_secondary)
            }
        };
        let line = Line::from(vec![
            Span::styled(
                " termfolio ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " File  Edit  Selection  View  Go  Run  Terminal  Help   ",
                Style::default().fg(self.theme.text),
            ),
            Span::styled("‹ ", nav_style(self.navigation.can_go_back())),
            Span::styled("› ", nav_style(self.navigation.can_go_forward())),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(self.theme.titlebar_bg)),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, kind_label: &str) {
        let left = format!("  main  ✕ 0  ⚠ 0   {}", self.navigation.current());
        let right = format!("Ln 1, Col 1   UTF-8   {kind_label}  ");
        let width = area.width as usize;
        let used = UnicodeWidthStr::width(left.as_str()) + UnicodeWidthStr::width(right.as_str());
        let pad = " ".repeat(width.saturating_sub(used));
        let line = Line::from(Span::styled(
            format!("{left}{pad}{right}"),
            Style::default()
                .fg(self.theme.text_active)
                .bg(self.theme.statusbar_bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_too_small(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                " termfolio needs a bigger terminal.",
                Style::default()
                    .fg(self.theme.text_active)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    " Please resize to at least {}x{}.",
                    self.config.min_width, self.config.min_height
                ),
                Style::default().fg(self.theme.text),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(self.theme.editor_bg)),
            area,
        );
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key_event) => {
                if let Some(result) = self.handle_global_key(key_event) {
                    return result;
                }
                match self.active_area {
                    ActiveArea::Explorer => self.handle_explorer_key(key_event),
                    ActiveArea::Content => self.handle_content_key(key_event),
                }
            }
            InputEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            InputEvent::Tick => {
                if self.content_view.tick() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            InputEvent::Resize(..) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width < self.config.min_width || area.height < self.config.min_height {
            self.render_too_small(frame, area);
            return;
        }

        let current = self.navigation.current().clone();
        let page = self.content.resolve(&current, &self.theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOP_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        self.render_top_bar(frame, chunks[0]);
        self.render_status_bar(frame, chunks[2], page.kind.label());

        let body = chunks[1];
        let editor_area = if self.show_sidebar {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(self.config.sidebar_width),
                    Constraint::Min(0),
                ])
                .split(body);
            let rows = self.tree.flatten();
            self.explorer
                .render(frame, columns[0], &rows, self.tree.selected(), &self.theme);
            columns[1]
        } else {
            body
        };

        let tab_area = Rect::new(editor_area.x, editor_area.y, editor_area.width, TAB_ROW_HEIGHT);
        self.tab_row
            .render(frame, tab_area, self.tabs.tabs(), &current, &self.theme);

        let content_area = Rect::new(
            editor_area.x,
            editor_area.y + TAB_ROW_HEIGHT,
            editor_area.width,
            editor_area.height.saturating_sub(TAB_ROW_HEIGHT),
        );
        self.content_view
            .render(frame, content_area, &current, &page, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::new(s)
    }

    fn workbench() -> Workbench {
        Workbench::with_theme(UiConfig::default(), UiTheme::dark()).unwrap()
    }

    #[test]
    fn test_starts_with_home_tab_active() {
        let bench = workbench();
        assert_eq!(bench.tabs().len(), 1);
        assert_eq!(bench.tabs().get(0).unwrap().title, "Home.jsx");
        assert_eq!(bench.current_location(), &loc("/home"));
    }

    #[test]
    fn test_open_leaf_opens_and_navigates() {
        let mut bench = workbench();
        bench.open_leaf("Skills.jsx", loc("/skills"));

        assert_eq!(bench.tabs().len(), 2);
        assert_eq!(bench.current_location(), &loc("/skills"));
    }

    #[test]
    fn test_reopen_navigates_without_duplicating() {
        let mut bench = workbench();
        bench.open_leaf("Skills.jsx", loc("/skills"));
        bench.open_leaf("Home.jsx", loc("/home"));

        let titles: Vec<_> = bench.tabs().tabs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Home.jsx", "Skills.jsx"]);
        assert_eq!(bench.current_location(), &loc("/home"));
    }

    #[test]
    fn test_invalid_open_never_navigates() {
        let mut bench = workbench();
        bench.open_leaf("", loc("/skills"));
        assert_eq!(bench.tabs().len(), 1);
        assert_eq!(bench.current_location(), &loc("/home"));
    }

    #[test]
    fn test_close_active_falls_back_to_left_neighbor() {
        let mut bench = workbench();
        bench.open_leaf("Skills.jsx", loc("/skills"));
        bench.open_leaf("Contact.jsx", loc("/contact"));
        bench.activate_tab(loc("/skills"));

        bench.close_tab(&loc("/skills"));

        let titles: Vec<_> = bench.tabs().tabs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Home.jsx", "Contact.jsx"]);
        assert_eq!(bench.current_location(), &loc("/home"));
    }

    #[test]
    fn test_close_leftmost_active_selects_new_leftmost() {
        let mut bench = workbench();
        bench.open_leaf("Skills.jsx", loc("/skills"));
        bench.activate_tab(loc("/home"));

        bench.close_tab(&loc("/home"));
        assert_eq!(bench.current_location(), &loc("/skills"));
    }

    #[test]
    fn test_close_inactive_leaves_location_alone() {
        let mut bench = workbench();
        bench.open_leaf("Contact.jsx", loc("/contact"));

        bench.close_tab(&loc("/home"));

        assert_eq!(bench.tabs().len(), 1);
        assert_eq!(bench.current_location(), &loc("/contact"));
    }

    #[test]
    fn test_close_last_tab_falls_back_to_default() {
        let mut bench = workbench();
        bench.close_tab(&loc("/home"));
        assert!(bench.tabs().is_empty());
        assert_eq!(bench.current_location(), &loc("/home"));
    }

    #[test]
    fn test_close_absent_location_is_noop() {
        let mut bench = workbench();
        bench.close_tab(&loc("/nope"));
        assert_eq!(bench.tabs().len(), 1);
    }

    #[test]
    fn test_folder_activation_never_navigates() {
        let mut bench = workbench();
        let projects = bench
            .tree()
            .flatten()
            .iter()
            .find(|r| r.name == "Projects")
            .map(|r| r.id)
            .unwrap();

        bench.activate_folder(projects);
        assert!(bench.tree().is_expanded(projects));
        assert_eq!(bench.current_location(), &loc("/home"));
        assert_eq!(bench.tabs().len(), 1);

        bench.activate_folder(projects);
        assert!(!bench.tree().is_expanded(projects));
    }

    #[test]
    fn test_cycle_tab_wraps() {
        let mut bench = workbench();
        bench.open_leaf("Skills.jsx", loc("/skills"));
        bench.cycle_tab();
        assert_eq!(bench.current_location(), &loc("/home"));
        bench.cycle_tab();
        assert_eq!(bench.current_location(), &loc("/skills"));
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut bench = workbench();
        let event = InputEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(bench.handle_input(&event), EventResult::Quit);
    }

    #[test]
    fn test_ctrl_b_toggles_sidebar() {
        let mut bench = workbench();
        assert!(bench.sidebar_visible());
        let event = InputEvent::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
        bench.handle_input(&event);
        assert!(!bench.sidebar_visible());
    }
}

//! Explorer sidebar (pure rendering + hit testing).
//!
//! Renders the flattened tree; all expand/collapse and selection state
//! lives in the model, the view only remembers its screen area and
//! scroll offset.

use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::models::{NavRow, NodeId};

const HEADER_HEIGHT: u16 = 1;

pub struct ExplorerView {
    area: Option<Rect>,
    scroll_offset: usize,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self {
            area: None,
            scroll_offset: 0,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    /// Maps a mouse event to a row index in the flattened tree.
    pub fn hit_test_row(&self, event: &MouseEvent) -> Option<usize> {
        let area = self.area?;
        if event.column < area.x || event.column >= area.x + area.width {
            return None;
        }
        let top = area.y + HEADER_HEIGHT;
        if event.row < top || event.row >= area.y + area.height {
            return None;
        }
        Some((event.row - top) as usize + self.scroll_offset)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, row_count: usize) {
        let max = row_count.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    /// Keeps the selected row inside the viewport after keyboard moves.
    pub fn ensure_visible(&mut self, index: usize) {
        let Some(area) = self.area else {
            return;
        };
        let height = area.height.saturating_sub(HEADER_HEIGHT) as usize;
        if height == 0 {
            return;
        }
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + height {
            self.scroll_offset = index + 1 - height;
        }
    }

    fn render_row(&self, row: &NavRow, is_selected: bool, theme: &UiTheme) -> Line<'static> {
        let indent = "  ".repeat(row.depth as usize);
        let marker = if !row.is_leaf {
            if row.is_expanded { "▾ " } else { "▸ " }
        } else {
            "  "
        };
        let text = format!("{indent}{marker}{}", row.name);

        let style = if is_selected {
            Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
        } else if row.is_leaf {
            Style::default().fg(theme.file_color(row.name.as_str()))
        } else {
            Style::default().fg(theme.folder_fg)
        };

        Line::from(Span::styled(text, style))
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[NavRow],
        selected: Option<NodeId>,
        theme: &UiTheme,
    ) {
        self.area = Some(area);
        if area.height <= HEADER_HEIGHT {
            return;
        }

        let visible_height = (area.height - HEADER_HEIGHT) as usize;
        self.scroll_offset = self.scroll_offset.min(rows.len().saturating_sub(1));
        let visible_end = (self.scroll_offset + visible_height).min(rows.len());

        let mut lines = vec![Line::from(Span::styled(
            " EXPLORER",
            Style::default().fg(theme.text_secondary),
        ))];
        lines.extend(
            rows[self.scroll_offset..visible_end]
                .iter()
                .map(|row| self.render_row(row, selected == Some(row.id), theme)),
        );

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.sidebar_bg)),
            area,
        );
    }
}

impl Default for ExplorerView {
    fn default() -> Self {
        Self::new()
    }
}

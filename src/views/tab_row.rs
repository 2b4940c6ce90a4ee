//! Tab strip (layout, rendering, hit testing).
//!
//! The row records where each tab landed during the last render so mouse
//! clicks can be mapped back to "activate this tab" or "close this tab"
//! without re-deriving the layout.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::theme::UiTheme;
use crate::models::{Location, Tab};

const MAX_TITLE_WIDTH: u16 = 20;
const DIVIDER_WIDTH: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    pub index: usize,
    pub start: u16,
    pub close_start: u16,
    pub end: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabHit {
    Activate(usize),
    Close(usize),
}

pub struct TabRowView {
    area: Option<Rect>,
    slots: Vec<TabSlot>,
}

impl TabRowView {
    pub fn new() -> Self {
        Self {
            area: None,
            slots: Vec::new(),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<TabHit> {
        let area = self.area?;
        if y != area.y {
            return None;
        }
        let slot = self
            .slots
            .iter()
            .find(|slot| x >= slot.start && x < slot.end)?;
        if x >= slot.close_start {
            Some(TabHit::Close(slot.index))
        } else {
            Some(TabHit::Activate(slot.index))
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        tabs: &[Tab],
        current: &Location,
        theme: &UiTheme,
    ) {
        self.area = Some(area);
        self.slots.clear();

        let right = area.x + area.width;
        let mut x = area.x;
        let mut spans: Vec<Span<'static>> = Vec::new();

        for (index, tab) in tabs.iter().enumerate() {
            let title = ellipsize(tab.title.as_str(), MAX_TITLE_WIDTH);
            let label = format!(" {title} ");
            let label_width = UnicodeWidthStr::width(label.as_str()) as u16;
            // label + "× "
            let end = x + label_width + 2;
            if end > right {
                break;
            }

            let active = tab.is_active(current);
            let (label_style, close_style) = if active {
                (
                    Style::default()
                        .fg(theme.text_active)
                        .bg(theme.editor_bg)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(theme.text_secondary).bg(theme.editor_bg),
                )
            } else {
                (
                    Style::default().fg(theme.tab_inactive_fg),
                    Style::default().fg(theme.tab_inactive_fg),
                )
            };

            let start = x;
            let close_start = x + label_width;
            spans.push(Span::styled(label, label_style));
            spans.push(Span::styled("× ", close_style));
            self.slots.push(TabSlot {
                index,
                start,
                close_start,
                end,
            });
            x = end;

            if index + 1 < tabs.len() && x + DIVIDER_WIDTH <= right {
                spans.push(Span::styled("│", Style::default().fg(theme.border)));
                x += DIVIDER_WIDTH;
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.titlebar_bg)),
            area,
        );
    }
}

impl Default for TabRowView {
    fn default() -> Self {
        Self::new()
    }
}

fn ellipsize(title: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if UnicodeWidthStr::width(title) <= max_width {
        return title.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in title.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

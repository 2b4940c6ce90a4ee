//! Content viewport.
//!
//! Renders the page for the current location with vertical scrolling.
//! The typewriter reveal of the Home heading lives here: it is pure
//! presentation driven by ticks, and restarts whenever the displayed
//! location changes.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::models::Location;
use crate::services::content::Page;

const HEADING_HEIGHT: u16 = 2;

pub struct ContentView {
    area: Option<Rect>,
    scroll: u16,
    shown: Option<Location>,
    intro_chars: usize,
    animating: bool,
    body_lines: u16,
}

impl ContentView {
    pub fn new() -> Self {
        Self {
            area: None,
            scroll: 0,
            shown: None,
            intro_chars: 0,
            animating: false,
            body_lines: 0,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.body_lines.saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }

    /// Advances the typewriter. Returns true while the heading is still
    /// being revealed so the caller knows another tick matters.
    pub fn tick(&mut self) -> bool {
        if self.animating {
            self.intro_chars += 1;
            true
        } else {
            false
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        location: &Location,
        page: &Page,
        theme: &UiTheme,
    ) {
        self.area = Some(area);
        if self.shown.as_ref() != Some(location) {
            self.shown = Some(location.clone());
            self.scroll = 0;
            self.intro_chars = 0;
        }
        self.body_lines = page.body.lines.len() as u16;

        let heading = if page.animate_heading {
            let total = page.heading.chars().count();
            self.animating = self.intro_chars < total;
            let mut shown: String = page.heading.chars().take(self.intro_chars).collect();
            shown.push('▌');
            shown
        } else {
            self.animating = false;
            page.heading.clone()
        };

        let heading_line = Line::from(Span::styled(
            heading,
            Style::default()
                .fg(theme.text_active)
                .add_modifier(Modifier::BOLD),
        ));
        let heading_area = Rect::new(
            area.x + 1,
            area.y,
            area.width.saturating_sub(2),
            HEADING_HEIGHT.min(area.height),
        );
        frame.render_widget(
            Paragraph::new(vec![heading_line]).style(Style::default().bg(theme.editor_bg)),
            heading_area,
        );

        if area.height <= HEADING_HEIGHT {
            return;
        }
        let body_area = Rect::new(
            area.x + 1,
            area.y + HEADING_HEIGHT,
            area.width.saturating_sub(2),
            area.height - HEADING_HEIGHT,
        );
        frame.render_widget(
            Paragraph::new(page.body.clone())
                .style(Style::default().bg(theme.editor_bg))
                .scroll((self.scroll, 0)),
            body_area,
        );

        // Paint the gutter columns too so the editor background is solid.
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(theme.editor_bg)),
            Rect::new(area.x, area.y, 1, area.height),
        );
    }
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new()
    }
}

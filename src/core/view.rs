//! View trait for top-level interactive surfaces.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::event::InputEvent;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

/// Which surface keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveArea {
    Explorer,
    #[default]
    Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_result_predicates() {
        assert!(EventResult::Consumed.is_consumed());
        assert!(EventResult::Quit.is_quit());
        assert!(!EventResult::Ignored.is_consumed());
    }

    #[test]
    fn test_active_area_default() {
        assert_eq!(ActiveArea::default(), ActiveArea::Content);
    }
}

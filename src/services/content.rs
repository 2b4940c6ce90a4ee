//! Content resolution.
//!
//! Maps a location to the page displayed in the viewport. Resolution is
//! total: a location nothing answers to degrades to the not-found page
//! instead of surfacing an error into the tab or tree state.

use ratatui::text::Text;

use crate::app::theme::UiTheme;
use crate::content::pages;
use crate::models::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    JavaScriptJsx,
    JavaScript,
    Python,
    Cpp,
    Markdown,
    PlainText,
}

impl ContentKind {
    /// Language label shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::JavaScriptJsx => "JavaScript JSX",
            ContentKind::JavaScript => "JavaScript",
            ContentKind::Python => "Python",
            ContentKind::Cpp => "C++",
            ContentKind::Markdown => "Markdown",
            ContentKind::PlainText => "Plain Text",
        }
    }
}

pub struct Page {
    pub heading: String,
    /// Reveal the heading one character per tick (the Home intro).
    pub animate_heading: bool,
    pub kind: ContentKind,
    pub body: Text<'static>,
}

pub struct ContentService;

impl ContentService {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, location: &Location, theme: &UiTheme) -> Page {
        match pages::page_for(location, theme) {
            Some(page) => page,
            None => {
                tracing::warn!(%location, "no content for location");
                pages::not_found(location, theme)
            }
        }
    }
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

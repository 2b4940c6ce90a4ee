//! Open-tab collection.
//!
//! The strip is the single source of truth for what is open. It keeps at
//! most one tab per location and never reorders on its own; which tab is
//! active is derived by comparing against the navigation service's
//! current location, not stored here.

use compact_str::CompactString;
use std::fmt;

use super::Location;

#[derive(Debug, PartialEq, Eq)]
pub enum TabError {
    EmptyTitle,
    EmptyLocation,
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::EmptyTitle => write!(f, "tab title is empty"),
            TabError::EmptyLocation => write!(f, "tab location is empty"),
        }
    }
}

impl std::error::Error for TabError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: CompactString,
    pub location: Location,
}

impl Tab {
    pub fn is_active(&self, current: &Location) -> bool {
        self.location == *current
    }
}

pub struct TabStrip {
    tabs: Vec<Tab>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self { tabs: Vec::new() }
    }

    /// Startup strip with its single default tab already open.
    pub fn seeded(title: impl AsRef<str>, location: Location) -> Self {
        let mut strip = Self::new();
        // The seed comes from the built-in workspace data, so this cannot fail.
        let _ = strip.open(title, location);
        strip
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn index_of(&self, location: &Location) -> Option<usize> {
        self.tabs.iter().position(|t| t.location == *location)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.index_of(location).is_some()
    }

    /// Opens a tab. If the location is already open this is a no-op: the
    /// existing tab keeps its position and title. Empty arguments are a
    /// caller contract violation and are rejected rather than admitted.
    pub fn open(&mut self, title: impl AsRef<str>, location: Location) -> Result<(), TabError> {
        let title = title.as_ref();
        if title.is_empty() {
            return Err(TabError::EmptyTitle);
        }
        if location.is_empty() {
            return Err(TabError::EmptyLocation);
        }
        if self.contains(&location) {
            return Ok(());
        }
        self.tabs.push(Tab {
            title: CompactString::new(title),
            location,
        });
        Ok(())
    }

    /// Removes the tab at `location` if present; closing an absent
    /// location is a silent no-op. Relative order of the rest is kept.
    pub fn close(&mut self, location: &Location) {
        self.tabs.retain(|t| t.location != *location);
    }

    /// Fallback target after the tab that sat at `closed_index` has been
    /// removed: the tab that was its left neighbor, else the new leftmost
    /// tab, else nothing (caller falls back to the default location).
    pub fn fallback_after_close(&self, closed_index: usize) -> Option<&Location> {
        self.tabs
            .get(closed_index.saturating_sub(1))
            .or_else(|| self.tabs.first())
            .map(|t| &t.location)
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::new(s)
    }

    fn strip_abc() -> TabStrip {
        let mut strip = TabStrip::new();
        strip.open("Home.jsx", loc("/home")).unwrap();
        strip.open("Skills.jsx", loc("/skills")).unwrap();
        strip.open("Contact.jsx", loc("/contact")).unwrap();
        strip
    }

    #[test]
    fn test_seeded_has_one_tab() {
        let strip = TabStrip::seeded("Home.jsx", loc("/home"));
        assert_eq!(strip.len(), 1);
        assert_eq!(strip.get(0).unwrap().title, "Home.jsx");
    }

    #[test]
    fn test_open_appends_at_end() {
        let strip = strip_abc();
        let titles: Vec<_> = strip.tabs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Home.jsx", "Skills.jsx", "Contact.jsx"]);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut strip = strip_abc();
        strip.open("Skills.jsx", loc("/skills")).unwrap();
        strip.open("Renamed.jsx", loc("/skills")).unwrap();

        assert_eq!(strip.len(), 3);
        // Position and title both survive the repeat open.
        assert_eq!(strip.index_of(&loc("/skills")), Some(1));
        assert_eq!(strip.get(1).unwrap().title, "Skills.jsx");
    }

    #[test]
    fn test_uniqueness_over_arbitrary_opens() {
        let mut strip = TabStrip::new();
        for _ in 0..4 {
            strip.open("Home.jsx", loc("/home")).unwrap();
            strip.open("Skills.jsx", loc("/skills")).unwrap();
        }
        assert_eq!(strip.len(), 2);
    }

    #[test]
    fn test_open_rejects_empty_arguments() {
        let mut strip = TabStrip::new();
        assert_eq!(strip.open("", loc("/home")), Err(TabError::EmptyTitle));
        assert_eq!(strip.open("Home.jsx", loc("")), Err(TabError::EmptyLocation));
        assert!(strip.is_empty());
    }

    #[test]
    fn test_close_keeps_relative_order() {
        let mut strip = strip_abc();
        strip.close(&loc("/skills"));
        let titles: Vec<_> = strip.tabs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Home.jsx", "Contact.jsx"]);
    }

    #[test]
    fn test_close_absent_is_noop() {
        let mut strip = strip_abc();
        strip.close(&loc("/nope"));
        assert_eq!(strip.len(), 3);
    }

    #[test]
    fn test_is_active_is_location_equality() {
        let strip = strip_abc();
        let current = loc("/skills");
        assert!(strip.get(1).unwrap().is_active(&current));
        assert!(!strip.get(0).unwrap().is_active(&current));
    }

    #[test]
    fn test_fallback_prefers_left_neighbor() {
        let mut strip = strip_abc();
        let index = strip.index_of(&loc("/skills")).unwrap();
        strip.close(&loc("/skills"));
        assert_eq!(strip.fallback_after_close(index), Some(&loc("/home")));
    }

    #[test]
    fn test_fallback_leftmost_when_first_closed() {
        let mut strip = strip_abc();
        strip.close(&loc("/home"));
        assert_eq!(strip.fallback_after_close(0), Some(&loc("/skills")));
    }

    #[test]
    fn test_fallback_none_when_strip_empties() {
        let mut strip = TabStrip::seeded("Home.jsx", loc("/home"));
        strip.close(&loc("/home"));
        assert_eq!(strip.fallback_after_close(0), None);
    }
}

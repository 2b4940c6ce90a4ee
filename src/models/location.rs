//! Opaque location keys.
//!
//! A `Location` identifies one navigable view. The rest of the crate never
//! looks inside it; equality is the only operation that matters, which is
//! what makes it usable as the tab dedup key.

use compact_str::CompactString;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(CompactString);

impl Location {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(CompactString::new(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_key() {
        assert_eq!(Location::new("/home"), Location::from("/home"));
        assert_ne!(Location::new("/home"), Location::new("/skills"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::new("/projects/ml/1").to_string(), "/projects/ml/1");
    }
}

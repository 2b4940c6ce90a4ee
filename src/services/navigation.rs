//! Navigation service.
//!
//! Owns the current location. Everything else reads it to decide what is
//! active; only the workbench asks for changes. Back/forward history
//! mirrors a browser: going somewhere new truncates the forward stack.

use crate::models::Location;

pub struct NavigationService {
    current: Location,
    back: Vec<Location>,
    forward: Vec<Location>,
}

impl NavigationService {
    pub fn new(initial: Location) -> Self {
        Self {
            current: initial,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    pub fn goto(&mut self, location: Location) {
        if location == self.current {
            return;
        }
        tracing::debug!(from = %self.current, to = %location, "goto");
        self.back.push(std::mem::replace(&mut self.current, location));
        self.forward.clear();
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn go_back(&mut self) -> bool {
        match self.back.pop() {
            Some(previous) => {
                self.forward
                    .push(std::mem::replace(&mut self.current, previous));
                true
            }
            None => false,
        }
    }

    pub fn go_forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                self.back.push(std::mem::replace(&mut self.current, next));
                true
            }
            None => false,
        }
    }
}

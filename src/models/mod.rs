pub mod location;
pub mod nav_tree;
pub mod tab_strip;

pub use location::Location;
pub use nav_tree::{NavRow, NavTree, NavTreeError, NodeId};
pub use tab_strip::{Tab, TabError, TabStrip};

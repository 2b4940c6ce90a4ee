//! Navigation tree data model.
//!
//! The tree's shape is fixed at startup; only the per-folder expansion
//! state mutates afterwards. Nodes live in a slotmap arena and refer to
//! their children by id, so the recursive structure involves no shared
//! ownership and flattening is an iterative walk over ids.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use std::fmt;

use super::Location;

new_key_type! { pub struct NodeId; }

#[derive(Debug)]
pub enum NavTreeError {
    ParentIsLeaf,
    EmptyName,
    EmptyLocation,
    InvalidNodeId,
}

impl fmt::Display for NavTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTreeError::ParentIsLeaf => write!(f, "parent carries a location, cannot nest under it"),
            NavTreeError::EmptyName => write!(f, "node name is empty"),
            NavTreeError::EmptyLocation => write!(f, "leaf location is empty"),
            NavTreeError::InvalidNodeId => write!(f, "invalid node id"),
        }
    }
}

impl std::error::Error for NavTreeError {}

#[derive(Debug, Clone)]
struct Node {
    name: CompactString,
    location: Option<Location>,
    children: Vec<NodeId>,
}

/// One visible row of the tree, in render order.
#[derive(Debug, Clone)]
pub struct NavRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub is_leaf: bool,
    pub is_expanded: bool,
    pub location: Option<Location>,
}

pub struct NavTree {
    arena: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    expanded: FxHashSet<NodeId>,
    selected: Option<NodeId>,
}

impl NavTree {
    pub fn new() -> Self {
        Self {
            arena: SlotMap::with_key(),
            roots: Vec::new(),
            expanded: FxHashSet::default(),
            selected: None,
        }
    }

    /// Adds a top-level folder. Roots start expanded, everything else
    /// starts collapsed.
    pub fn add_root(&mut self, name: impl AsRef<str>) -> Result<NodeId, NavTreeError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(NavTreeError::EmptyName);
        }
        let id = self.arena.insert(Node {
            name: CompactString::new(name),
            location: None,
            children: Vec::new(),
        });
        self.roots.push(id);
        self.expanded.insert(id);
        if self.selected.is_none() {
            self.selected = Some(id);
        }
        Ok(id)
    }

    pub fn add_folder(
        &mut self,
        parent: NodeId,
        name: impl AsRef<str>,
    ) -> Result<NodeId, NavTreeError> {
        self.insert_child(parent, name.as_ref(), None)
    }

    pub fn add_leaf(
        &mut self,
        parent: NodeId,
        name: impl AsRef<str>,
        location: Location,
    ) -> Result<NodeId, NavTreeError> {
        if location.is_empty() {
            return Err(NavTreeError::EmptyLocation);
        }
        self.insert_child(parent, name.as_ref(), Some(location))
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        name: &str,
        location: Option<Location>,
    ) -> Result<NodeId, NavTreeError> {
        if name.is_empty() {
            return Err(NavTreeError::EmptyName);
        }
        {
            let parent_ro = self.arena.get(parent).ok_or(NavTreeError::InvalidNodeId)?;
            if parent_ro.location.is_some() {
                return Err(NavTreeError::ParentIsLeaf);
            }
        }

        let id = self.arena.insert(Node {
            name: CompactString::new(name),
            location,
            children: Vec::new(),
        });
        self.arena
            .get_mut(parent)
            .ok_or(NavTreeError::InvalidNodeId)?
            .children
            .push(id);
        Ok(id)
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.name.as_str())
    }

    pub fn location(&self, id: NodeId) -> Option<&Location> {
        self.arena.get(id).and_then(|n| n.location.as_ref())
    }

    /// A node is a leaf iff it has no children. A folder declared with
    /// zero children reports as a leaf here, which is what makes
    /// [`toggle_expand`](Self::toggle_expand) a no-op on it.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.arena
            .get(id)
            .map(|n| n.children.is_empty())
            .unwrap_or(true)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flips the expansion flag of a folder. Silent no-op on leaves,
    /// empty folders and unknown ids; double toggle restores the
    /// original state.
    pub fn toggle_expand(&mut self, id: NodeId) {
        if self.is_leaf(id) {
            return;
        }
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// The one click handler of the tree: a leaf yields its location and
    /// changes nothing, a folder toggles and yields nothing. A childless
    /// location-less node does neither.
    pub fn select(&mut self, id: NodeId) -> Option<Location> {
        let node = self.arena.get(id)?;
        if let Some(location) = node.location.clone() {
            return Some(location);
        }
        self.toggle_expand(id);
        None
    }

    /// Collapse-aware pre-order flattening, recomputed on every render.
    /// Children of a folder appear only while it is expanded; depth is 0
    /// for top-level entries and grows by one per nesting level.
    pub fn flatten(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = Vec::new();
        for &root in self.roots.iter().rev() {
            stack.push((root, 0));
        }

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            let is_expanded = self.expanded.contains(&id);
            rows.push(NavRow {
                id,
                depth,
                name: node.name.clone(),
                is_leaf: node.children.is_empty(),
                is_expanded,
                location: node.location.clone(),
            });

            if is_expanded {
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }

        rows
    }
}

impl Default for NavTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (NavTree, NodeId, NodeId, NodeId) {
        let mut tree = NavTree::new();
        let root = tree.add_root("PORTFOLIO").unwrap();
        let home = tree
            .add_leaf(root, "Home.jsx", Location::new("/home"))
            .unwrap();
        let projects = tree.add_folder(root, "Projects").unwrap();
        tree.add_leaf(projects, "Mitra.py", Location::new("/projects/ml/1"))
            .unwrap();
        (tree, root, home, projects)
    }

    #[test]
    fn test_root_starts_expanded_children_collapsed() {
        let (tree, root, _, projects) = sample_tree();
        assert!(tree.is_expanded(root));
        assert!(!tree.is_expanded(projects));
    }

    #[test]
    fn test_toggle_expand_involution() {
        let (mut tree, _, _, projects) = sample_tree();
        let before = tree.is_expanded(projects);
        let rows_before: Vec<_> = tree.flatten().iter().map(|r| r.name.clone()).collect();
        tree.toggle_expand(projects);
        assert_ne!(tree.is_expanded(projects), before);
        tree.toggle_expand(projects);
        assert_eq!(tree.is_expanded(projects), before);
        let rows_after: Vec<_> = tree.flatten().iter().map(|r| r.name.clone()).collect();
        assert_eq!(rows_before, rows_after);
    }

    #[test]
    fn test_toggle_expand_on_leaf_is_noop() {
        let (mut tree, _, home, _) = sample_tree();
        tree.toggle_expand(home);
        assert!(!tree.is_expanded(home));
    }

    #[test]
    fn test_flatten_respects_collapse() {
        let (mut tree, _, _, projects) = sample_tree();
        let rows = tree.flatten();
        assert!(rows.iter().all(|r| r.name != "Mitra.py"));

        tree.toggle_expand(projects);
        let rows = tree.flatten();
        assert!(rows.iter().any(|r| r.name == "Mitra.py"));
    }

    #[test]
    fn test_flatten_depths() {
        let (mut tree, root, _, projects) = sample_tree();
        tree.toggle_expand(projects);
        let rows = tree.flatten();
        assert_eq!(rows[0].id, root);
        assert_eq!(rows[0].depth, 0);
        let mitra = rows.iter().find(|r| r.name == "Mitra.py").unwrap();
        assert_eq!(mitra.depth, 2);
    }

    #[test]
    fn test_select_is_polymorphic() {
        let (mut tree, _, home, projects) = sample_tree();
        assert_eq!(tree.select(home), Some(Location::new("/home")));
        assert!(!tree.is_expanded(home));

        assert_eq!(tree.select(projects), None);
        assert!(tree.is_expanded(projects));
        assert_eq!(tree.select(projects), None);
        assert!(!tree.is_expanded(projects));
    }

    #[test]
    fn test_select_empty_folder_is_noop() {
        let mut tree = NavTree::new();
        let root = tree.add_root("PORTFOLIO").unwrap();
        let empty = tree.add_folder(root, "Drafts").unwrap();
        assert_eq!(tree.select(empty), None);
        assert!(!tree.is_expanded(empty));
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        let mut tree = NavTree::new();
        let root = tree.add_root("PORTFOLIO").unwrap();
        let home = tree
            .add_leaf(root, "Home.jsx", Location::new("/home"))
            .unwrap();

        assert!(matches!(
            tree.add_leaf(root, "x", Location::new("")),
            Err(NavTreeError::EmptyLocation)
        ));
        assert!(matches!(
            tree.add_leaf(home, "nested", Location::new("/nested")),
            Err(NavTreeError::ParentIsLeaf)
        ));
        assert!(matches!(
            tree.add_folder(root, ""),
            Err(NavTreeError::EmptyName)
        ));
    }
}

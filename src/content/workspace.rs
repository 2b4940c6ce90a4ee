//! The static workspace specification.
//!
//! One root folder, open by default, with the portfolio's documents
//! underneath. The shape never changes at runtime; the tree only tracks
//! which folders are expanded.

use crate::models::{Location, NavTree, NavTreeError};

pub const DEFAULT_LOCATION: &str = "/home";
pub const DEFAULT_TAB_TITLE: &str = "Home.jsx";

pub fn portfolio_tree() -> Result<NavTree, NavTreeError> {
    let mut tree = NavTree::new();
    let root = tree.add_root("PORTFOLIO")?;

    tree.add_leaf(root, "Home.jsx", Location::new("/home"))?;

    let projects = tree.add_folder(root, "Projects")?;
    let frontend = tree.add_folder(projects, "Frontend")?;
    tree.add_leaf(frontend, "Lumenly.jsx", Location::new("/projects/frontend/1"))?;
    tree.add_leaf(frontend, "PixelBoard.jsx", Location::new("/projects/frontend/2"))?;

    let backend = tree.add_folder(projects, "Backend")?;
    tree.add_leaf(backend, "RestHive.js", Location::new("/projects/backend/1"))?;

    let fullstack = tree.add_folder(projects, "FullStack")?;
    tree.add_leaf(fullstack, "CampusERP.jsx", Location::new("/projects/fullstack/1"))?;
    tree.add_leaf(fullstack, "BookBarn.jsx", Location::new("/projects/fullstack/2"))?;
    tree.add_leaf(fullstack, "ThreadSpace.jsx", Location::new("/projects/fullstack/3"))?;

    let ml = tree.add_folder(projects, "ML")?;
    tree.add_leaf(ml, "Mitra.py", Location::new("/projects/ml/1"))?;
    tree.add_leaf(ml, "QueryGenie.py", Location::new("/projects/ml/2"))?;

    let android = tree.add_folder(projects, "Android")?;
    tree.add_leaf(android, "Commute.jsx", Location::new("/projects/android/1"))?;

    let cpp = tree.add_folder(projects, "C++")?;
    tree.add_leaf(cpp, "MiniMart.cpp", Location::new("/projects/cpp/1"))?;

    tree.add_leaf(root, "Skills.jsx", Location::new("/skills"))?;
    tree.add_leaf(root, "Experience.jsx", Location::new("/experience"))?;
    tree.add_leaf(root, "Education.jsx", Location::new("/education"))?;
    tree.add_leaf(root, "Contact.jsx", Location::new("/contact"))?;
    tree.add_leaf(root, "README.md", Location::new("/about"))?;

    Ok(tree)
}

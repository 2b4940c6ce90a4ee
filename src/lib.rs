//! termfolio - a developer portfolio that pretends to be an IDE
//!
//! Module structure:
//! - core: framework (View, InputEvent, EventResult)
//! - models: data models (NavTree, TabStrip, Location)
//! - services: navigation, content resolution, config
//! - content: the static workspace layout and portfolio pages
//! - views: render surfaces (ExplorerView, TabRowView, ContentView)
//! - app: application layer (Workbench, UiTheme)

pub mod app;
pub mod content;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod views;

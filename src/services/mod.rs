pub mod config;
pub mod content;
pub mod navigation;

pub use config::UiConfig;
pub use content::{ContentKind, ContentService, Page};
pub use navigation::NavigationService;

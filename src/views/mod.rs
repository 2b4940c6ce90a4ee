pub mod content;
pub mod explorer;
pub mod tab_row;

pub use content::ContentView;
pub use explorer::ExplorerView;
pub use tab_row::{TabHit, TabRowView};

pub mod event;
pub mod view;

pub use event::InputEvent;
pub use view::{ActiveArea, EventResult, View};

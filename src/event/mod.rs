mod bus;
mod events;
mod notices;

pub use bus::EventBus;
pub use events::{EditorEvent, Notice, NoticeLevel};
pub use notices::NoticeLog;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

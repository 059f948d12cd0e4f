use std::cell::RefCell;

use crate::event::{EditorEvent, EventHandler};

/// Broadcasts editor events to every subscribed handler, in subscription order.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Handlers must not emit from inside `handle_event`.
    pub fn emit(&self, event: EditorEvent) {
        log::debug!("Event: {:?}", event);
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Notice, NoticeLog};

    #[test]
    fn test_notices_reach_subscribers() {
        let bus = EventBus::new();
        let log = NoticeLog::new();
        bus.subscribe(Box::new(log.clone()));

        bus.emit(EditorEvent::PageAdded { index: 1 });
        bus.emit(EditorEvent::Notice(Notice::error("boom")));

        assert_eq!(log.drain(), vec![Notice::error("boom")]);
        assert!(log.is_empty());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use super::{EditorEvent, EventHandler, Notice};

/// Collects notices into a shared list the UI drains each frame.
#[derive(Debug, Default, Clone)]
pub struct NoticeLog {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every notice received since the last call.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }
}

impl EventHandler for NoticeLog {
    fn handle_event(&mut self, event: &EditorEvent) {
        if let EditorEvent::Notice(notice) = event {
            self.notices.borrow_mut().push(notice.clone());
        }
    }
}

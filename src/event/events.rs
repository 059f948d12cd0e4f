use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short message for the user, shown transiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ProjectCreated {
        name: String,
    },
    ProjectOpened {
        name: String,
    },
    PageAdded {
        index: usize,
    },
    PageChanged {
        index: usize,
    },
    ElementAdded {
        page: usize,
        index: usize,
    },
    ElementEdited {
        page: usize,
        index: usize,
        field: &'static str,
    },
    SelectionChanged(Option<Selection>),
    DownloadReady {
        file_name: String,
    },
    Notice(Notice),
}

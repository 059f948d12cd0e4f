use thiserror::Error;

/// Errors raised by editor operations.
///
/// Every operation validates before it mutates, so an `Err` always means the
/// project and surface were left exactly as they were.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No active project. Create a project first.")]
    NoActiveProject,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Page index {index} is out of range (project has {len} pages)")]
    OutOfRange { index: i64, len: usize },

    #[error("Failed to (de)serialize project: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type EditorResult<T> = Result<T, EditorError>;

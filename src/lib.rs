#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod file_handler;
pub mod fonts;
pub mod inspector;
pub mod panels;
pub mod prompt;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod surface;
pub mod templates;
pub mod texture_manager;

pub use app::YearbookApp;
pub use command::Command;
pub use config::EditorConfig;
pub use document::{Page, Project};
pub use editor::{Editor, Outcome};
pub use element::{Element, ElementType, ImageElement, TextElement};
pub use error::{EditorError, EditorResult};
pub use renderer::Renderer;
pub use state::AppState;
pub use surface::Surface;
pub use templates::TemplateKind;

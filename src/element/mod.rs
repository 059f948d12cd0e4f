use egui::{Pos2, Rect, Vec2};
use ::image::RgbaImage;
use serde::{Deserialize, Serialize};

mod common;
pub(crate) mod image;
pub(crate) mod text;

pub use self::image::{ImageElement, ImageRef};
pub use self::text::TextElement;

use crate::error::EditorResult;
use crate::fonts::FontBook;

/// Common trait that all page elements implement
pub trait Element {
    /// Tag used for this element in the project file
    fn element_type(&self) -> &'static str;

    /// Anchor point: the baseline start for text, the top-left for images
    fn position(&self) -> Pos2;

    /// Bounding rectangle in canvas pixels
    fn rect(&self) -> Rect;

    /// Test if the element contains the given position (edges included)
    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }

    /// Move the element by the given delta
    fn translate(&mut self, delta: Vec2) -> EditorResult<()>;

    /// Paint the element onto the surface
    fn draw(&self, surface: &mut RgbaImage, fonts: &FontBook);
}

/// Enumeration of all element types a page can hold
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementType {
    #[serde(rename = "text")]
    Text(TextElement),
    #[serde(rename = "img")]
    Image(ImageElement),
}

impl ElementType {
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            ElementType::Text(t) => Some(t),
            ElementType::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            ElementType::Image(i) => Some(i),
            ElementType::Text(_) => None,
        }
    }

    /// Recompute cached text metrics (no-op for images).
    pub fn remeasure(&mut self, fonts: &FontBook) {
        if let ElementType::Text(t) = self {
            t.remeasure(fonts);
        }
    }

    pub(crate) fn validate(&self) -> EditorResult<()> {
        match self {
            ElementType::Text(t) => t.validate(),
            ElementType::Image(i) => i.validate(),
        }
    }
}

impl Element for ElementType {
    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Text(t) => t.element_type(),
            ElementType::Image(i) => i.element_type(),
        }
    }

    fn position(&self) -> Pos2 {
        match self {
            ElementType::Text(t) => t.position(),
            ElementType::Image(i) => i.position(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementType::Text(t) => t.rect(),
            ElementType::Image(i) => i.rect(),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            ElementType::Text(t) => t.hit_test(pos),
            ElementType::Image(i) => i.hit_test(pos),
        }
    }

    fn translate(&mut self, delta: Vec2) -> EditorResult<()> {
        match self {
            ElementType::Text(t) => t.translate(delta),
            ElementType::Image(i) => i.translate(delta),
        }
    }

    fn draw(&self, surface: &mut RgbaImage, fonts: &FontBook) {
        match self {
            ElementType::Text(t) => t.draw(surface, fonts),
            ElementType::Image(i) => i.draw(surface, fonts),
        }
    }
}

impl From<TextElement> for ElementType {
    fn from(text: TextElement) -> Self {
        ElementType::Text(text)
    }
}

impl From<ImageElement> for ElementType {
    fn from(image: ImageElement) -> Self {
        ElementType::Image(image)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::config::TextDefaults;

    /// Create a text element styled with the configured defaults
    pub fn create_default_text(
        text: impl Into<String>,
        position: Pos2,
        defaults: &TextDefaults,
        fonts: &FontBook,
    ) -> EditorResult<ElementType> {
        TextElement::new(
            text,
            position,
            defaults.font_size,
            defaults.color.clone(),
            defaults.font_family.clone(),
            fonts,
        )
        .map(ElementType::Text)
    }

    /// Create an image element at its natural size
    pub fn create_image(image: ImageRef, position: Pos2) -> EditorResult<ElementType> {
        ImageElement::natural(image, position).map(ElementType::Image)
    }
}

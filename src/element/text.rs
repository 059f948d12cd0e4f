use egui::{Pos2, Rect, Vec2, pos2};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use super::Element;
use super::common::{MAX_FONT_SIZE, validate_coordinate, validate_size};
use crate::color::parse_css_color;
use crate::error::EditorResult;
use crate::fonts::FontBook;

/// A single line of text. `y` is the baseline; the glyphs extend upwards.
///
/// The rendered width is measured once whenever text, family or size change
/// and cached here, so hit-testing never needs a font.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    text: String,
    x: f32,
    y: f32,
    font_size: f32,
    color: String,
    font_family: String,

    #[serde(skip)]
    measured_width: f32,
}

impl std::fmt::Debug for TextElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextElement")
            .field("text", &self.text)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("font_size", &self.font_size)
            .field("color", &self.color)
            .field("font_family", &self.font_family)
            .finish()
    }
}

// The measured width is derived data and is not part of element identity.
impl PartialEq for TextElement {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.x == other.x
            && self.y == other.y
            && self.font_size == other.font_size
            && self.color == other.color
            && self.font_family == other.font_family
    }
}

impl TextElement {
    pub fn new(
        text: impl Into<String>,
        position: Pos2,
        font_size: f32,
        color: impl Into<String>,
        font_family: impl Into<String>,
        fonts: &FontBook,
    ) -> EditorResult<Self> {
        let mut element = Self {
            text: text.into(),
            x: position.x,
            y: position.y,
            font_size,
            color: color.into(),
            font_family: font_family.into(),
            measured_width: 0.0,
        };
        element.validate()?;
        element.remeasure(fonts);
        Ok(element)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn measured_width(&self) -> f32 {
        self.measured_width
    }

    pub fn set_text(&mut self, text: impl Into<String>, fonts: &FontBook) {
        self.text = text.into();
        self.remeasure(fonts);
    }

    pub fn set_font_size(&mut self, font_size: f32, fonts: &FontBook) -> EditorResult<()> {
        validate_size("font size", font_size, MAX_FONT_SIZE)?;
        self.font_size = font_size;
        self.remeasure(fonts);
        Ok(())
    }

    pub fn set_font_family(&mut self, font_family: impl Into<String>, fonts: &FontBook) {
        self.font_family = font_family.into();
        self.remeasure(fonts);
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> EditorResult<()> {
        let color = color.into();
        parse_css_color(&color)?;
        self.color = color;
        Ok(())
    }

    pub fn set_position(&mut self, position: Pos2) -> EditorResult<()> {
        validate_coordinate("x", position.x)?;
        validate_coordinate("y", position.y)?;
        self.x = position.x;
        self.y = position.y;
        Ok(())
    }

    /// Refresh the cached width, e.g. after loading from disk.
    pub fn remeasure(&mut self, fonts: &FontBook) {
        self.measured_width = fonts.measure(&self.font_family, self.font_size, &self.text);
    }

    /// Check the invariants a deserialized element may violate.
    pub(crate) fn validate(&self) -> EditorResult<()> {
        validate_coordinate("x", self.x)?;
        validate_coordinate("y", self.y)?;
        validate_size("font size", self.font_size, MAX_FONT_SIZE)?;
        parse_css_color(&self.color)?;
        Ok(())
    }
}

impl Element for TextElement {
    fn element_type(&self) -> &'static str {
        "text"
    }

    fn position(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    fn rect(&self) -> Rect {
        Rect::from_min_max(
            pos2(self.x, self.y - self.font_size),
            pos2(self.x + self.measured_width, self.y),
        )
    }

    fn translate(&mut self, delta: Vec2) -> EditorResult<()> {
        self.set_position(self.position() + delta)
    }

    fn draw(&self, surface: &mut RgbaImage, fonts: &FontBook) {
        let color = parse_css_color(&self.color).unwrap_or_else(|e| {
            log::warn!("Drawing '{}' in white: {}", self.text, e);
            Rgba([255, 255, 255, 255])
        });
        fonts.draw_text(surface, self, color);
    }
}

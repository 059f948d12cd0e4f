use image::Rgba;

use crate::color::parse_css_color;
use crate::config::EditorConfig;
use crate::document::Page;
use crate::element::Element;
use crate::error::EditorResult;
use crate::fonts::FontBook;
use crate::state::AppState;
use crate::surface::Surface;

/// Paints pages onto a [`Surface`].
///
/// Every call is a full repaint: clear to the background, then draw each
/// element in list order. There is no invalidation tracking, so callers
/// repaint after every mutation.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Rgba<u8>,
    fonts: FontBook,
}

impl Renderer {
    pub fn new(background: Rgba<u8>, fonts: FontBook) -> Self {
        Self { background, fonts }
    }

    pub fn from_config(config: &EditorConfig) -> EditorResult<Self> {
        let background = parse_css_color(&config.background)?;
        Ok(Self::new(background, FontBook::from_config(config)?))
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// Fonts used for drawing, shared with text measurement.
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn clear(&self, surface: &mut Surface) {
        let background = self.background;
        for pixel in surface.pixels_mut().pixels_mut() {
            *pixel = background;
        }
        surface.mark_rendered();
    }

    pub fn render(&self, surface: &mut Surface, page: &Page) {
        self.clear(surface);
        for element in page.elements() {
            element.draw(surface.pixels_mut(), &self.fonts);
        }
        log::debug!("Rendered page with {} elements", page.elements().len());
    }

    /// Repaint the active page, or just the background when no project is open.
    pub fn render_state(&self, surface: &mut Surface, state: &AppState) {
        match state.current_page() {
            Some(page) => self.render(surface, page),
            None => self.clear(surface),
        }
    }
}

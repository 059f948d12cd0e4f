use image::{Rgba, RgbaImage};

use crate::color::parse_css_color;
use crate::config::EditorConfig;
use crate::error::EditorResult;

/// The raster the renderer paints into and the exporters read from.
///
/// A new surface is already filled with the background colour, so exporting
/// before the first repaint yields a background-only image.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
    revision: u64,
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, background),
            revision: 0,
        }
    }

    pub fn from_config(config: &EditorConfig) -> EditorResult<Self> {
        let background = parse_css_color(&config.background)?;
        Ok(Self::new(config.canvas_width, config.canvas_height, background))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// Whether a repaint has happened since the surface was created.
    pub fn has_been_rendered(&self) -> bool {
        self.revision > 0
    }

    /// Bumped on every repaint; lets viewers skip re-uploading unchanged pixels.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.revision += 1;
    }

    /// Number of pixels that differ from `background`.
    pub fn count_non_background(&self, background: Rgba<u8>) -> usize {
        self.pixels.pixels().filter(|p| **p != background).count()
    }
}

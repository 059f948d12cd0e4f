use std::sync::Arc;

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use image::imageops;
use image::{Pixel, RgbaImage};
use serde::{Deserialize, Serialize};

use super::Element;
use super::common::{MAX_IMAGE_SIDE, validate_coordinate, validate_size};
use crate::error::EditorResult;
use crate::fonts::FontBook;

/// Shared handle to decoded pixels. Cloning an element never copies them.
pub type ImageRef = Arc<RgbaImage>;

/// A raster image drawn scaled to `width` x `height` with its top-left at `(x, y)`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ImageElement {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(rename = "src", with = "data_url")]
    image: ImageRef,
}

// Custom Debug implementation so the pixel buffer isn't dumped
impl std::fmt::Debug for ImageElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageElement")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &self.image.dimensions())
            .finish()
    }
}

impl PartialEq for ImageElement {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
            && (Arc::ptr_eq(&self.image, &other.image)
                || (self.image.dimensions() == other.image.dimensions()
                    && self.image.as_raw() == other.image.as_raw()))
    }
}

impl ImageElement {
    pub fn new(image: ImageRef, position: Pos2, size: Vec2) -> EditorResult<Self> {
        let element = Self {
            x: position.x,
            y: position.y,
            width: size.x,
            height: size.y,
            image,
        };
        element.validate()?;
        Ok(element)
    }

    /// Place an image at its natural pixel size.
    pub fn natural(image: ImageRef, position: Pos2) -> EditorResult<Self> {
        let (w, h) = image.dimensions();
        Self::new(image, position, vec2(w as f32, h as f32))
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn set_position(&mut self, position: Pos2) -> EditorResult<()> {
        validate_coordinate("x", position.x)?;
        validate_coordinate("y", position.y)?;
        self.x = position.x;
        self.y = position.y;
        Ok(())
    }

    pub fn set_size(&mut self, size: Vec2) -> EditorResult<()> {
        validate_size("width", size.x, MAX_IMAGE_SIDE)?;
        validate_size("height", size.y, MAX_IMAGE_SIDE)?;
        self.width = size.x;
        self.height = size.y;
        Ok(())
    }

    pub(crate) fn validate(&self) -> EditorResult<()> {
        validate_coordinate("x", self.x)?;
        validate_coordinate("y", self.y)?;
        validate_size("width", self.width, MAX_IMAGE_SIDE)?;
        validate_size("height", self.height, MAX_IMAGE_SIDE)?;
        Ok(())
    }
}

impl Element for ImageElement {
    fn element_type(&self) -> &'static str {
        "img"
    }

    fn position(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    fn rect(&self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }

    fn translate(&mut self, delta: Vec2) -> EditorResult<()> {
        self.set_position(self.position() + delta)
    }

    fn draw(&self, surface: &mut RgbaImage, _fonts: &FontBook) {
        let left = self.x.round() as i64;
        let top = self.y.round() as i64;
        let width = self.width.round().max(1.0) as i64;
        let height = self.height.round().max(1.0) as i64;

        // Only the part that lands on the surface is resampled.
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = left.saturating_add(width).min(i64::from(surface.width()));
        let y1 = top.saturating_add(height).min(i64::from(surface.height()));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let v = ((y - top) as f32 + 0.5) / height as f32;
            for x in x0..x1 {
                let u = ((x - left) as f32 + 0.5) / width as f32;
                if let Some(pixel) = imageops::sample_bilinear(&*self.image, u, v) {
                    surface.get_pixel_mut(x as u32, y as u32).blend(&pixel);
                }
            }
        }
    }
}

/// Pixels travel inside the project file as a PNG data URL.
mod data_url {
    use std::io::Cursor;
    use std::sync::Arc;

    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use image::ImageFormat;
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    use super::ImageRef;

    const PREFIX: &str = "data:image/png;base64,";

    pub fn serialize<S: Serializer>(image: &ImageRef, serializer: S) -> Result<S::Ok, S::Error> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&format!("{}{}", PREFIX, STANDARD.encode(png)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ImageRef, D::Error> {
        let url = String::deserialize(deserializer)?;
        let payload = match url.split_once(";base64,") {
            Some((scheme, payload)) if scheme.starts_with("data:image/") => payload,
            _ => return Err(de::Error::custom("image source must be a base64 data URL")),
        };
        let bytes = STANDARD
            .decode(payload)
            .map_err(<D::Error as de::Error>::custom)?;
        let decoded = image::load_from_memory(&bytes).map_err(<D::Error as de::Error>::custom)?;
        Ok(Arc::new(decoded.to_rgba8()))
    }
}

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::config::EditorConfig;
use crate::element::{Element, TextElement};
use crate::error::{EditorError, EditorResult};

/// Font families offered by the inspector.
pub const FONT_CHOICES: &[&str] = &["Arial", "Georgia", "Verdana"];

/// Resolves CSS font family names to loaded fonts.
///
/// Lookups are case-insensitive. Families without a registered font fall back
/// to egui's built-in proportional font, so every element can always be
/// measured and drawn.
#[derive(Clone)]
pub struct FontBook {
    fallback: FontArc,
    families: HashMap<String, FontArc>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.families.keys().collect();
        names.sort();
        f.debug_struct("FontBook").field("families", &names).finish()
    }
}

impl FontBook {
    /// A font book that only knows the built-in font.
    pub fn builtin() -> EditorResult<Self> {
        Ok(Self {
            fallback: builtin_proportional_font()?,
            families: HashMap::new(),
        })
    }

    /// Built-in font plus every family listed in the config.
    pub fn from_config(config: &EditorConfig) -> EditorResult<Self> {
        let mut book = Self::builtin()?;
        for (family, path) in &config.fonts {
            book.load_file(family, path)?;
        }
        Ok(book)
    }

    pub fn load_file(&mut self, family: &str, path: &Path) -> EditorResult<()> {
        let bytes = std::fs::read(path)?;
        self.register(family, bytes)?;
        log::info!("Loaded font '{}' from {}", family, path.display());
        Ok(())
    }

    pub fn register(&mut self, family: &str, bytes: Vec<u8>) -> EditorResult<()> {
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| EditorError::Font(format!("{}: {}", family, e)))?;
        self.families.insert(family.to_lowercase(), font);
        Ok(())
    }

    pub fn has_family(&self, family: &str) -> bool {
        self.families.contains_key(&family.to_lowercase())
    }

    fn font(&self, family: &str) -> &FontArc {
        self.families
            .get(&family.to_lowercase())
            .unwrap_or(&self.fallback)
    }

    /// Horizontal advance of `text` at a CSS pixel size, including kerning.
    pub fn measure(&self, family: &str, size: f32, text: &str) -> f32 {
        let font = self.font(family);
        let scaled = font.as_scaled(px_scale(font, size));

        let mut width = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Fill a text element with its baseline at `y`, canvas style.
    pub fn draw_text(&self, surface: &mut RgbaImage, element: &TextElement, color: Rgba<u8>) {
        let font = self.font(element.font_family());
        let scale = px_scale(font, element.font_size());
        let pos = element.position();
        let top = pos.y - font.as_scaled(scale).ascent();
        imageproc::drawing::draw_text_mut(
            surface,
            color,
            pos.x.round() as i32,
            top.round() as i32,
            scale,
            font,
            element.text(),
        );
    }
}

/// CSS sizes are em sizes; ab_glyph scales by line height.
fn px_scale(font: &FontArc, size: f32) -> PxScale {
    let height = font.height_unscaled();
    let units_per_em = font.units_per_em().unwrap_or(height);
    PxScale::from(size * height / units_per_em)
}

fn builtin_proportional_font() -> EditorResult<FontArc> {
    let definitions = egui::FontDefinitions::default();
    let name = definitions
        .families
        .get(&egui::FontFamily::Proportional)
        .and_then(|names| names.first())
        .ok_or_else(|| EditorError::Font("egui has no proportional font".to_owned()))?;
    let data = definitions
        .font_data
        .get(name)
        .ok_or_else(|| EditorError::Font(format!("missing font data for '{}'", name)))?;

    let font = match data.font.clone() {
        Cow::Borrowed(bytes) => FontArc::try_from_slice(bytes),
        Cow::Owned(bytes) => FontArc::try_from_vec(bytes),
    };
    font.map_err(|e| EditorError::Font(format!("{}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_grows_with_text_and_size() {
        let fonts = FontBook::builtin().unwrap();
        let short = fonts.measure("Arial", 20.0, "Hi");
        let long = fonts.measure("Arial", 20.0, "Hi there");
        let big = fonts.measure("Arial", 40.0, "Hi");

        assert!(short > 0.0);
        assert!(long > short);
        assert!((big - 2.0 * short).abs() < 0.5);
        assert_eq!(fonts.measure("Arial", 20.0, ""), 0.0);
    }

    #[test]
    fn test_unknown_family_falls_back() {
        let fonts = FontBook::builtin().unwrap();
        assert!(!fonts.has_family("Georgia"));
        assert_eq!(
            fonts.measure("Georgia", 26.0, "Clubs"),
            fonts.measure("Verdana", 26.0, "Clubs")
        );
    }

    #[test]
    fn test_register_rejects_garbage() {
        let mut fonts = FontBook::builtin().unwrap();
        assert!(matches!(
            fonts.register("Broken", vec![1, 2, 3]),
            Err(EditorError::Font(_))
        ));
        assert!(!fonts.has_family("Broken"));
    }
}

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::surface::Surface;

/// Keeps the GPU copy of the canvas surface in step with its pixels.
///
/// The upload is keyed by [`Surface::revision`], so frames without a repaint
/// reuse the existing texture.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("has_texture", &self.handle.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for the current surface, uploading only when it changed.
    pub fn canvas_texture(&mut self, ctx: &Context, surface: &Surface) -> TextureId {
        let revision = surface.revision();
        if self.uploaded_revision == Some(revision) {
            if let Some(handle) = &self.handle {
                return handle.id();
            }
        }

        let image = to_color_image(surface);
        let handle = match self.handle.take() {
            Some(mut handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle
            }
            None => ctx.load_texture("canvas", image, TextureOptions::NEAREST),
        };
        log::trace!("Uploaded canvas revision {}", revision);
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded_revision = Some(revision);
        id
    }
}

fn to_color_image(surface: &Surface) -> ColorImage {
    let size = [surface.width() as usize, surface.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, surface.pixels().as_raw())
}

use std::path::Path;
use std::sync::Arc;

use egui::{Pos2, pos2};

use crate::command::Command;
use crate::element::ImageRef;
use crate::error::EditorResult;
use crate::export::PROJECT_EXTENSION;

/// Turns files dropped on (or picked for) the window into editor commands.
#[derive(Debug, Default)]
pub struct FileHandler {
    processed_files: Vec<String>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files dropped on the window this frame
    pub fn dropped_files(ctx: &egui::Context) -> Vec<egui::DroppedFile> {
        ctx.input(|i| i.raw.dropped_files.clone())
    }

    /// Commands for newly dropped files. Images are centred on `canvas_center`.
    pub fn process_dropped_files(
        &mut self,
        files: &[egui::DroppedFile],
        canvas_center: Pos2,
    ) -> Vec<Command> {
        let mut commands = Vec::new();

        for file in files {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            // egui reports a drop for a single frame, but guard against repeats anyway
            if self.processed_files.contains(&file_name) {
                continue;
            }

            let bytes = match read_dropped_file(file) {
                Some(bytes) => bytes,
                None => {
                    log::warn!("Dropped file has no accessible data: {}", file_name);
                    continue;
                }
            };

            match command_for_file(&file_name, &file.mime, bytes, canvas_center) {
                Ok(Some(cmd)) => {
                    commands.push(cmd);
                    self.processed_files.push(file_name);
                }
                Ok(None) => log::warn!("Dropped file is not a supported type: {}", file_name),
                Err(err) => log::error!("Failed to load dropped file {}: {}", file_name, err),
            }
        }

        commands
    }

    /// Forget processed files, so the same file can be dropped again
    pub fn clear_processed_files(&mut self) {
        self.processed_files.clear();
    }
}

fn read_dropped_file(file: &egui::DroppedFile) -> Option<Vec<u8>> {
    if let Some(bytes) = &file.bytes {
        return Some(bytes.to_vec());
    }
    let path = file.path.as_ref()?;
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::error!("Failed to read {}: {}", path.display(), err);
            None
        }
    }
}

/// Project files open, image files are inserted, anything else is ignored.
pub fn command_for_file(
    file_name: &str,
    mime: &str,
    bytes: Vec<u8>,
    canvas_center: Pos2,
) -> EditorResult<Option<Command>> {
    if file_name.ends_with(PROJECT_EXTENSION) || mime == "application/json" {
        return Ok(Some(Command::OpenProject(bytes)));
    }
    if !is_image_file(file_name, mime) {
        return Ok(None);
    }

    let image = decode_image(&bytes)?;
    let (w, h) = image.dimensions();
    let position = pos2(
        (canvas_center.x - w as f32 / 2.0).max(0.0),
        (canvas_center.y - h as f32 / 2.0).max(0.0),
    );
    log::debug!("Decoded image {}: {}x{}", file_name, w, h);
    Ok(Some(Command::InsertImage { image, position }))
}

pub fn decode_image(bytes: &[u8]) -> EditorResult<ImageRef> {
    Ok(Arc::new(image::load_from_memory(bytes)?.to_rgba8()))
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file_name: &str, mime: &str) -> bool {
    if !mime.is_empty() {
        return mime.starts_with("image/");
    }
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(w, h, Rgba([255, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_image_is_centered() {
        let cmd = command_for_file("photo.png", "", png_bytes(100, 50), pos2(400.0, 300.0))
            .unwrap()
            .unwrap();
        match cmd {
            Command::InsertImage { image, position } => {
                assert_eq!(image.dimensions(), (100, 50));
                assert_eq!(position, pos2(350.0, 275.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_project_file_opens() {
        let cmd = command_for_file("Demo.yearbook.json", "", b"{}".to_vec(), Pos2::ZERO).unwrap();
        assert!(matches!(cmd, Some(Command::OpenProject(_))));
    }

    #[test]
    fn test_other_files_ignored() {
        assert!(command_for_file("notes.txt", "", vec![1, 2], Pos2::ZERO).unwrap().is_none());
        assert!(command_for_file("x.png", "", vec![1, 2], Pos2::ZERO).is_err());
    }
}

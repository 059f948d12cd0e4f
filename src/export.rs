use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::{DynamicImage, ImageFormat};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::error::{EditorError, EditorResult};
use crate::state::{self, AppState};
use crate::surface::Surface;

pub const PNG_FILE_NAME: &str = "yearbook.png";
pub const PDF_FILE_NAME: &str = "yearbook.pdf";
pub const PROJECT_EXTENSION: &str = ".yearbook.json";

/// A file ready to hand to the user; where it ends up is the caller's choice.
#[derive(Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Download {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Download")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Download {
    /// Write into `dir` under the suggested file name.
    pub fn save_in(&self, dir: &Path) -> EditorResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        self.save_as(&path)?;
        Ok(path)
    }

    pub fn save_as(&self, path: &Path) -> EditorResult<()> {
        std::fs::write(path, &self.bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(())
    }
}

/// What the export menu can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Pdf,
    Png,
    Print,
}

impl FromStr for ExportChoice {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "png" => Ok(Self::Png),
            "print" => Ok(Self::Print),
            other => Err(EditorError::InvalidInput(format!(
                "unknown export format '{}'",
                other
            ))),
        }
    }
}

/// The active project as `<name>.yearbook.json`.
pub fn export_json(state: &AppState) -> EditorResult<Download> {
    let project = state.require_project()?;
    Ok(Download {
        file_name: format!("{}{}", project.name(), PROJECT_EXTENSION),
        mime: "application/json",
        bytes: state::serialize(state)?,
    })
}

/// The surface pixels as `yearbook.png`.
pub fn export_png(surface: &Surface) -> EditorResult<Download> {
    Ok(Download {
        file_name: PNG_FILE_NAME.to_owned(),
        mime: "image/png",
        bytes: encode_png(surface)?,
    })
}

pub fn encode_png(surface: &Surface) -> EditorResult<Vec<u8>> {
    let mut bytes = Vec::new();
    surface
        .pixels()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// A single-page PDF, sized to the surface in pixel units, showing the surface.
pub fn export_pdf(surface: &Surface) -> EditorResult<Download> {
    Ok(Download {
        file_name: PDF_FILE_NAME.to_owned(),
        mime: "application/pdf",
        bytes: encode_pdf(surface)?,
    })
}

pub fn encode_pdf(surface: &Surface) -> EditorResult<Vec<u8>> {
    let width = i64::from(surface.width());
    let height = i64::from(surface.height());
    let rgb = DynamicImage::ImageRgba8(surface.pixels().clone()).to_rgb8();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => Object::Integer(width),
            "Height" => Object::Integer(height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => Object::Integer(8),
        },
        rgb.into_raw(),
    ));

    // Stretch the unit-square image over the whole page.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(height),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(height),
        ],
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_export_choice_parsing() {
        assert_eq!("PDF".parse::<ExportChoice>().unwrap(), ExportChoice::Pdf);
        assert_eq!(" png".parse::<ExportChoice>().unwrap(), ExportChoice::Png);
        assert_eq!("Print".parse::<ExportChoice>().unwrap(), ExportChoice::Print);
        assert!("gif".parse::<ExportChoice>().is_err());
    }

    #[test]
    fn test_json_needs_project() {
        assert!(matches!(
            export_json(&AppState::new()),
            Err(EditorError::NoActiveProject)
        ));
    }

    #[test]
    fn test_pdf_page_matches_surface() {
        let surface = Surface::new(64, 48, Rgba([30, 30, 30, 255]));
        let bytes = encode_pdf(&surface).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let dims: Vec<i64> = media_box.iter().map(|o| o.as_i64().unwrap()).collect();
        assert_eq!(dims, vec![0, 0, 64, 48]);
    }
}

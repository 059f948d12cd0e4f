use egui::Pos2;

use crate::element::ImageRef;
use crate::export::ExportChoice;
use crate::inspector::InspectorEdit;
use crate::templates::TemplateKind;

/// Everything the user can ask the editor to do.
#[derive(Clone, PartialEq)]
pub enum Command {
    /// Ask for a name, then start a fresh project with one empty page
    NewProject,
    /// Replace the active project with one decoded from a project file
    OpenProject(Vec<u8>),
    AddPage,
    SelectPage(i64),
    InsertTemplate(TemplateKind),
    /// Place a decoded image on the current page at its natural size
    InsertImage { image: ImageRef, position: Pos2 },
    /// Select the topmost element under the pointer, or clear the selection
    CanvasClick(Pos2),
    /// Select the element under the pointer, or ask for text and create one there
    CanvasDoubleClick(Pos2),
    /// Edit a field of the selected element
    Inspect(InspectorEdit),
    ClearSelection,
    SaveProject,
    /// Ask which format to export, then export
    ExportMenu,
    Export(ExportChoice),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::NewProject => write!(f, "NewProject"),
            Command::OpenProject(bytes) => f
                .debug_tuple("OpenProject")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Command::AddPage => write!(f, "AddPage"),
            Command::SelectPage(index) => f.debug_tuple("SelectPage").field(index).finish(),
            Command::InsertTemplate(kind) => f.debug_tuple("InsertTemplate").field(kind).finish(),
            Command::InsertImage { image, position } => f
                .debug_struct("InsertImage")
                .field("size", &image.dimensions())
                .field("position", position)
                .finish(),
            Command::CanvasClick(pos) => f.debug_tuple("CanvasClick").field(pos).finish(),
            Command::CanvasDoubleClick(pos) => {
                f.debug_tuple("CanvasDoubleClick").field(pos).finish()
            }
            Command::Inspect(edit) => f.debug_tuple("Inspect").field(edit).finish(),
            Command::ClearSelection => write!(f, "ClearSelection"),
            Command::SaveProject => write!(f, "SaveProject"),
            Command::ExportMenu => write!(f, "ExportMenu"),
            Command::Export(choice) => f.debug_tuple("Export").field(choice).finish(),
        }
    }
}

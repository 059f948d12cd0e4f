//! The `.yearbook.json` project format.
//!
//! ```text
//! { "name": "...", "currentPage": 0,
//!   "pages": [ { "elements": [ { "type": "text", "text": "...", "x": 10.0, ... } ] } ] }
//! ```

use super::AppState;
use crate::document::Project;
use crate::error::EditorResult;
use crate::fonts::FontBook;

/// Encode the active project.
pub fn serialize(state: &AppState) -> EditorResult<Vec<u8>> {
    let project = state.require_project()?;
    serialize_project(project)
}

pub fn serialize_project(project: &Project) -> EditorResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(project)?)
}

/// Decode a project, checking the invariants the file format can't express
/// and re-measuring text with the given fonts.
pub fn deserialize(bytes: &[u8], fonts: &FontBook) -> EditorResult<Project> {
    let mut project: Project = serde_json::from_slice(bytes)?;
    project.validate()?;
    project.remeasure(fonts);
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;

    #[test]
    fn test_serialize_requires_project() {
        assert!(matches!(
            serialize(&AppState::new()),
            Err(EditorError::NoActiveProject)
        ));
    }

    #[test]
    fn test_wire_format_field_names() {
        let fonts = FontBook::builtin().unwrap();
        let mut state = AppState::new();
        state.create_project("Demo").unwrap();
        let text = crate::element::TextElement::new(
            "Hi",
            egui::pos2(10.0, 20.0),
            20.0,
            "#fff",
            "Arial",
            &fonts,
        )
        .unwrap();
        state.add_element(text.into()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&serialize(&state).unwrap()).unwrap();
        assert_eq!(json["name"], "Demo");
        assert_eq!(json["currentPage"], 0);
        let element = &json["pages"][0]["elements"][0];
        assert_eq!(element["type"], "text");
        assert_eq!(element["text"], "Hi");
        assert_eq!(element["x"], 10.0);
        assert_eq!(element["y"], 20.0);
        assert_eq!(element["fontSize"], 20.0);
        assert_eq!(element["color"], "#fff");
        assert_eq!(element["fontFamily"], "Arial");
        assert!(element.get("measuredWidth").is_none());
    }

    #[test]
    fn test_invalid_documents_rejected() {
        let fonts = FontBook::builtin().unwrap();
        let no_pages = br#"{ "name": "X", "pages": [] }"#;
        assert!(matches!(deserialize(no_pages, &fonts), Err(EditorError::InvalidInput(_))));

        let bad_index = br#"{ "name": "X", "pages": [ { "elements": [] } ], "currentPage": 1 }"#;
        assert!(matches!(
            deserialize(bad_index, &fonts),
            Err(EditorError::OutOfRange { .. })
        ));

        let bad_size = br##"{ "name": "X", "pages": [ { "elements": [
            { "type": "text", "text": "a", "x": 0, "y": 0, "fontSize": 0,
              "color": "#fff", "fontFamily": "Arial" } ] } ] }"##;
        assert!(matches!(deserialize(bad_size, &fonts), Err(EditorError::InvalidInput(_))));

        assert!(matches!(
            deserialize(b"not json", &fonts),
            Err(EditorError::Serialization(_))
        ));
    }
}

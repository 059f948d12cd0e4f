//! Live property editing for the selected element.
//!
//! There is no edit/commit cycle: each [`InspectorEdit`] mutates the element
//! in place and the controller repaints straight after.

use egui::{pos2, vec2};

use crate::element::{Element, ElementType};
use crate::error::{EditorError, EditorResult};
use crate::fonts::FontBook;

/// A single field change coming from the inspector.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEdit {
    Text(String),
    FontFamily(String),
    FontSize(f32),
    Color(String),
    X(f32),
    Y(f32),
    Width(f32),
    Height(f32),
}

impl InspectorEdit {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::FontFamily(_) => "font",
            Self::FontSize(_) => "size",
            Self::Color(_) => "color",
            Self::X(_) => "x",
            Self::Y(_) => "y",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
        }
    }
}

/// Snapshot of the editable fields of one element, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorView {
    Text {
        text: String,
        font_family: String,
        font_size: f32,
        color: String,
        x: f32,
        y: f32,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl InspectorView {
    pub fn of(element: &ElementType) -> Self {
        let pos = element.position();
        match element {
            ElementType::Text(t) => Self::Text {
                text: t.text().to_owned(),
                font_family: t.font_family().to_owned(),
                font_size: t.font_size(),
                color: t.color().to_owned(),
                x: pos.x,
                y: pos.y,
            },
            ElementType::Image(i) => Self::Image {
                x: pos.x,
                y: pos.y,
                width: i.size().x,
                height: i.size().y,
            },
        }
    }
}

/// Apply one field edit. On error the element is unchanged.
pub fn apply(element: &mut ElementType, edit: InspectorEdit, fonts: &FontBook) -> EditorResult<()> {
    let pos = element.position();
    match (element, edit) {
        (ElementType::Text(t), InspectorEdit::Text(text)) => {
            if text.is_empty() {
                return Err(EditorError::InvalidInput("text must not be empty".to_owned()));
            }
            t.set_text(text, fonts);
            Ok(())
        }
        (ElementType::Text(t), InspectorEdit::FontFamily(family)) => {
            t.set_font_family(family, fonts);
            Ok(())
        }
        (ElementType::Text(t), InspectorEdit::FontSize(size)) => t.set_font_size(size, fonts),
        (ElementType::Text(t), InspectorEdit::Color(color)) => t.set_color(color),
        (ElementType::Text(t), InspectorEdit::X(x)) => t.set_position(pos2(x, pos.y)),
        (ElementType::Text(t), InspectorEdit::Y(y)) => t.set_position(pos2(pos.x, y)),
        (ElementType::Image(i), InspectorEdit::X(x)) => i.set_position(pos2(x, pos.y)),
        (ElementType::Image(i), InspectorEdit::Y(y)) => i.set_position(pos2(pos.x, y)),
        (ElementType::Image(i), InspectorEdit::Width(w)) => i.set_size(vec2(w, i.size().y)),
        (ElementType::Image(i), InspectorEdit::Height(h)) => i.set_size(vec2(i.size().x, h)),
        (element, edit) => Err(EditorError::InvalidInput(format!(
            "'{}' elements have no {} field",
            element.element_type(),
            edit.field_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TextElement;

    fn text(fonts: &FontBook) -> ElementType {
        TextElement::new("Hi", pos2(10.0, 20.0), 20.0, "#fff", "Arial", fonts)
            .unwrap()
            .into()
    }

    #[test]
    fn test_size_edit_remeasures() {
        let fonts = FontBook::builtin().unwrap();
        let mut element = text(&fonts);
        let before = element.rect();

        apply(&mut element, InspectorEdit::FontSize(40.0), &fonts).unwrap();

        let after = element.rect();
        assert_eq!(after.min.y, 20.0 - 40.0);
        assert!(after.width() > before.width() * 1.9);
    }

    #[test]
    fn test_invalid_edits_leave_element_unchanged() {
        let fonts = FontBook::builtin().unwrap();
        let mut element = text(&fonts);
        let original = element.clone();

        for edit in [
            InspectorEdit::FontSize(0.0),
            InspectorEdit::FontSize(-3.0),
            InspectorEdit::FontSize(1.0e6),
            InspectorEdit::Color("nope".to_owned()),
            InspectorEdit::X(f32::NAN),
            InspectorEdit::Text(String::new()),
            InspectorEdit::Width(10.0),
        ] {
            assert!(apply(&mut element, edit, &fonts).is_err());
            assert_eq!(element, original);
        }
    }

    #[test]
    fn test_view_reflects_edits() {
        let fonts = FontBook::builtin().unwrap();
        let mut element = text(&fonts);
        apply(&mut element, InspectorEdit::X(55.0), &fonts).unwrap();
        apply(&mut element, InspectorEdit::Color("#00ccff".to_owned()), &fonts).unwrap();
        apply(&mut element, InspectorEdit::FontFamily("Georgia".to_owned()), &fonts).unwrap();

        assert_eq!(
            InspectorView::of(&element),
            InspectorView::Text {
                text: "Hi".to_owned(),
                font_family: "Georgia".to_owned(),
                font_size: 20.0,
                color: "#00ccff".to_owned(),
                x: 55.0,
                y: 20.0,
            }
        );
    }
}

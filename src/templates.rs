use std::fmt;
use std::str::FromStr;

use egui::pos2;

use crate::element::{ElementType, TextElement};
use crate::error::{EditorError, EditorResult};
use crate::fonts::FontBook;
use crate::state::AppState;

/// Preset headings that can be dropped onto a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Sports,
    Classroom,
    Clubs,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Sports, Self::Classroom, Self::Clubs];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sports => "Sports",
            Self::Classroom => "Classroom",
            Self::Clubs => "Clubs",
        }
    }

    /// The heading this template inserts.
    pub fn element(self, fonts: &FontBook) -> EditorResult<ElementType> {
        let (text, x, y, size, color, family) = match self {
            Self::Sports => ("Team Roster", 300.0, 80.0, 30.0, "#ffcc00", "Georgia"),
            Self::Classroom => ("Class of 2025", 280.0, 100.0, 28.0, "#00ccff", "Arial"),
            Self::Clubs => ("Clubs & Activities", 260.0, 120.0, 26.0, "#99ff99", "Verdana"),
        };
        TextElement::new(text, pos2(x, y), size, color, family, fonts).map(ElementType::Text)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemplateKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sports" => Ok(Self::Sports),
            "classroom" => Ok(Self::Classroom),
            "clubs" => Ok(Self::Clubs),
            other => Err(EditorError::InvalidInput(format!("unknown template '{}'", other))),
        }
    }
}

/// Append the template's heading to the current page.
pub fn insert_template(
    state: &mut AppState,
    kind: TemplateKind,
    fonts: &FontBook,
) -> EditorResult<usize> {
    state.require_project()?;
    let element = kind.element(fonts)?;
    let index = state.add_element(element)?;
    log::info!("Inserted {} template", kind);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("sports".parse::<TemplateKind>().unwrap(), TemplateKind::Sports);
        assert_eq!(" Classroom ".parse::<TemplateKind>().unwrap(), TemplateKind::Classroom);
        assert_eq!("CLUBS".parse::<TemplateKind>().unwrap(), TemplateKind::Clubs);
        assert!("prom".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn test_template_contents() {
        let fonts = FontBook::builtin().unwrap();
        let sports = TemplateKind::Sports.element(&fonts).unwrap();
        let sports = sports.as_text().unwrap();
        assert_eq!(sports.text(), "Team Roster");
        assert_eq!(sports.font_size(), 30.0);
        assert_eq!(sports.color(), "#ffcc00");
        assert_eq!(sports.font_family(), "Georgia");

        let clubs = TemplateKind::Clubs.element(&fonts).unwrap();
        let clubs = clubs.as_text().unwrap();
        assert_eq!(clubs.text(), "Clubs & Activities");
        assert_eq!(clubs.font_family(), "Verdana");
    }

    #[test]
    fn test_insert_requires_project() {
        let fonts = FontBook::builtin().unwrap();
        let mut state = AppState::new();
        assert!(matches!(
            insert_template(&mut state, TemplateKind::Clubs, &fonts),
            Err(EditorError::NoActiveProject)
        ));
    }
}

use serde::{Deserialize, Serialize};

use crate::element::ElementType;
use crate::error::{EditorError, EditorResult};
use crate::fonts::FontBook;

/// An ordered collection of elements drawn together on one canvas.
///
/// List order is z-order: later elements draw on top and win hit-tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    elements: Vec<ElementType>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: ElementType) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&ElementType> {
        self.elements.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut ElementType> {
        self.elements.get_mut(index)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The top-level document: every page of one yearbook.
///
/// Always holds at least one page, and `current_page` is always a valid index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    name: String,
    pages: Vec<Page>,
    #[serde(default)]
    current_page: usize,
}

impl Project {
    /// A project with a single empty page.
    pub fn new(name: impl Into<String>) -> EditorResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EditorError::InvalidInput(
                "project name must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            name,
            pages: vec![Page::new()],
            current_page: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_page]
    }

    pub fn current_page_mut(&mut self) -> &mut Page {
        &mut self.pages[self.current_page]
    }

    /// Append an empty page. The active page stays where it is.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::new());
        self.pages.len() - 1
    }

    pub fn set_current_page(&mut self, index: i64) -> EditorResult<()> {
        let len = self.pages.len();
        match usize::try_from(index) {
            Ok(i) if i < len => {
                self.current_page = i;
                Ok(())
            }
            _ => Err(EditorError::OutOfRange { index, len }),
        }
    }

    /// Append to the current page, on top of everything already there.
    pub fn add_element(&mut self, element: ElementType) {
        self.current_page_mut().add_element(element);
    }

    /// Check the invariants a deserialized project may violate.
    pub(crate) fn validate(&self) -> EditorResult<()> {
        if self.name.trim().is_empty() {
            return Err(EditorError::InvalidInput(
                "project name must not be empty".to_owned(),
            ));
        }
        if self.pages.is_empty() {
            return Err(EditorError::InvalidInput(
                "project must have at least one page".to_owned(),
            ));
        }
        if self.current_page >= self.pages.len() {
            return Err(EditorError::OutOfRange {
                index: self.current_page as i64,
                len: self.pages.len(),
            });
        }
        self.pages
            .iter()
            .flat_map(|page| page.elements())
            .try_for_each(ElementType::validate)
    }

    pub(crate) fn remeasure(&mut self, fonts: &FontBook) {
        for element in self.pages.iter_mut().flat_map(|page| page.elements.iter_mut()) {
            element.remeasure(fonts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_has_one_empty_page() {
        let project = Project::new("Demo").unwrap();
        assert_eq!(project.name(), "Demo");
        assert_eq!(project.page_count(), 1);
        assert_eq!(project.current_page_index(), 0);
        assert!(project.current_page().is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(Project::new(""), Err(EditorError::InvalidInput(_))));
        assert!(matches!(Project::new("   "), Err(EditorError::InvalidInput(_))));
    }

    #[test]
    fn test_add_page_keeps_active_index() {
        let mut project = Project::new("Demo").unwrap();
        assert_eq!(project.add_page(), 1);
        assert_eq!(project.page_count(), 2);
        assert_eq!(project.current_page_index(), 0);
    }

    #[test]
    fn test_page_bounds() {
        let mut project = Project::new("Demo").unwrap();
        project.add_page();

        assert!(matches!(
            project.set_current_page(-1),
            Err(EditorError::OutOfRange { index: -1, len: 2 })
        ));
        assert!(matches!(
            project.set_current_page(2),
            Err(EditorError::OutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(project.current_page_index(), 0);

        project.set_current_page(1).unwrap();
        assert_eq!(project.current_page_index(), 1);
    }
}

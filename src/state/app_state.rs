use crate::document::{Page, Project};
use crate::element::ElementType;
use crate::error::{EditorError, EditorResult};
use crate::selection::Selection;

/// Process-wide editor state: at most one active project, plus the selection.
///
/// Every mutating method checks its preconditions first, so an `Err` leaves
/// the state exactly as it was.
#[derive(Debug, Default)]
pub struct AppState {
    project: Option<Project>,
    selection: Option<Selection>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn require_project(&self) -> EditorResult<&Project> {
        self.project.as_ref().ok_or(EditorError::NoActiveProject)
    }

    fn require_project_mut(&mut self) -> EditorResult<&mut Project> {
        self.project.as_mut().ok_or(EditorError::NoActiveProject)
    }

    /// Start a new project, replacing (and discarding) the active one.
    pub fn create_project(&mut self, name: &str) -> EditorResult<&Project> {
        let project = Project::new(name)?;
        if let Some(old) = &self.project {
            log::warn!("Discarding project '{}'", old.name());
        }
        Ok(self.replace_project(project))
    }

    /// Install an already-built project (e.g. one loaded from disk).
    pub fn replace_project(&mut self, project: Project) -> &Project {
        self.selection = None;
        self.project.insert(project)
    }

    pub fn add_page(&mut self) -> EditorResult<usize> {
        let index = self.require_project_mut()?.add_page();
        log::info!("Added page {}", index + 1);
        Ok(index)
    }

    pub fn set_current_page(&mut self, index: i64) -> EditorResult<()> {
        let project = self.require_project_mut()?;
        let previous = project.current_page_index();
        project.set_current_page(index)?;
        if project.current_page_index() != previous {
            self.selection = None;
        }
        Ok(())
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.project.as_ref().map(Project::current_page)
    }

    /// Append to the current page; returns the new element's index.
    pub fn add_element(&mut self, element: ElementType) -> EditorResult<usize> {
        let page = self.require_project_mut()?.current_page_mut();
        page.add_element(element);
        let index = page.elements().len() - 1;
        log::debug!("Element {} added to current page", index);
        Ok(index)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Select an element of the current page by index, or clear with `None`.
    pub fn select(&mut self, element: Option<usize>) {
        self.selection = match (&self.project, element) {
            (Some(project), Some(index)) if index < project.current_page().elements().len() => {
                Some(Selection {
                    page: project.current_page_index(),
                    element: index,
                })
            }
            _ => None,
        };
    }

    pub fn selected_element(&self) -> Option<&ElementType> {
        let selection = self.selection?;
        self.project
            .as_ref()?
            .pages()
            .get(selection.page)?
            .element(selection.element)
    }

    pub fn selected_element_mut(&mut self) -> Option<&mut ElementType> {
        let selection = self.selection?;
        let project = self.project.as_mut()?;
        if project.current_page_index() != selection.page {
            return None;
        }
        project.current_page_mut().element_mut(selection.element)
    }
}

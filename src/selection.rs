use egui::Pos2;

use crate::document::Page;
use crate::element::Element;

/// A transient reference into the active project: which element on which page.
///
/// The project stays the sole owner of its elements; a selection is only an
/// index pair and is dropped whenever the page or project changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub page: usize,
    pub element: usize,
}

/// Index of the topmost element containing `pos`, if any.
///
/// Elements are tested last-to-first, so when two overlap the one drawn on
/// top wins.
pub fn hit_test(page: &Page, pos: Pos2) -> Option<usize> {
    page.elements().iter().rposition(|element| element.hit_test(pos))
}

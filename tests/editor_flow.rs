use egui::pos2;
use yearbook_editor::command::Command;
use yearbook_editor::config::EditorConfig;
use yearbook_editor::editor::{Editor, Outcome};
use yearbook_editor::element::Element;
use yearbook_editor::error::EditorError;
use yearbook_editor::event::NoticeLog;
use yearbook_editor::inspector::{InspectorEdit, InspectorView};
use yearbook_editor::prompt::{PromptKind, ScriptedPrompter};
use yearbook_editor::selection::Selection;

fn editor() -> Editor {
    let mut editor = Editor::new(EditorConfig::default()).unwrap();
    editor
        .run(Command::NewProject, &mut ScriptedPrompter::new(["Demo"]))
        .unwrap();
    editor
}

#[test]
fn test_double_click_on_empty_space_creates_text() {
    let mut editor = editor();
    let mut prompter = ScriptedPrompter::new(["Hi"]);

    let outcome = editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut prompter)
        .unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(prompter.asked()[0].kind, PromptKind::ElementText);
    let elements = editor.state().current_page().unwrap().elements();
    assert_eq!(elements.len(), 1);
    let text = elements[0].as_text().unwrap();
    assert_eq!(text.text(), "Hi");
    assert_eq!(elements[0].position(), pos2(10.0, 20.0));
    assert_eq!(text.font_size(), 20.0);
    assert_eq!(text.color(), "#fff");
}

#[test]
fn test_cancelled_text_prompt_creates_nothing() {
    let mut editor = editor();
    let revision = editor.surface().revision();

    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::cancelling())
        .unwrap();
    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::new([""]))
        .unwrap();

    assert!(editor.state().current_page().unwrap().is_empty());
    assert_eq!(editor.surface().revision(), revision);
}

#[test]
fn test_double_click_on_element_selects_it() {
    let mut editor = editor();
    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::new(["Hello"]))
        .unwrap();

    let mut prompter = ScriptedPrompter::cancelling();
    editor
        .run(Command::CanvasDoubleClick(pos2(12.0, 15.0)), &mut prompter)
        .unwrap();

    assert!(prompter.asked().is_empty());
    assert_eq!(editor.state().selection(), Some(Selection { page: 0, element: 0 }));
    assert_eq!(editor.state().current_page().unwrap().elements().len(), 1);
}

#[test]
fn test_click_selects_and_clears() {
    let mut editor = editor();
    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::new(["Hello"]))
        .unwrap();

    editor.execute(Command::CanvasClick(pos2(12.0, 15.0))).unwrap();
    assert!(editor.inspector_view().is_some());

    editor.execute(Command::CanvasClick(pos2(700.0, 500.0))).unwrap();
    assert!(editor.state().selection().is_none());
    assert!(editor.inspector_view().is_none());
}

#[test]
fn test_inspector_edits_repaint() {
    let mut editor = editor();
    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::new(["Hello"]))
        .unwrap();
    editor.execute(Command::CanvasClick(pos2(12.0, 15.0))).unwrap();
    let revision = editor.surface().revision();

    editor
        .execute(Command::Inspect(InspectorEdit::Color("#ff0000".to_owned())))
        .unwrap();
    editor.execute(Command::Inspect(InspectorEdit::X(40.0))).unwrap();

    assert!(editor.surface().revision() > revision);
    match editor.inspector_view().unwrap() {
        InspectorView::Text { color, x, .. } => {
            assert_eq!(color, "#ff0000");
            assert_eq!(x, 40.0);
        }
        other => panic!("unexpected view {:?}", other),
    }
    let red = editor
        .surface()
        .pixels()
        .pixels()
        .filter(|p| p[0] > 200 && p[1] < 60 && p[2] < 60)
        .count();
    assert!(red > 0);
}

#[test]
fn test_bad_inspector_edit_reports_notice() {
    let mut editor = editor();
    let notices = NoticeLog::new();
    editor.subscribe(Box::new(notices.clone()));
    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::new(["Hello"]))
        .unwrap();
    editor.execute(Command::CanvasClick(pos2(12.0, 15.0))).unwrap();

    let result = editor.execute(Command::Inspect(InspectorEdit::FontSize(0.0)));

    assert!(matches!(result, Err(EditorError::InvalidInput(_))));
    assert_eq!(notices.drain().len(), 1);
    let text = editor.state().selected_element().unwrap().as_text().unwrap();
    assert_eq!(text.font_size(), 20.0);
}

#[test]
fn test_changing_page_drops_selection() {
    let mut editor = editor();
    editor
        .run(Command::CanvasDoubleClick(pos2(10.0, 20.0)), &mut ScriptedPrompter::new(["Hello"]))
        .unwrap();
    editor.execute(Command::CanvasClick(pos2(12.0, 15.0))).unwrap();
    editor.execute(Command::AddPage).unwrap();

    editor.execute(Command::SelectPage(1)).unwrap();

    assert!(editor.state().selection().is_none());
    assert!(editor.execute(Command::SelectPage(2)).is_err());
    assert_eq!(editor.state().project().unwrap().current_page_index(), 1);
}

#[test]
fn test_double_click_without_project() {
    let mut editor = Editor::new(EditorConfig::default()).unwrap();
    let mut prompter = ScriptedPrompter::new(["ignored"]);

    let result = editor.run(Command::CanvasDoubleClick(pos2(1.0, 1.0)), &mut prompter);

    assert!(matches!(result, Err(EditorError::NoActiveProject)));
    assert!(prompter.asked().is_empty());
}

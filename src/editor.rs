//! The top-level controller.
//!
//! `Editor` owns the application state, the renderer and the raster surface,
//! and is the only thing that mutates them. UI layers translate input into
//! [`Command`]s and act on the returned [`Outcome`].

use egui::Pos2;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::factory;
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus, EventHandler, Notice};
use crate::export::{self, Download, ExportChoice};
use crate::inspector::{self, InspectorView};
use crate::prompt::{PromptKind, PromptRequest, PromptResponse, Prompter};
use crate::renderer::Renderer;
use crate::selection;
use crate::state::{self, AppState};
use crate::surface::Surface;
use crate::templates;

/// Result of a successfully handled command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done,
    /// The action is suspended until [`Editor::answer`] is called.
    NeedsInput(PromptRequest),
    /// A file for the UI to hand to the user.
    Download(Download),
    /// The UI should open the platform print dialog for the canvas.
    Print,
}

/// Actions waiting on a prompt answer.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingAction {
    NewProject,
    CreateText { position: Pos2 },
    ExportMenu,
}

#[derive(Debug)]
struct Pending {
    request: PromptRequest,
    action: PendingAction,
}

#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    state: AppState,
    renderer: Renderer,
    surface: Surface,
    events: EventBus,
    pending: Option<Pending>,
}

impl Editor {
    pub fn new(config: EditorConfig) -> EditorResult<Self> {
        config.validate()?;
        let renderer = Renderer::from_config(&config)?;
        let surface = Surface::from_config(&config)?;
        log::info!(
            "Editor ready: {}x{} canvas",
            surface.width(),
            surface.height()
        );
        Ok(Self {
            config,
            state: AppState::new(),
            renderer,
            surface,
            events: EventBus::new(),
            pending: None,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// The prompt the user still has to answer, if any.
    pub fn pending_prompt(&self) -> Option<&PromptRequest> {
        self.pending.as_ref().map(|p| &p.request)
    }

    /// Inspector fields for the selected element.
    pub fn inspector_view(&self) -> Option<InspectorView> {
        self.state.selected_element().map(InspectorView::of)
    }

    /// Run a command. Failures are also reported as an error notice, and
    /// never leave partial changes behind.
    pub fn execute(&mut self, command: Command) -> EditorResult<Outcome> {
        log::debug!("Executing {:?}", command);
        let result = if self.pending.is_some() {
            Err(EditorError::InvalidInput(
                "answer the open prompt first".to_owned(),
            ))
        } else {
            self.dispatch(command)
        };
        self.report(result)
    }

    /// Resume the suspended action with the user's answer.
    pub fn answer(&mut self, response: PromptResponse) -> EditorResult<Outcome> {
        let result = match self.pending.take() {
            Some(pending) => self.resume(pending.action, response),
            None => Err(EditorError::InvalidInput("no prompt is open".to_owned())),
        };
        self.report(result)
    }

    /// Run a command to completion, answering prompts with `prompter`.
    pub fn run(&mut self, command: Command, prompter: &mut impl Prompter) -> EditorResult<Outcome> {
        let mut outcome = self.execute(command)?;
        while let Outcome::NeedsInput(request) = &outcome {
            let response = prompter.prompt(request);
            outcome = self.answer(response)?;
        }
        Ok(outcome)
    }

    /// Full repaint of the active page.
    pub fn repaint(&mut self) {
        self.renderer.render_state(&mut self.surface, &self.state);
    }

    fn report(&self, result: EditorResult<Outcome>) -> EditorResult<Outcome> {
        if let Err(e) = &result {
            log::warn!("Operation aborted: {}", e);
            self.events.emit(EditorEvent::Notice(Notice::error(e.to_string())));
        }
        result
    }

    fn ask(&mut self, kind: PromptKind, action: PendingAction) -> Outcome {
        let request = PromptRequest::new(kind);
        self.pending = Some(Pending {
            request: request.clone(),
            action,
        });
        Outcome::NeedsInput(request)
    }

    fn dispatch(&mut self, command: Command) -> EditorResult<Outcome> {
        match command {
            Command::NewProject => Ok(self.ask(PromptKind::ProjectName, PendingAction::NewProject)),
            Command::OpenProject(bytes) => {
                let project = state::deserialize(&bytes, self.renderer.fonts())?;
                let name = self.state.replace_project(project).name().to_owned();
                self.events.emit(EditorEvent::ProjectOpened { name });
                self.repaint();
                Ok(Outcome::Done)
            }
            Command::AddPage => {
                let index = self.state.add_page()?;
                self.events.emit(EditorEvent::PageAdded { index });
                self.repaint();
                Ok(Outcome::Done)
            }
            Command::SelectPage(index) => {
                let had_selection = self.state.selection().is_some();
                self.state.set_current_page(index)?;
                let project = self.state.require_project()?;
                self.events.emit(EditorEvent::PageChanged {
                    index: project.current_page_index(),
                });
                if had_selection && self.state.selection().is_none() {
                    self.events.emit(EditorEvent::SelectionChanged(None));
                }
                self.repaint();
                Ok(Outcome::Done)
            }
            Command::InsertTemplate(kind) => {
                let index = templates::insert_template(&mut self.state, kind, self.renderer.fonts())?;
                self.element_added(index)
            }
            Command::InsertImage { image, position } => {
                self.state.require_project()?;
                let element = factory::create_image(image, position)?;
                let index = self.state.add_element(element)?;
                self.element_added(index)
            }
            Command::CanvasClick(pos) => {
                self.select_at(pos);
                Ok(Outcome::Done)
            }
            Command::CanvasDoubleClick(pos) => {
                self.state.require_project()?;
                if self.select_at(pos).is_some() {
                    return Ok(Outcome::Done);
                }
                Ok(self.ask(
                    PromptKind::ElementText,
                    PendingAction::CreateText { position: pos },
                ))
            }
            Command::Inspect(edit) => {
                self.state.require_project()?;
                let selection = self.state.selection().ok_or_else(|| {
                    EditorError::InvalidInput("no element selected".to_owned())
                })?;
                let field = edit.field_name();
                let element = self.state.selected_element_mut().ok_or_else(|| {
                    EditorError::InvalidInput("no element selected".to_owned())
                })?;
                inspector::apply(element, edit, self.renderer.fonts())?;
                self.events.emit(EditorEvent::ElementEdited {
                    page: selection.page,
                    index: selection.element,
                    field,
                });
                self.repaint();
                Ok(Outcome::Done)
            }
            Command::ClearSelection => {
                if self.state.selection().is_some() {
                    self.state.select(None);
                    self.events.emit(EditorEvent::SelectionChanged(None));
                }
                Ok(Outcome::Done)
            }
            Command::SaveProject => self.download(export::export_json(&self.state)?),
            Command::ExportMenu => Ok(self.ask(PromptKind::ExportFormat, PendingAction::ExportMenu)),
            Command::Export(choice) => self.export(choice),
        }
    }

    fn resume(&mut self, action: PendingAction, response: PromptResponse) -> EditorResult<Outcome> {
        let Some(value) = response.into_value() else {
            log::debug!("Prompt for {:?} cancelled", action);
            return Ok(Outcome::Done);
        };

        match action {
            PendingAction::NewProject => {
                let name = self.state.create_project(&value)?.name().to_owned();
                log::info!("Created project '{}'", name);
                self.events.emit(EditorEvent::ProjectCreated { name });
                self.repaint();
                Ok(Outcome::Done)
            }
            PendingAction::CreateText { position } => {
                self.state.require_project()?;
                let element = factory::create_default_text(
                    value,
                    position,
                    &self.config.default_text,
                    self.renderer.fonts(),
                )?;
                let index = self.state.add_element(element)?;
                self.element_added(index)
            }
            PendingAction::ExportMenu => match value.parse::<ExportChoice>() {
                Ok(choice) => self.export(choice),
                Err(_) => {
                    log::info!("Ignoring unknown export format '{}'", value);
                    Ok(Outcome::Done)
                }
            },
        }
    }

    fn element_added(&mut self, index: usize) -> EditorResult<Outcome> {
        let page = self.state.require_project()?.current_page_index();
        self.events.emit(EditorEvent::ElementAdded { page, index });
        self.repaint();
        Ok(Outcome::Done)
    }

    /// Hit-test the current page and update the selection to match.
    fn select_at(&mut self, pos: Pos2) -> Option<usize> {
        let hit = self
            .state
            .current_page()
            .and_then(|page| selection::hit_test(page, pos));
        let before = self.state.selection();
        self.state.select(hit);
        if self.state.selection() != before {
            log::debug!("Selection changed: {:?}", self.state.selection());
            self.events
                .emit(EditorEvent::SelectionChanged(self.state.selection()));
        }
        hit
    }

    fn export(&mut self, choice: ExportChoice) -> EditorResult<Outcome> {
        match choice {
            ExportChoice::Png => self.download(export::export_png(&self.surface)?),
            ExportChoice::Pdf => self.download(export::export_pdf(&self.surface)?),
            ExportChoice::Print => Ok(Outcome::Print),
        }
    }

    fn download(&mut self, download: Download) -> EditorResult<Outcome> {
        self.events.emit(EditorEvent::DownloadReady {
            file_name: download.file_name.clone(),
        });
        Ok(Outcome::Download(download))
    }
}

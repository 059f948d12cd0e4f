use std::path::Path;

use egui::{Align2, Pos2, pos2};

use crate::command::Command;
use crate::config::EditorConfig;
use crate::editor::{Editor, Outcome};
use crate::error::EditorResult;
use crate::event::{Notice, NoticeLevel, NoticeLog};
use crate::export::Download;
use crate::file_handler::{self, FileHandler};
use crate::panels;
use crate::prompt::{PromptKind, PromptResponse};
use crate::texture_manager::TextureManager;

/// Seconds a notice stays on screen.
const NOTICE_SECONDS: f64 = 4.0;

pub struct YearbookApp {
    editor: Editor,
    notices: NoticeLog,
    /// Notices on screen, with the time they expire.
    toasts: Vec<(Notice, f64)>,
    prompt_input: String,
    textures: TextureManager,
    file_handler: FileHandler,
}

impl std::fmt::Debug for YearbookApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YearbookApp")
            .field("editor", &self.editor)
            .field("toasts", &self.toasts.len())
            .field("textures", &self.textures)
            .finish()
    }
}

impl YearbookApp {
    pub fn new(config: EditorConfig) -> EditorResult<Self> {
        let editor = Editor::new(config)?;
        let notices = NoticeLog::new();
        editor.subscribe(Box::new(notices.clone()));
        Ok(Self {
            editor,
            notices,
            toasts: Vec::new(),
            prompt_input: String::new(),
            textures: TextureManager::new(),
            file_handler: FileHandler::new(),
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// The canvas as a texture, re-uploaded only after a repaint.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.textures.canvas_texture(ctx, self.editor.surface())
    }

    pub fn is_prompt_open(&self) -> bool {
        self.editor.pending_prompt().is_some()
    }

    /// Middle of the canvas, in canvas coordinates.
    pub fn canvas_center(&self) -> Pos2 {
        let surface = self.editor.surface();
        pos2(surface.width() as f32 / 2.0, surface.height() as f32 / 2.0)
    }

    /// Run a command; errors already arrive as notices.
    pub fn execute(&mut self, command: Command) {
        let result = self.editor.execute(command);
        self.handle(result);
    }

    pub fn answer(&mut self, response: PromptResponse) {
        let result = self.editor.answer(response);
        self.handle(result);
    }

    /// Show the native file picker and act on the chosen file.
    pub fn pick_file(&mut self, title: &str, extensions: &[&str]) {
        let Some(path) = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Supported files", extensions)
            .pick_file()
        else {
            return;
        };
        if let Err(err) = self.open_path(&path) {
            log::error!("Failed to open {}: {}", path.display(), err);
            self.toast(Notice::error(err.to_string()));
        }
    }

    fn open_path(&mut self, path: &Path) -> EditorResult<()> {
        let bytes = std::fs::read(path)?;
        let name = path.display().to_string();
        match file_handler::command_for_file(&name, "", bytes, self.canvas_center())? {
            Some(command) => self.execute(command),
            None => self.toast(Notice::error(format!("Unsupported file: {}", name))),
        }
        Ok(())
    }

    fn handle(&mut self, result: EditorResult<Outcome>) {
        match result {
            Ok(Outcome::Done) | Err(_) => {}
            Ok(Outcome::NeedsInput(_)) => self.prompt_input.clear(),
            Ok(Outcome::Download(download)) => self.deliver(download),
            Ok(Outcome::Print) => {
                log::info!("Print requested");
                self.toast(Notice::info(
                    "Printing is not available here; export a PDF and print that",
                ));
            }
        }
    }

    /// Write a download to the configured directory, or ask where to put it.
    fn deliver(&mut self, download: Download) {
        let saved = match &self.editor.config().download_dir {
            Some(dir) => download.save_in(dir).map(Some),
            None => match rfd::FileDialog::new()
                .set_file_name(&download.file_name)
                .save_file()
            {
                Some(path) => download.save_as(&path).map(|()| Some(path)),
                None => Ok(None),
            },
        };
        match saved {
            Ok(Some(path)) => self.toast(Notice::info(format!("Saved {}", path.display()))),
            Ok(None) => log::debug!("Download of {} dismissed", download.file_name),
            Err(err) => {
                log::error!("Failed to save {}: {}", download.file_name, err);
                self.toast(Notice::error(err.to_string()));
            }
        }
    }

    fn toast(&mut self, notice: Notice) {
        // Expiry is stamped on the next frame, once the clock is known.
        self.toasts.push((notice, f64::NAN));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let files = FileHandler::dropped_files(ctx);
        if files.is_empty() {
            return;
        }
        let center = self.canvas_center();
        for command in self.file_handler.process_dropped_files(&files, center) {
            self.execute(command);
        }
        self.file_handler.clear_processed_files();
    }

    fn prompt_window(&mut self, ctx: &egui::Context) {
        let Some(request) = self.editor.pending_prompt().cloned() else {
            return;
        };

        let mut response = None;
        egui::Window::new("Input")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&request.message);

                if request.kind == PromptKind::ExportFormat {
                    ui.horizontal(|ui| {
                        for choice in ["PDF", "PNG", "Print"] {
                            if ui.button(choice).clicked() {
                                response = Some(PromptResponse::Value(choice.to_owned()));
                            }
                        }
                    });
                }

                let edit = ui.text_edit_singleline(&mut self.prompt_input);
                if !edit.has_focus() && !edit.lost_focus() {
                    edit.request_focus();
                }
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        response = Some(PromptResponse::Value(std::mem::take(
                            &mut self.prompt_input,
                        )));
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        response = Some(PromptResponse::Cancelled);
                    }
                });
            });

        if let Some(response) = response {
            self.answer(response);
        }
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.toasts.extend(
            self.notices
                .drain()
                .into_iter()
                .map(|notice| (notice, now + NOTICE_SECONDS)),
        );
        for (_, expires) in &mut self.toasts {
            if expires.is_nan() {
                *expires = now + NOTICE_SECONDS;
            }
        }
        self.toasts.retain(|(_, expires)| *expires > now);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notices"))
            .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .show(ctx, |ui| {
                for (notice, _) in &self.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        let color = match notice.level {
                            NoticeLevel::Info => ui.visuals().text_color(),
                            NoticeLevel::Error => ui.visuals().error_fg_color,
                        };
                        ui.colored_label(color, &notice.message);
                    });
                }
            });
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl eframe::App for YearbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.is_prompt_open() {
            self.handle_dropped_files(ctx);
        }

        panels::toolbar(self, ctx);
        panels::page_list(self, ctx);
        panels::inspector_panel(self, ctx);
        panels::central_panel(self, ctx);

        self.prompt_window(ctx);
        self.show_toasts(ctx);
    }
}

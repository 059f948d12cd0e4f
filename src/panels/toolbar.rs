use crate::YearbookApp;
use crate::command::Command;
use crate::templates::TemplateKind;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

pub fn toolbar(app: &mut YearbookApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        if app.is_prompt_open() {
            ui.disable();
        }

        let mut command = None;
        let mut pick = None;

        ui.horizontal_wrapped(|ui| {
            if ui.button("New Project").clicked() {
                command = Some(Command::NewProject);
            }
            if ui.button("Open…").clicked() {
                pick = Some(("Open project", &["json"][..]));
            }
            if ui.button("Save").clicked() {
                command = Some(Command::SaveProject);
            }
            ui.separator();

            if ui.button("Add Page").clicked() {
                command = Some(Command::AddPage);
            }
            ui.menu_button("Templates", |ui| {
                for kind in TemplateKind::ALL {
                    if ui.button(kind.label()).clicked() {
                        command = Some(Command::InsertTemplate(kind));
                        ui.close_menu();
                    }
                }
            });
            if ui.button("Add Image…").clicked() {
                pick = Some(("Add image", IMAGE_EXTENSIONS));
            }
            ui.separator();

            if ui.button("Export…").clicked() {
                command = Some(Command::ExportMenu);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match app.editor().state().project() {
                    Some(project) => ui.strong(project.name()),
                    None => ui.weak("No project"),
                };
            });
        });

        if let Some(command) = command {
            app.execute(command);
        }
        if let Some((title, extensions)) = pick {
            app.pick_file(title, extensions);
        }
    });
}

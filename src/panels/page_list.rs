use crate::YearbookApp;
use crate::command::Command;

pub fn page_list(app: &mut YearbookApp, ctx: &egui::Context) {
    egui::SidePanel::left("page_list")
        .resizable(false)
        .default_width(120.0)
        .show(ctx, |ui| {
            if app.is_prompt_open() {
                ui.disable();
            }
            ui.heading("Pages");

            let Some(project) = app.editor().state().project() else {
                ui.weak("Create a project to start");
                return;
            };

            let current = project.current_page_index();
            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, page) in project.pages().iter().enumerate() {
                    let label = format!("Page {} ({})", index + 1, page.elements().len());
                    if ui.selectable_label(index == current, label).clicked() {
                        clicked = Some(index);
                    }
                }
            });

            if let Some(index) = clicked {
                app.execute(Command::SelectPage(index as i64));
            }
        });
}

use egui::{Color32, Rect, Sense, Stroke, pos2, vec2};

use crate::YearbookApp;
use crate::command::Command;
use crate::element::Element;

pub fn central_panel(app: &mut YearbookApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.is_prompt_open() {
            ui.disable();
        }

        egui::ScrollArea::both().show(ui, |ui| {
            let surface = app.editor().surface();
            let size = vec2(surface.width() as f32, surface.height() as f32);
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            let canvas = response.rect;

            let texture = app.canvas_texture(ctx);
            painter.image(
                texture,
                canvas,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );

            // Selection outline is an overlay, the surface itself never shows it.
            if let Some(element) = app.editor().state().selected_element() {
                let outline = element.rect().translate(canvas.min.to_vec2());
                painter.rect_stroke(outline.expand(2.0), 0.0, Stroke::new(1.5, Color32::YELLOW));
            }

            if app.editor().state().project().is_none() {
                painter.text(
                    canvas.center(),
                    egui::Align2::CENTER_CENTER,
                    "New Project to begin",
                    egui::FontId::proportional(18.0),
                    Color32::GRAY,
                );
            }

            let Some(pointer) = response.interact_pointer_pos() else {
                return;
            };
            let at = (pointer - canvas.min).to_pos2();
            if response.double_clicked() {
                app.execute(Command::CanvasDoubleClick(at));
            } else if response.clicked() {
                app.execute(Command::CanvasClick(at));
            }
        });
    });
}

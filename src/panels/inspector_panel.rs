use egui::{Color32, DragValue};

use crate::YearbookApp;
use crate::color::{parse_css_color, to_hex};
use crate::command::Command;
use crate::fonts::FONT_CHOICES;
use crate::inspector::{InspectorEdit, InspectorView};

pub fn inspector_panel(app: &mut YearbookApp, ctx: &egui::Context) {
    egui::SidePanel::right("inspector")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            if app.is_prompt_open() {
                ui.disable();
            }
            ui.heading("Inspector");

            let Some(view) = app.editor().inspector_view() else {
                ui.weak("Click an element to edit it");
                return;
            };

            let mut edits = Vec::new();
            egui::Grid::new("inspector_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| match view {
                    InspectorView::Text {
                        mut text,
                        mut font_family,
                        mut font_size,
                        color,
                        mut x,
                        mut y,
                    } => {
                        ui.label("Text");
                        // An empty heading is rejected, so keep the old text until something is typed.
                        if ui.text_edit_singleline(&mut text).changed() && !text.is_empty() {
                            edits.push(InspectorEdit::Text(text));
                        }
                        ui.end_row();

                        ui.label("Font");
                        let current_family = font_family.clone();
                        egui::ComboBox::from_id_salt("font_family")
                            .selected_text(font_family.as_str())
                            .show_ui(ui, |ui| {
                                for &choice in FONT_CHOICES {
                                    ui.selectable_value(&mut font_family, choice.to_owned(), choice);
                                }
                            });
                        if font_family != current_family {
                            edits.push(InspectorEdit::FontFamily(font_family));
                        }
                        ui.end_row();

                        ui.label("Size");
                        if ui
                            .add(DragValue::new(&mut font_size).range(1.0..=400.0).speed(0.5))
                            .changed()
                        {
                            edits.push(InspectorEdit::FontSize(font_size));
                        }
                        ui.end_row();

                        ui.label("Color");
                        let mut rgba = match parse_css_color(&color) {
                            Ok(c) => Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]),
                            Err(_) => Color32::WHITE,
                        };
                        if ui.color_edit_button_srgba(&mut rgba).changed() {
                            let [r, g, b, a] = rgba.to_srgba_unmultiplied();
                            edits.push(InspectorEdit::Color(to_hex(image::Rgba([r, g, b, a]))));
                        }
                        ui.end_row();

                        position_rows(ui, &mut x, &mut y, &mut edits);
                    }
                    InspectorView::Image {
                        mut x,
                        mut y,
                        mut width,
                        mut height,
                    } => {
                        position_rows(ui, &mut x, &mut y, &mut edits);

                        ui.label("Width");
                        if ui.add(DragValue::new(&mut width).range(1.0..=10_000.0)).changed() {
                            edits.push(InspectorEdit::Width(width));
                        }
                        ui.end_row();

                        ui.label("Height");
                        if ui.add(DragValue::new(&mut height).range(1.0..=10_000.0)).changed() {
                            edits.push(InspectorEdit::Height(height));
                        }
                        ui.end_row();
                    }
                });

            ui.separator();
            let deselect = ui.button("Deselect").clicked();

            for edit in edits {
                app.execute(Command::Inspect(edit));
            }
            if deselect {
                app.execute(Command::ClearSelection);
            }
        });
}

fn position_rows(ui: &mut egui::Ui, x: &mut f32, y: &mut f32, edits: &mut Vec<InspectorEdit>) {
    ui.label("X");
    if ui.add(DragValue::new(x)).changed() {
        edits.push(InspectorEdit::X(*x));
    }
    ui.end_row();

    ui.label("Y");
    if ui.add(DragValue::new(y)).changed() {
        edits.push(InspectorEdit::Y(*y));
    }
    ui.end_row();
}

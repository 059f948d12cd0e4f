#![warn(clippy::all, rust_2018_idioms)]

use yearbook_editor::{EditorConfig, YearbookApp};

fn main() -> eframe::Result {
    env_logger::init();

    let config = EditorConfig::load().unwrap_or_else(|err| {
        log::error!("Ignoring configuration: {}", err);
        EditorConfig::default()
    });

    let window_size = [
        config.canvas_width as f32 + 420.0,
        config.canvas_height as f32 + 120.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Yearbook Editor")
            .with_inner_size(window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Yearbook Editor",
        options,
        Box::new(|_cc| {
            let app = YearbookApp::new(config).map_err(|e| e.to_string())?;
            Ok(Box::new(app))
        }),
    )
}

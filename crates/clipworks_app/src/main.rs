mod app;
mod config;
mod effects;
mod logging;
mod ui;

fn main() -> Result<(), eframe::Error> {
    logging::initialize();

    let config = config::load_default();
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(980.0, 680.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Clipworks",
        options,
        Box::new(move |_cc| Box::new(app::ClipworksApp::new(&config))),
    )
}

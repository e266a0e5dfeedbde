mod engine;
mod model;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ui::settings_io::load_settings();
    log::info!("Starting SportSync (ui_scale={})", settings.ui_scale);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SportSync")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SportSync",
        options,
        Box::new(move |cc| Ok(Box::new(ui::app::SportSyncApp::new(cc, settings)))),
    )
}

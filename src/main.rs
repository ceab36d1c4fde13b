#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use eframe::NativeOptions;

mod app;
mod chart;
mod color_match;
mod dataset;
mod hex;
mod image_io;
mod picker;

/// Entry point: eframe/egui desktop app. The reference palette is loaded
/// exactly once here and handed to the app; a bad dataset is fatal.
fn main() -> eframe::Result<()> {
    env_logger::init();
    let dataset = match dataset::load_embedded() {
        Ok(ds) => {
            log::info!("color dataset loaded ({} entries)", ds.len());
            ds
        }
        Err(e) => {
            log::error!("cannot start without a color dataset: {e}");
            eprintln!("cannot start without a color dataset: {e}");
            std::process::exit(1);
        }
    };
    let native_options = NativeOptions::default();
    eframe::run_native(
        "Color Tools",
        native_options,
        Box::new(move |cc| Box::new(app::ColorApp::new(cc, dataset))),
    )
}

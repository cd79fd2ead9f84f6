mod analysis;
mod app;
mod config;
mod data;
mod error;
mod selection;
mod session;
mod state;
mod ui;

use app::SpectralWorkbenchApp;
use config::Settings;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("{e:#}; falling back to default settings");
        Settings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spectral Workbench",
        options,
        Box::new(|_cc| Ok(Box::new(SpectralWorkbenchApp::new(settings)))),
    )
}

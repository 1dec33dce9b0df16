mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context};
use app::TalentPoolApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::load(Path::new(config::CONFIG_FILE))?;

    // The dashboard has nothing to show without data: a failed load is fatal.
    let table = data::loader::load_file(&config.data_path, config.encoding)
        .map_err(|e| {
            log::error!("Failed to load candidates: {e:#}");
            e
        })
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let state = AppState::new(table, config.data_path.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        app::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(TalentPoolApp::new(state, config)))),
    )
    .map_err(|e| anyhow!("running the UI: {e}"))
}

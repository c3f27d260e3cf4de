mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::TrackScatterApp;
use eframe::egui;
use state::AppState;

/// Fixed dataset path read at startup.
const DATA_PATH: &str = "data/out.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load before any window exists so I/O and parse failures exit non-zero
    // without touching the display.
    let dataset = data::loader::load_file(Path::new(DATA_PATH))
        .with_context(|| format!("loading {DATA_PATH}"))?;
    log::info!("Loaded {} tracks from {DATA_PATH}", dataset.len());

    let mut state = AppState::default();
    state.set_dataset(dataset, DATA_PATH);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Trackscatter – Audio Feature Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(TrackScatterApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("starting UI: {e}"))
}

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dataset summary and legend
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dataset");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    if let Some(name) = &state.source_name {
        ui.label(RichText::new(name).italics());
        ui.add_space(4.0);
    }

    ui.label(format!("{} tracks", dataset.len()));
    if let Some((lo, hi)) = dataset.x_range() {
        ui.label(format!("Duration: {lo:.1} – {hi:.1}"));
    }
    if let Some((lo, hi)) = dataset.y_range() {
        ui.label(format!("Danceability: {lo:.3} – {hi:.3}"));
    }
    if let Some((lo, hi)) = dataset.color_range() {
        ui.label(format!("Centroid: {lo:.3} – {hi:.3}"));
    }

    ui.separator();

    // ---- Centroid colour legend ----
    ui.strong("Centroid scale");
    if let Some(scale) = &state.color_scale {
        for (value, color) in scale.legend_stops(6) {
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new("■").color(color));
                ui.label(format!("{value:.3}"));
            });
        }
    } else {
        ui.label("No rows to colour.");
    }

    ui.separator();

    // ---- Display options ----
    ui.strong("Display");
    ui.add(egui::Slider::new(&mut state.point_radius, 1.0..=8.0).text("Point size"));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} tracks loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open feature data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} tracks from {}", dataset.len(), path.display());
                state.set_dataset(dataset, path.display().to_string());
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}

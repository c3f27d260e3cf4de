use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Feature scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the duration/danceability scatter in the central panel.
pub fn feature_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view tracks  (File → Open…)");
            });
            return;
        }
    };

    // An empty dataset simply renders an empty plot.
    let scale = state.color_scale;

    Plot::new("feature_plot")
        .x_axis_label("Duration")
        .y_axis_label("Danceability")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for i in 0..dataset.len() {
                let color = scale
                    .map(|s| s.color_for(dataset.color[i]))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let marker = Points::new(vec![[dataset.x[i], dataset.y[i]]])
                    .color(color)
                    .radius(state.point_radius)
                    .shape(MarkerShape::Circle);

                plot_ui.points(marker);
            }
        });
}
